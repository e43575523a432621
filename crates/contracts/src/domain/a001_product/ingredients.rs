//! Text forms of the product's list fields.
//!
//! The authoring form edits every list as separate lines; the payload carries
//! them as arrays. Ingredients additionally use the `Name:Percentage` line
//! format.

use super::aggregate::Ingredient;
use crate::shared::validation::ValidationError;

/// Join entries with newlines, skipping blank ones
pub fn join_lines<S: AsRef<str>>(entries: &[S]) -> String {
    entries
        .iter()
        .map(|e| e.as_ref().trim())
        .filter(|e| !e.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split text into trimmed non-blank lines
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse `Name:Percentage` lines.
///
/// Each line is split on its first `:` and both halves are trimmed. Lines
/// without a separator are dropped.
pub fn parse_ingredients(text: &str) -> Vec<Ingredient> {
    text.lines()
        .filter_map(|line| {
            let (name, percentage) = line.split_once(':')?;
            Some(Ingredient {
                name: name.trim().to_string(),
                percentage: percentage.trim().to_string(),
            })
        })
        .collect()
}

/// Inverse of [`parse_ingredients`] for well-formed lines
pub fn join_ingredients(ingredients: &[Ingredient]) -> String {
    ingredients
        .iter()
        .map(format_ingredient)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_ingredient(ingredient: &Ingredient) -> String {
    format!("{}:{}", ingredient.name, ingredient.percentage)
}

/// Reject non-blank entries that lack the `:` separator.
///
/// `line` in the error is the 1-based entry index, blank entries included.
pub fn validate_ingredient_entries<S: AsRef<str>>(entries: &[S]) -> Result<(), ValidationError> {
    for (idx, entry) in entries.iter().enumerate() {
        let trimmed = entry.as_ref().trim();
        if !trimmed.is_empty() && !trimmed.contains(':') {
            return Err(ValidationError::MalformedIngredient {
                line: idx + 1,
                text: trimmed.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_on_first_colon() {
        let parsed = parse_ingredients(" Nitrogen : 46% \nRatio:1:2");
        assert_eq!(
            parsed,
            vec![
                Ingredient { name: "Nitrogen".into(), percentage: "46%".into() },
                Ingredient { name: "Ratio".into(), percentage: "1:2".into() },
            ]
        );
    }

    #[test]
    fn test_parse_drops_lines_without_separator() {
        let parsed = parse_ingredients("Nitrogen:46%\njust text\n\nSulphur:10%");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].name, "Sulphur");
    }

    #[test]
    fn test_join_reproduces_trimmed_well_formed_lines() {
        let input = "  Nitrogen:46%\nPhosphorus:18%  \nK2O:0%";
        let expected: Vec<&str> = input.lines().map(str::trim).collect();
        assert_eq!(join_ingredients(&parse_ingredients(input)), expected.join("\n"));
    }

    #[test]
    fn test_validate_reports_first_bad_line() {
        assert!(validate_ingredient_entries(&["Nitrogen:46%", "", "  ", "Zinc:2%"]).is_ok());
        assert_eq!(
            validate_ingredient_entries(&["Nitrogen:46%", "Zinc 2%"]),
            Err(ValidationError::MalformedIngredient { line: 2, text: "Zinc 2%".into() })
        );
    }

    #[test]
    fn test_validate_entries_counts_blank_rows() {
        let entries = vec!["Nitrogen:46%".to_string(), String::new(), "Sulphur".to_string()];
        assert_eq!(
            validate_ingredient_entries(&entries),
            Err(ValidationError::MalformedIngredient { line: 3, text: "Sulphur".into() })
        );
    }

    #[test]
    fn test_join_and_split_lines() {
        let entries = vec!["Wear gloves".to_string(), "  ".to_string(), " Wash hands ".to_string()];
        let joined = join_lines(&entries);
        assert_eq!(joined, "Wear gloves\nWash hands");
        assert_eq!(split_lines(&joined), vec!["Wear gloves", "Wash hands"]);
        assert_eq!(join_lines::<String>(&[]), "");
    }
}
