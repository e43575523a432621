//! Step machine of the product wizard.
//!
//! Framework-free: the view model keeps one [`ProductFormState`] in a signal
//! and every command goes through the methods here.

use contracts::domain::a001_product::aggregate::{
    derive_product_id, Application, Composition, ContactInfo, Product, ProductDto, ProductId,
    Safety,
};
use contracts::domain::a001_product::ingredients::{
    format_ingredient, join_lines, parse_ingredients, validate_ingredient_entries,
};
use contracts::domain::a002_batch::aggregate::BatchDto;
use contracts::shared::validation::{is_valid_email, ValidationError};

pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update,
}

/// The six growable line lists of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListField {
    Ingredients,
    Advantages,
    RecommendedCrops,
    ApplicationSteps,
    PpeInstructions,
    HygieneInstructions,
}

impl ListField {
    pub fn label(&self) -> &'static str {
        match self {
            ListField::Ingredients => "Ingredients",
            ListField::Advantages => "Advantages",
            ListField::RecommendedCrops => "Recommended crops",
            ListField::ApplicationSteps => "Application steps",
            ListField::PpeInstructions => "PPE instructions",
            ListField::HygieneInstructions => "Hygiene instructions",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ListField::Ingredients => "Nitrogen:46%",
            ListField::Advantages => "Improves leaf growth",
            ListField::RecommendedCrops => "Maize",
            ListField::ApplicationSteps => "Apply 50 kg per acre before planting",
            ListField::PpeInstructions => "Wear gloves",
            ListField::HygieneInstructions => "Wash hands after use",
        }
    }
}

/// Dynamic list of single-line entries; never shorter than one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringList(Vec<String>);

impl Default for StringList {
    fn default() -> Self {
        Self(vec![String::new()])
    }
}

impl StringList {
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = values.into_iter().map(Into::into).collect();
        if entries.is_empty() {
            Self::default()
        } else {
            Self(entries)
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|e| e.trim().is_empty())
    }

    pub fn push_empty(&mut self) {
        self.0.push(String::new());
    }

    pub fn set(&mut self, index: usize, value: String) {
        if let Some(entry) = self.0.get_mut(index) {
            *entry = value;
        }
    }

    /// Remove an entry; the last remaining one is kept
    pub fn remove(&mut self, index: usize) -> bool {
        if self.0.len() <= 1 || index >= self.0.len() {
            return false;
        }
        self.0.remove(index);
        true
    }

    /// Newline-joined text with blank entries dropped
    pub fn joined(&self) -> String {
        join_lines(&self.0)
    }

    /// Trimmed non-blank entries
    pub fn values(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|e| e.trim())
            .filter(|e| !e.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductFormState {
    pub mode: FormMode,
    pub step: u8,
    pub submitting: bool,

    pub name: String,
    pub product_id: String,
    /// Set once the id was typed by hand; name changes stop rewriting it
    pub product_id_edited: bool,
    pub short_description: String,
    pub full_description: String,

    pub batch_number: String,
    pub manufacturing_date: String,
    pub expiry_date: String,

    pub ingredients: StringList,
    pub advantages: StringList,
    pub recommended_crops: StringList,
    pub application_steps: StringList,
    pub ppe_instructions: StringList,
    pub hygiene_instructions: StringList,

    pub address: String,
    /// One phone number per line or comma-separated
    pub phones: String,
    pub email: String,
    pub website: String,
}

impl ProductFormState {
    pub fn new_create() -> Self {
        Self {
            mode: FormMode::Create,
            step: FIRST_STEP,
            submitting: false,
            name: String::new(),
            product_id: String::new(),
            product_id_edited: false,
            short_description: String::new(),
            full_description: String::new(),
            batch_number: String::new(),
            manufacturing_date: String::new(),
            expiry_date: String::new(),
            ingredients: StringList::default(),
            advantages: StringList::default(),
            recommended_crops: StringList::default(),
            application_steps: StringList::default(),
            ppe_instructions: StringList::default(),
            hygiene_instructions: StringList::default(),
            address: String::new(),
            phones: String::new(),
            email: String::new(),
            website: String::new(),
        }
    }

    /// Update-mode state pre-filled from a stored product
    pub fn from_product(product: &Product) -> Self {
        let ingredients = product
            .composition
            .ingredients
            .iter()
            .map(format_ingredient);
        Self {
            mode: FormMode::Update,
            name: product.name.clone(),
            product_id: product.product_id.value().to_string(),
            product_id_edited: true,
            short_description: product.short_description.clone(),
            full_description: product.full_description.clone(),
            ingredients: StringList::from_values(ingredients),
            advantages: StringList::from_values(product.composition.advantages.clone()),
            recommended_crops: StringList::from_values(
                product.application.recommended_crops.clone(),
            ),
            application_steps: StringList::from_values(product.application.instructions.clone()),
            ppe_instructions: StringList::from_values(product.safety.ppe_instructions.clone()),
            hygiene_instructions: StringList::from_values(
                product.safety.hygiene_instructions.clone(),
            ),
            address: product.contact.address.clone(),
            phones: product.contact.phones.join("\n"),
            email: product.contact.email.clone(),
            website: product.contact.website.clone(),
            ..Self::new_create()
        }
    }

    pub fn is_create(&self) -> bool {
        self.mode == FormMode::Create
    }

    pub fn list(&self, field: ListField) -> &StringList {
        match field {
            ListField::Ingredients => &self.ingredients,
            ListField::Advantages => &self.advantages,
            ListField::RecommendedCrops => &self.recommended_crops,
            ListField::ApplicationSteps => &self.application_steps,
            ListField::PpeInstructions => &self.ppe_instructions,
            ListField::HygieneInstructions => &self.hygiene_instructions,
        }
    }

    pub fn list_mut(&mut self, field: ListField) -> &mut StringList {
        match field {
            ListField::Ingredients => &mut self.ingredients,
            ListField::Advantages => &mut self.advantages,
            ListField::RecommendedCrops => &mut self.recommended_crops,
            ListField::ApplicationSteps => &mut self.application_steps,
            ListField::PpeInstructions => &mut self.ppe_instructions,
            ListField::HygieneInstructions => &mut self.hygiene_instructions,
        }
    }

    /// Change the name; an id that was never hand-edited follows it
    pub fn set_name(&mut self, name: String) {
        if self.is_create() && !self.product_id_edited {
            self.product_id = derive_product_id(&name);
        }
        self.name = name;
    }

    /// Hand-edit the id. It stays pinned, even when cleared.
    pub fn set_product_id(&mut self, value: String) {
        self.product_id = value;
        self.product_id_edited = true;
    }

    /// Drop a hand-edited id and derive it from the name again
    pub fn reset_product_id(&mut self) {
        self.product_id_edited = false;
        self.product_id = derive_product_id(&self.name);
    }

    pub fn validate_step(&self, step: u8) -> Result<(), ValidationError> {
        match (step, self.mode) {
            (1, FormMode::Create) => {
                if self.name.trim().is_empty() {
                    return Err(ValidationError::ProductNameRequired);
                }
                if self.product_id.trim().is_empty() {
                    return Err(ValidationError::ProductIdRequired);
                }
                Ok(())
            }
            (2, FormMode::Create) => {
                if self.batch_number.trim().is_empty() {
                    return Err(ValidationError::BatchNumberRequired);
                }
                Ok(())
            }
            (2, FormMode::Update) => validate_ingredient_entries(self.ingredients.entries()),
            (4, FormMode::Update) => {
                let email = self.email.trim();
                if !email.is_empty() && !is_valid_email(email) {
                    return Err(ValidationError::InvalidEmail);
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Advance after validating the current step.
    ///
    /// `Ok(false)` when nothing moved: already on the last step or a
    /// submission is running.
    pub fn next(&mut self) -> Result<bool, ValidationError> {
        if self.submitting || self.step >= LAST_STEP {
            return Ok(false);
        }
        self.validate_step(self.step)?;
        self.step += 1;
        Ok(true)
    }

    pub fn prev(&mut self) -> bool {
        if self.submitting || self.step <= FIRST_STEP {
            return false;
        }
        self.step -= 1;
        true
    }

    pub fn can_close(&self) -> bool {
        !self.submitting
    }

    pub fn is_last_step(&self) -> bool {
        self.step == LAST_STEP
    }

    /// Everything a submission needs, in step order
    pub fn validate_for_submit(&self) -> Result<(), ValidationError> {
        for step in FIRST_STEP..=LAST_STEP {
            self.validate_step(step)?;
        }
        match self.mode {
            FormMode::Create => {
                self.to_product_dto().validate()?;
                self.first_batch_dto().validate().map(|_| ())
            }
            FormMode::Update => self.to_product_dto().validate(),
        }
    }

    pub fn phone_list(&self) -> Vec<String> {
        self.phones
            .split(|c| c == '\n' || c == ',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// `productData` payload; list texts are derived here from the current lists
    pub fn to_product_dto(&self) -> ProductDto {
        ProductDto {
            product_id: ProductId::new(self.product_id.trim()),
            name: self.name.trim().to_string(),
            short_description: self.short_description.trim().to_string(),
            full_description: self.full_description.trim().to_string(),
            composition: Composition {
                ingredients: parse_ingredients(&self.ingredients.joined()),
                advantages: self.advantages.values(),
            },
            application: Application {
                instructions: self.application_steps.values(),
                recommended_crops: self.recommended_crops.values(),
            },
            safety: Safety {
                ppe_instructions: self.ppe_instructions.values(),
                hygiene_instructions: self.hygiene_instructions.values(),
            },
            contact: ContactInfo {
                address: self.address.trim().to_string(),
                phones: self.phone_list(),
                email: self.email.trim().to_string(),
                website: self.website.trim().to_string(),
            },
        }
    }

    /// First batch of a newly created product
    pub fn first_batch_dto(&self) -> BatchDto {
        BatchDto {
            product_id: ProductId::new(self.product_id.trim()),
            number: self.batch_number.clone(),
            manufacturing_date: self.manufacturing_date.clone(),
            expiry_date: self.expiry_date.clone(),
        }
        .normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::aggregate::Ingredient;

    fn filled_create() -> ProductFormState {
        let mut state = ProductFormState::new_create();
        state.set_name("Urea Gold".into());
        state.batch_number = "UG-001".into();
        state.manufacturing_date = "2024-01-01".into();
        state.expiry_date = "2025-01-01".into();
        state
    }

    #[test]
    fn test_lists_start_with_one_empty_entry_and_keep_one() {
        let mut list = StringList::default();
        assert_eq!(list.entries(), &[String::new()]);
        assert!(!list.remove(0));

        list.push_empty();
        list.set(1, "Maize".into());
        assert!(list.remove(0));
        assert_eq!(list.entries(), &["Maize".to_string()]);
        assert!(!list.remove(0));
    }

    #[test]
    fn test_joined_text_follows_lists() {
        let mut state = ProductFormState::new_create();
        state.list_mut(ListField::Advantages).set(0, " Fast ".into());
        state.list_mut(ListField::Advantages).push_empty();
        state.list_mut(ListField::Advantages).push_empty();
        state.list_mut(ListField::Advantages).set(2, "Cheap".into());
        assert_eq!(state.list(ListField::Advantages).joined(), "Fast\nCheap");
        assert_eq!(state.to_product_dto().composition.advantages, vec!["Fast", "Cheap"]);
    }

    #[test]
    fn test_name_derives_id_until_hand_edited() {
        let mut state = ProductFormState::new_create();
        state.set_name("Urea Gold".into());
        assert_eq!(state.product_id, "urea-gold");

        state.set_product_id("ug".into());
        state.set_name("Urea Gold Plus".into());
        assert_eq!(state.product_id, "ug");

        state.set_product_id(String::new());
        state.set_name("Urea Gold Max".into());
        assert_eq!(state.product_id, "");

        state.reset_product_id();
        assert_eq!(state.product_id, "urea-gold-max");
        state.set_name("K Plus 50%!".into());
        assert_eq!(state.product_id, "k-plus-50");
    }

    #[test]
    fn test_step_one_requires_name() {
        let mut state = ProductFormState::new_create();
        assert_eq!(state.next(), Err(ValidationError::ProductNameRequired));
        assert_eq!(state.step, 1);
        assert_eq!(
            ValidationError::ProductNameRequired.to_string(),
            "Product name is required"
        );

        state.set_name("Urea Gold".into());
        state.set_product_id(" ".into());
        assert_eq!(state.next(), Err(ValidationError::ProductIdRequired));
    }

    #[test]
    fn test_navigation_bounds() {
        let mut state = filled_create();
        assert!(!state.prev());
        assert_eq!(state.step, FIRST_STEP);

        for _ in 0..3 {
            assert_eq!(state.next(), Ok(true));
        }
        assert_eq!(state.step, LAST_STEP);
        assert_eq!(state.next(), Ok(false));
        assert_eq!(state.step, LAST_STEP);
        assert!(state.prev());
        assert_eq!(state.step, 3);
    }

    #[test]
    fn test_navigation_blocked_while_submitting() {
        let mut state = filled_create();
        state.step = 2;
        state.submitting = true;
        assert_eq!(state.next(), Ok(false));
        assert!(!state.prev());
        assert!(!state.can_close());
        assert_eq!(state.step, 2);
    }

    #[test]
    fn test_step_two_gates_by_mode() {
        let mut state = filled_create();
        state.batch_number = "  ".into();
        state.step = 2;
        assert_eq!(state.next(), Err(ValidationError::BatchNumberRequired));

        let mut update = ProductFormState::from_product(&Product {
            product_id: ProductId::new("urea-gold"),
            name: "Urea Gold".into(),
            ..Default::default()
        });
        update.step = 2;
        update.ingredients.set(0, "Nitrogen:46%".into());
        update.ingredients.push_empty();
        update.ingredients.set(1, "Sulphur".into());
        assert_eq!(
            update.next(),
            Err(ValidationError::MalformedIngredient {
                line: 2,
                text: "Sulphur".into()
            })
        );
        update.ingredients.set(1, "Sulphur: 2%".into());
        assert_eq!(update.next(), Ok(true));
    }

    #[test]
    fn test_malformed_ingredient_names_the_visible_row() {
        let mut update = ProductFormState::from_product(&Product {
            product_id: ProductId::new("urea-gold"),
            name: "Urea Gold".into(),
            ..Default::default()
        });
        update.ingredients.set(0, "Nitrogen:46%".into());
        update.ingredients.push_empty();
        update.ingredients.push_empty();
        update.ingredients.set(2, "Sulphur".into());
        assert_eq!(
            update.validate_step(2),
            Err(ValidationError::MalformedIngredient {
                line: 3,
                text: "Sulphur".into()
            })
        );
    }

    #[test]
    fn test_step_four_email_only_checked_on_update() {
        let mut update = ProductFormState::from_product(&Product {
            product_id: ProductId::new("urea-gold"),
            name: "Urea Gold".into(),
            ..Default::default()
        });
        update.email = "not-an-email".into();
        assert_eq!(update.validate_step(4), Err(ValidationError::InvalidEmail));
        update.email = String::new();
        assert_eq!(update.validate_step(4), Ok(()));

        let mut create = filled_create();
        create.email = "not-an-email".into();
        assert_eq!(create.validate_step(4), Ok(()));
        assert_eq!(create.validate_for_submit(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_submit_checks_batch_dates() {
        let mut state = filled_create();
        state.manufacturing_date = "2024-01-01".into();
        state.expiry_date = "2023-12-31".into();
        let err = state.validate_for_submit().unwrap_err();
        assert_eq!(err.to_string(), "Expiry date must be after manufacturing date");

        state.expiry_date = "2024-06-01".into();
        assert_eq!(state.validate_for_submit(), Ok(()));
    }

    #[test]
    fn test_payload_from_lists() {
        let mut state = filled_create();
        state.ingredients.set(0, " Nitrogen : 46% ".into());
        state.ingredients.push_empty();
        state.ingredients.push_empty();
        state.ingredients.set(2, "no separator".into());
        state.phones = "+254 700 000001, +254 700 000002\n".into();

        let dto = state.to_product_dto();
        assert_eq!(dto.product_id.value(), "urea-gold");
        assert_eq!(
            dto.composition.ingredients,
            vec![Ingredient {
                name: "Nitrogen".into(),
                percentage: "46%".into()
            }]
        );
        assert_eq!(dto.contact.phones.len(), 2);

        let batch = state.first_batch_dto();
        assert_eq!(batch.product_id.value(), "urea-gold");
        assert_eq!(batch.number, "UG-001");
    }

    #[test]
    fn test_from_product_round_trips_lists() {
        let mut product = Product {
            product_id: ProductId::new("urea-gold"),
            name: "Urea Gold".into(),
            ..Default::default()
        };
        product.composition.ingredients = vec![Ingredient {
            name: "Nitrogen".into(),
            percentage: "46%".into(),
        }];
        product.safety.ppe_instructions = vec!["Wear gloves".into()];

        let state = ProductFormState::from_product(&product);
        assert_eq!(state.mode, FormMode::Update);
        assert!(state.product_id_edited);
        assert_eq!(state.ingredients.joined(), "Nitrogen:46%");
        assert_eq!(state.advantages.entries(), &[String::new()]);
        assert_eq!(
            state.to_product_dto().composition.ingredients,
            product.composition.ingredients
        );
    }
}
