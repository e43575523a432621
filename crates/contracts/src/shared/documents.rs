//! Certification document fields.
//!
//! The API stores every document category as one comma-joined string of file
//! paths, or a placeholder sentence when nothing was uploaded.

/// Placeholder the API stores for an empty category
pub const NO_DOCUMENTS_UPLOADED: &str = "No documents uploaded";

const PLACEHOLDERS: &[&str] = &["no documents uploaded", "no document uploaded", "not available"];

/// Document categories attachable to a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentCategory {
    NpsApproval,
    Msds,
    QualityCertifications,
}

impl DocumentCategory {
    pub const ALL: [DocumentCategory; 3] = [
        DocumentCategory::NpsApproval,
        DocumentCategory::Msds,
        DocumentCategory::QualityCertifications,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DocumentCategory::NpsApproval => "NPS Approval",
            DocumentCategory::Msds => "MSDS",
            DocumentCategory::QualityCertifications => "Quality Certifications",
        }
    }

    /// Multipart field carrying newly uploaded files of this category
    pub fn form_field(&self) -> &'static str {
        match self {
            DocumentCategory::NpsApproval => "npsApprovalFiles",
            DocumentCategory::Msds => "msdsFiles",
            DocumentCategory::QualityCertifications => "certificationsFiles",
        }
    }
}

/// Whether a single segment is a "nothing here" sentence rather than a path
pub fn is_placeholder(segment: &str) -> bool {
    let lower = segment.to_lowercase();
    PLACEHOLDERS.iter().any(|p| lower.contains(p))
}

/// Downloadable paths of a document field, in stored order
pub fn available_documents(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty() && !is_placeholder(segment))
        .map(str::to_string)
        .collect()
}

pub fn has_documents(value: &str) -> bool {
    !available_documents(value).is_empty()
}

/// Last path segment, used as the download file name and as the label
pub fn document_file_name(path: &str) -> &str {
    path.rsplit(['/', '\\'])
        .find(|s| !s.is_empty())
        .unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_only_field() {
        assert!(available_documents("No documents uploaded").is_empty());
        assert!(available_documents("no document uploaded").is_empty());
        assert!(available_documents("Not Available").is_empty());
        assert!(!has_documents(""));
        assert!(!has_documents(" , ,"));
    }

    #[test]
    fn test_mixed_field_keeps_real_paths() {
        assert_eq!(
            available_documents("a.pdf, No documents uploaded, b.pdf"),
            vec!["a.pdf".to_string(), "b.pdf".to_string()]
        );
    }

    #[test]
    fn test_single_path() {
        assert_eq!(
            available_documents("uploads/msds/urea.pdf"),
            vec!["uploads/msds/urea.pdf".to_string()]
        );
        assert!(has_documents("uploads/msds/urea.pdf"));
    }

    #[test]
    fn test_document_file_name() {
        assert_eq!(document_file_name("uploads/msds/urea.pdf"), "urea.pdf");
        assert_eq!(document_file_name("urea.pdf"), "urea.pdf");
        assert_eq!(document_file_name("dir/sub/"), "sub");
    }

    #[test]
    fn test_form_fields() {
        let fields: Vec<_> = DocumentCategory::ALL.iter().map(|c| c.form_field()).collect();
        assert_eq!(fields, vec!["npsApprovalFiles", "msdsFiles", "certificationsFiles"]);
    }
}
