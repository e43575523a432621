//! Client-side validation rules.
//!
//! Every rule here runs before a request is sent; a failing rule means no
//! network call happens.

use thiserror::Error;

/// Upload size limit for images and documents (5 MB)
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Validation failures reported to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Product name is required")]
    ProductNameRequired,

    #[error("Product ID is required")]
    ProductIdRequired,

    #[error("Batch number is required")]
    BatchNumberRequired,

    #[error("Manufacturing date is required")]
    ManufacturingDateRequired,

    #[error("Expiry date is required")]
    ExpiryDateRequired,

    #[error("Expiry date must be after manufacturing date")]
    ExpiryNotAfterManufacturing,

    #[error("Invalid ingredient on line {line}: \"{text}\". Use the Name:Percentage format")]
    MalformedIngredient { line: usize, text: String },

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("{file_name}: only PNG, JPEG and JPG images are allowed")]
    UnsupportedImageType { file_name: String },

    #[error("{file_name}: only PDF, DOC and DOCX documents are allowed")]
    UnsupportedDocumentType { file_name: String },

    #[error("{file_name}: file size must not exceed 5MB")]
    FileTooLarge { file_name: String },
}

/// Syntactic email check: `local@host.tld`, no whitespace
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Kind of file staged in the product form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadKind {
    Image,
    Document,
}

impl UploadKind {
    pub fn accepted_mime_types(&self) -> &'static [&'static str] {
        match self {
            UploadKind::Image => &["image/png", "image/jpeg", "image/jpg"],
            UploadKind::Document => &[
                "application/pdf",
                "application/msword",
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            ],
        }
    }

    pub fn accepted_extensions(&self) -> &'static [&'static str] {
        match self {
            UploadKind::Image => &["png", "jpeg", "jpg"],
            UploadKind::Document => &["pdf", "doc", "docx"],
        }
    }

    /// Value for the `accept` attribute of a file input
    pub fn accept_attr(&self) -> &'static str {
        match self {
            UploadKind::Image => ".png,.jpg,.jpeg,image/png,image/jpeg",
            UploadKind::Document => ".pdf,.doc,.docx",
        }
    }

    fn type_error(&self, file_name: &str) -> ValidationError {
        let file_name = file_name.to_string();
        match self {
            UploadKind::Image => ValidationError::UnsupportedImageType { file_name },
            UploadKind::Document => ValidationError::UnsupportedDocumentType { file_name },
        }
    }
}

/// Check a file before it is staged for upload.
///
/// The MIME type reported by the browser wins; when it is empty (some
/// platforms do that for Office files) the extension decides.
pub fn validate_upload(
    kind: UploadKind,
    file_name: &str,
    mime_type: &str,
    size: u64,
) -> Result<(), ValidationError> {
    let mime_type = mime_type.trim().to_ascii_lowercase();
    let type_ok = if mime_type.is_empty() {
        file_name
            .rsplit_once('.')
            .map(|(_, ext)| {
                kind.accepted_extensions()
                    .contains(&ext.to_ascii_lowercase().as_str())
            })
            .unwrap_or(false)
    } else {
        kind.accepted_mime_types().contains(&mime_type.as_str())
    };

    if !type_ok {
        return Err(kind.type_error(file_name));
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(ValidationError::FileTooLarge {
            file_name: file_name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("sales@agro.example"));
        assert!(is_valid_email("  a@b.co  "));
        assert!(!is_valid_email("no-at-sign.example"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("a@nodot"));
        assert!(!is_valid_email("a b@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_image_upload_rules() {
        assert!(validate_upload(UploadKind::Image, "bag.png", "image/png", 1024).is_ok());
        assert!(validate_upload(UploadKind::Image, "bag.JPG", "", 1024).is_ok());
        assert_eq!(
            validate_upload(UploadKind::Image, "bag.gif", "image/gif", 1024),
            Err(ValidationError::UnsupportedImageType {
                file_name: "bag.gif".into()
            })
        );
    }

    #[test]
    fn test_document_upload_rules() {
        assert!(validate_upload(UploadKind::Document, "msds.pdf", "application/pdf", 10).is_ok());
        assert!(validate_upload(UploadKind::Document, "cert.docx", "", 10).is_ok());
        assert!(validate_upload(UploadKind::Document, "photo.png", "image/png", 10).is_err());
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        assert!(
            validate_upload(UploadKind::Document, "a.pdf", "application/pdf", MAX_UPLOAD_BYTES)
                .is_ok()
        );
        let err = validate_upload(
            UploadKind::Document,
            "a.pdf",
            "application/pdf",
            MAX_UPLOAD_BYTES + 1,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "a.pdf: file size must not exceed 5MB");
    }
}
