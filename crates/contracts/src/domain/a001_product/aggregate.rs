use crate::domain::a002_batch::aggregate::Batch;
use crate::domain::common::aggregate_id::string_aggregate_id;
use crate::domain::common::AggregateRoot;
use crate::shared::dates::api_date_opt;
use crate::shared::documents::DocumentCategory;
use crate::shared::validation::{is_valid_email, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum length of a derived product id
pub const PRODUCT_ID_MAX_LEN: usize = 30;

string_aggregate_id!(
    /// Slug identifier of a product (e.g. "urea-gold")
    ProductId,
    "product id"
);

/// Derive a product slug from its name.
///
/// Lowercase, drop everything outside `[a-z0-9 ]`, turn each run of spaces
/// into one hyphen, cut to [`PRODUCT_ID_MAX_LEN`] characters.
pub fn derive_product_id(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_spaces = false;

    for c in name.to_lowercase().chars() {
        if c == ' ' {
            if !in_spaces {
                slug.push('-');
            }
            in_spaces = true;
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            in_spaces = false;
            slug.push(c);
        }
    }

    slug.chars().take(PRODUCT_ID_MAX_LEN).collect()
}

/// One composition line, e.g. "Nitrogen" / "46%"
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub percentage: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub advantages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub recommended_crops: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Safety {
    #[serde(default)]
    pub ppe_instructions: Vec<String>,
    #[serde(default)]
    pub hygiene_instructions: Vec<String>,
}

/// Stored document paths per category (comma-joined or a placeholder)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certifications {
    #[serde(default)]
    pub nps_approval: String,
    #[serde(default)]
    pub msds: String,
    #[serde(default)]
    pub quality_certifications: String,
}

impl Certifications {
    pub fn get(&self, category: DocumentCategory) -> &str {
        match category {
            DocumentCategory::NpsApproval => &self.nps_approval,
            DocumentCategory::Msds => &self.msds,
            DocumentCategory::QualityCertifications => &self.quality_certifications,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
}

/// Fertilizer catalog entry (aggregate a001)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: ProductId,

    pub name: String,

    #[serde(default)]
    pub short_description: String,

    #[serde(default)]
    pub full_description: String,

    /// Image reference: absolute URL, Cloudinary public id or bucket key
    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub composition: Composition,

    #[serde(default)]
    pub application: Application,

    #[serde(default)]
    pub safety: Safety,

    #[serde(default)]
    pub certifications: Certifications,

    #[serde(default)]
    pub contact: ContactInfo,

    /// Batches owned by this product, as returned by the API
    #[serde(default)]
    pub batches: Vec<Batch>,

    #[serde(default, with = "api_date_opt")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "api_date_opt")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::ProductNameRequired);
        }
        if self.product_id.is_empty() {
            return Err(ValidationError::ProductIdRequired);
        }
        Ok(())
    }

    /// Search match on name or id, case-insensitive
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.name.to_lowercase().contains(&query)
            || self.product_id.value().contains(&query)
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.product_id.clone()
    }

    fn code(&self) -> &str {
        self.product_id.value()
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "products"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }
}

/// `productData` part of the multipart create/update request.
///
/// Files travel as separate multipart fields; a missing file field means the
/// server keeps what it has.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub product_id: ProductId,
    pub name: String,
    pub short_description: String,
    pub full_description: String,
    pub composition: Composition,
    pub application: Application,
    pub safety: Safety,
    pub contact: ContactInfo,
}

impl ProductDto {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::ProductNameRequired);
        }
        if self.product_id.is_empty() {
            return Err(ValidationError::ProductIdRequired);
        }
        let email = self.contact.email.trim();
        if !email.is_empty() && !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_product_id_examples() {
        assert_eq!(derive_product_id("K Plus 50%!"), "k-plus-50");
        assert_eq!(derive_product_id("Urea Gold"), "urea-gold");
        assert_eq!(derive_product_id("NPK   15 15 15"), "npk-15-15-15");
        assert_eq!(derive_product_id("%%%"), "");
        assert_eq!(derive_product_id(""), "");
    }

    #[test]
    fn test_derive_product_id_strips_hyphens_and_non_space_whitespace() {
        assert_eq!(derive_product_id("NPK 15-15-15"), "npk-151515");
        assert_eq!(derive_product_id("Urea\tGold"), "ureagold");
        assert_eq!(derive_product_id("DAP -- Premium"), "dap-premium");
    }

    #[test]
    fn test_derive_product_id_keeps_edge_spaces_as_hyphens() {
        assert_eq!(derive_product_id(" Urea"), "-urea");
        assert_eq!(derive_product_id("Urea  "), "urea-");
    }

    #[test]
    fn test_derive_product_id_is_deterministic() {
        for name in ["K Plus 50%!", "Urea Gold", "Ammonium Sulphate 21% N granular"] {
            assert_eq!(derive_product_id(name), derive_product_id(name));
        }
    }

    #[test]
    fn test_derive_product_id_truncates_to_max_len() {
        let id = derive_product_id("Ammonium Sulphate 21% N granular extra");
        assert_eq!(id.len(), PRODUCT_ID_MAX_LEN);
        assert_eq!(id, "ammonium-sulphate-21-n-granula");

        let cut_at_separator = derive_product_id("abcdefghijklmnopqrstuvwxyz1234 tail");
        assert_eq!(cut_at_separator, "abcdefghijklmnopqrstuvwxyz1234");

        let ends_on_separator = derive_product_id("abcdefghijklmnopqrstuvwxyz123 tail");
        assert_eq!(ends_on_separator, "abcdefghijklmnopqrstuvwxyz123-");
    }

    #[test]
    fn test_product_deserializes_sparse_payload() {
        let json = r#"{
            "productId": "urea-gold",
            "name": "Urea Gold",
            "composition": { "ingredients": [{ "name": "Nitrogen", "percentage": "46%" }] },
            "certifications": { "msds": "uploads/urea.pdf" },
            "batches": [{
                "batchId": "b1",
                "number": "UG-001",
                "manufacturingDate": "2024-01-01T00:00:00.000Z",
                "expiryDate": "2025-01-01",
                "isExpired": false
            }]
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.code(), "urea-gold");
        assert_eq!(product.composition.ingredients[0].percentage, "46%");
        assert_eq!(product.certifications.get(DocumentCategory::Msds), "uploads/urea.pdf");
        assert_eq!(product.batches.len(), 1);
        assert!(product.created_at.is_none());
    }

    #[test]
    fn test_api_paths() {
        assert_eq!(Product::api_path(), "/api/products");
        assert_eq!(
            Product::item_api_path(&ProductId::new("urea-gold")),
            "/api/products/urea-gold"
        );
        assert_eq!(Product::full_name(), "a001_products");
    }

    #[test]
    fn test_dto_validation() {
        let mut dto = ProductDto {
            product_id: ProductId::new("urea-gold"),
            name: "Urea Gold".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());

        dto.contact.email = "sales@agro".into();
        assert_eq!(dto.validate(), Err(ValidationError::InvalidEmail));

        dto.contact.email.clear();
        dto.name = " ".into();
        assert_eq!(dto.validate(), Err(ValidationError::ProductNameRequired));
    }

    #[test]
    fn test_search_match() {
        let product = Product {
            product_id: ProductId::new("urea-gold"),
            name: "Urea Gold".into(),
            ..Default::default()
        };
        assert!(product.matches("gold"));
        assert!(product.matches("UREA-"));
        assert!(product.matches(""));
        assert!(!product.matches("potash"));
    }
}
