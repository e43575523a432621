use super::status::BatchStatus;
use crate::domain::a001_product::aggregate::ProductId;
use crate::domain::common::aggregate_id::string_aggregate_id;
use crate::domain::common::AggregateRoot;
use crate::shared::dates::{api_date, api_date_opt, parse_input_date, to_input_date};
use crate::shared::validation::ValidationError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

string_aggregate_id!(
    /// Server-assigned batch identifier
    BatchId,
    "batch id"
);

/// Dated production lot of a product (aggregate a002)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    #[serde(alias = "_id")]
    pub batch_id: BatchId,

    /// Owning product; absent when the batch is embedded in its product
    #[serde(default)]
    pub product_id: Option<ProductId>,

    /// Human-entered batch number (e.g. "UG-2024-001")
    #[serde(alias = "batchNumber")]
    pub number: String,

    #[serde(with = "api_date")]
    pub manufacturing_date: DateTime<Utc>,

    #[serde(with = "api_date")]
    pub expiry_date: DateTime<Utc>,

    /// Server-side expiry flag; the wall clock is checked as well
    #[serde(default)]
    pub is_expired: bool,

    #[serde(default, with = "api_date_opt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Batch {
    pub fn status(&self, now: DateTime<Utc>) -> BatchStatus {
        BatchStatus::compute(self.expiry_date, self.is_expired, now)
    }
}

impl AggregateRoot for Batch {
    type Id = BatchId;

    fn id(&self) -> Self::Id {
        self.batch_id.clone()
    }

    fn code(&self) -> &str {
        &self.number
    }

    fn description(&self) -> &str {
        &self.number
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "batches"
    }

    fn element_name() -> &'static str {
        "Batch"
    }

    fn list_name() -> &'static str {
        "Batches"
    }
}

/// Create/update request of a batch (`POST /api/batches`, `PUT /api/batches/:id`)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDto {
    pub product_id: ProductId,
    pub number: String,
    /// `YYYY-MM-DD`
    pub manufacturing_date: String,
    /// `YYYY-MM-DD`
    pub expiry_date: String,
}

impl BatchDto {
    /// Pre-fill an update request from an existing batch
    pub fn from_batch(product_id: ProductId, batch: &Batch) -> Self {
        Self {
            product_id,
            number: batch.number.clone(),
            manufacturing_date: to_input_date(&batch.manufacturing_date),
            expiry_date: to_input_date(&batch.expiry_date),
        }
    }

    /// Check required fields and the date order; returns the parsed dates
    pub fn validate(&self) -> Result<(NaiveDate, NaiveDate), ValidationError> {
        if self.number.trim().is_empty() {
            return Err(ValidationError::BatchNumberRequired);
        }
        let manufactured = parse_input_date(&self.manufacturing_date)
            .ok_or(ValidationError::ManufacturingDateRequired)?;
        let expires =
            parse_input_date(&self.expiry_date).ok_or(ValidationError::ExpiryDateRequired)?;
        if expires <= manufactured {
            return Err(ValidationError::ExpiryNotAfterManufacturing);
        }
        Ok((manufactured, expires))
    }

    /// Trimmed copy ready to be sent
    pub fn normalized(&self) -> Self {
        Self {
            product_id: self.product_id.clone(),
            number: self.number.trim().to_string(),
            manufacturing_date: self.manufacturing_date.trim().to_string(),
            expiry_date: self.expiry_date.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(mfg: &str, exp: &str) -> BatchDto {
        BatchDto {
            product_id: ProductId::new("urea-gold"),
            number: "UG-001".into(),
            manufacturing_date: mfg.into(),
            expiry_date: exp.into(),
        }
    }

    #[test]
    fn test_expiry_before_manufacturing_is_rejected() {
        assert_eq!(
            dto("2024-01-01", "2023-12-31").validate(),
            Err(ValidationError::ExpiryNotAfterManufacturing)
        );
        assert_eq!(
            ValidationError::ExpiryNotAfterManufacturing.to_string(),
            "Expiry date must be after manufacturing date"
        );
    }

    #[test]
    fn test_same_day_is_rejected() {
        assert_eq!(
            dto("2024-01-01", "2024-01-01").validate(),
            Err(ValidationError::ExpiryNotAfterManufacturing)
        );
    }

    #[test]
    fn test_required_fields() {
        let mut missing_number = dto("2024-01-01", "2025-01-01");
        missing_number.number = "  ".into();
        assert_eq!(missing_number.validate(), Err(ValidationError::BatchNumberRequired));
        assert_eq!(
            dto("", "2025-01-01").validate(),
            Err(ValidationError::ManufacturingDateRequired)
        );
        assert_eq!(dto("2024-01-01", "").validate(), Err(ValidationError::ExpiryDateRequired));
    }

    #[test]
    fn test_valid_range_returns_dates() {
        let (mfg, exp) = dto("2024-01-01", "2025-06-30").validate().unwrap();
        assert_eq!(mfg.to_string(), "2024-01-01");
        assert_eq!(exp.to_string(), "2025-06-30");
    }

    #[test]
    fn test_round_trip_from_batch() {
        let batch: Batch = serde_json::from_str(
            r#"{"_id":"65f0","batchNumber":"UG-7","manufacturingDate":"2024-02-01T00:00:00.000Z","expiryDate":"2026-02-01T00:00:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(batch.code(), "UG-7");
        assert!(!batch.is_expired);

        let request = BatchDto::from_batch(ProductId::new("urea-gold"), &batch);
        assert_eq!(request.manufacturing_date, "2024-02-01");
        assert_eq!(request.expiry_date, "2026-02-01");
        assert!(request.validate().is_ok());

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["productId"], "urea-gold");
        assert_eq!(body["expiryDate"], "2026-02-01");
    }
}
