use crate::domain::a001_product::aggregate::Product;
use crate::domain::a002_batch::status::BatchStatus;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Dashboard counters.
///
/// Classified with the same [`BatchStatus::compute`] as the per-row badges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InventorySummary {
    pub total_products: usize,
    pub total_batches: usize,
    pub expiring_soon: usize,
    pub expired: usize,
    pub active: usize,
}

impl InventorySummary {
    pub fn from_products(products: &[Product], now: DateTime<Utc>) -> Self {
        let mut summary = InventorySummary {
            total_products: products.len(),
            ..Default::default()
        };
        for batch in products.iter().flat_map(|p| p.batches.iter()) {
            summary.total_batches += 1;
            match batch.status(now) {
                BatchStatus::Expired => summary.expired += 1,
                BatchStatus::ExpiringSoon { .. } => summary.expiring_soon += 1,
                BatchStatus::Active => summary.active += 1,
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::aggregate::ProductId;
    use crate::domain::a002_batch::aggregate::{Batch, BatchId};
    use chrono::{Duration, TimeZone};

    fn batch(id: &str, expires_in_days: i64, flag: bool, now: DateTime<Utc>) -> Batch {
        Batch {
            batch_id: BatchId::new(id),
            product_id: None,
            number: id.to_uppercase(),
            manufacturing_date: now - Duration::days(365),
            expiry_date: now + Duration::days(expires_in_days),
            is_expired: flag,
            created_at: None,
        }
    }

    #[test]
    fn test_counts_match_row_statuses() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        let products = vec![
            Product {
                product_id: ProductId::new("urea-gold"),
                name: "Urea Gold".into(),
                batches: vec![
                    batch("a", 200, false, now),
                    batch("b", 10, false, now),
                    batch("c", -3, false, now),
                ],
                ..Default::default()
            },
            Product {
                product_id: ProductId::new("k-plus-50"),
                name: "K Plus 50".into(),
                batches: vec![batch("d", 90, true, now), batch("e", 30, false, now)],
                ..Default::default()
            },
            Product {
                product_id: ProductId::new("empty"),
                name: "Empty".into(),
                ..Default::default()
            },
        ];

        let summary = InventorySummary::from_products(&products, now);
        assert_eq!(
            summary,
            InventorySummary {
                total_products: 3,
                total_batches: 5,
                expiring_soon: 2,
                expired: 2,
                active: 1,
            }
        );

        let row_expired = products
            .iter()
            .flat_map(|p| &p.batches)
            .filter(|b| b.status(now).is_expired())
            .count();
        assert_eq!(row_expired, summary.expired);
    }

    #[test]
    fn test_empty_inventory() {
        let now = Utc::now();
        assert_eq!(InventorySummary::from_products(&[], now), InventorySummary::default());
    }
}
