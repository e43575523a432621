//! Public, unauthenticated view of one batch (`GET /api/product-view/:batchId`).

use crate::domain::a001_product::aggregate::Product;
use crate::domain::a002_batch::aggregate::Batch;
use crate::domain::a002_batch::status::BatchStatus;
use crate::shared::documents::DocumentCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Denormalized product + batch pair shown to consumers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductView {
    pub product: Product,
    pub batch: Batch,
}

impl ProductView {
    pub fn status(&self, now: DateTime<Utc>) -> BatchStatus {
        self.batch.status(now)
    }

    pub fn gate(&self, now: DateTime<Utc>) -> ExpiryGate {
        ExpiryGate::from_status(self.status(now))
    }

    /// Raw document field shown on a tab, if the tab carries documents
    pub fn documents_for(&self, tab: ViewTab) -> Option<(DocumentCategory, &str)> {
        tab.document_category()
            .map(|category| (category, self.product.certifications.get(category)))
    }
}

/// How expiry affects the instructional tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryGate {
    /// Instructions are replaced by a disposal warning
    DoNotUse,
    /// Instructions stay, with a notice on top
    ExpiringSoon { days: i64 },
    Normal,
}

impl ExpiryGate {
    pub fn from_status(status: BatchStatus) -> Self {
        match status {
            BatchStatus::Expired => ExpiryGate::DoNotUse,
            BatchStatus::ExpiringSoon { days } => ExpiryGate::ExpiringSoon { days },
            BatchStatus::Active => ExpiryGate::Normal,
        }
    }

    /// Whether a tab keeps its normal instructional content
    pub fn shows_instructions(&self, tab: ViewTab) -> bool {
        !(tab.is_gated() && matches!(self, ExpiryGate::DoNotUse))
    }

    /// Non-blocking notice text for soon-to-expire batches
    pub fn notice(&self) -> Option<String> {
        match self {
            ExpiryGate::ExpiringSoon { days } => Some(format!(
                "This batch expires in {} days. Use it before the expiry date.",
                days
            )),
            _ => None,
        }
    }
}

/// Tabs of the public view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewTab {
    Composition,
    Application,
    Benefits,
    Safety,
}

impl ViewTab {
    pub const ALL: [ViewTab; 4] = [
        ViewTab::Composition,
        ViewTab::Application,
        ViewTab::Benefits,
        ViewTab::Safety,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ViewTab::Composition => "Composition",
            ViewTab::Application => "Application",
            ViewTab::Benefits => "Benefits",
            ViewTab::Safety => "Safety",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ViewTab::Composition => "composition",
            ViewTab::Application => "application",
            ViewTab::Benefits => "benefits",
            ViewTab::Safety => "safety",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }

    /// Tabs whose instructions are withheld for expired batches
    pub fn is_gated(&self) -> bool {
        matches!(self, ViewTab::Application | ViewTab::Safety)
    }

    pub fn document_category(&self) -> Option<DocumentCategory> {
        match self {
            ViewTab::Composition => Some(DocumentCategory::QualityCertifications),
            ViewTab::Application => Some(DocumentCategory::NpsApproval),
            ViewTab::Benefits => None,
            ViewTab::Safety => Some(DocumentCategory::Msds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::documents::available_documents;
    use chrono::TimeZone;

    fn view(expiry: &str, is_expired: bool) -> ProductView {
        let json = format!(
            r#"{{
                "product": {{
                    "productId": "urea-gold",
                    "name": "Urea Gold",
                    "certifications": {{
                        "npsApproval": "No documents uploaded",
                        "msds": "a.pdf, No documents uploaded, b.pdf",
                        "qualityCertifications": "iso.pdf"
                    }}
                }},
                "batch": {{
                    "batchId": "b1",
                    "number": "UG-001",
                    "manufacturingDate": "2024-01-01",
                    "expiryDate": "{}",
                    "isExpired": {}
                }}
            }}"#,
            expiry, is_expired
        );
        serde_json::from_str(&json).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_expired_batch_hides_gated_tabs_only() {
        let gate = view("2024-05-01", false).gate(now());
        assert_eq!(gate, ExpiryGate::DoNotUse);
        assert!(!gate.shows_instructions(ViewTab::Application));
        assert!(!gate.shows_instructions(ViewTab::Safety));
        assert!(gate.shows_instructions(ViewTab::Composition));
        assert!(gate.shows_instructions(ViewTab::Benefits));
        assert!(gate.notice().is_none());
    }

    #[test]
    fn test_server_flag_expires_future_batch() {
        assert_eq!(view("2030-01-01", true).gate(now()), ExpiryGate::DoNotUse);
    }

    #[test]
    fn test_expiring_soon_keeps_content_with_notice() {
        let gate = view("2024-06-11", false).gate(now());
        assert_eq!(gate, ExpiryGate::ExpiringSoon { days: 10 });
        assert!(gate.shows_instructions(ViewTab::Safety));
        assert!(gate.notice().unwrap().contains("10 days"));
    }

    #[test]
    fn test_tab_documents() {
        let v = view("2030-01-01", false);
        let (category, raw) = v.documents_for(ViewTab::Safety).unwrap();
        assert_eq!(category, DocumentCategory::Msds);
        assert_eq!(available_documents(raw), vec!["a.pdf", "b.pdf"]);

        let (_, nps) = v.documents_for(ViewTab::Application).unwrap();
        assert!(available_documents(nps).is_empty());
        assert!(v.documents_for(ViewTab::Benefits).is_none());
    }

    #[test]
    fn test_tab_keys() {
        for tab in ViewTab::ALL {
            assert_eq!(ViewTab::from_key(tab.key()), Some(tab));
        }
        assert_eq!(ViewTab::from_key("unknown"), None);
    }
}
