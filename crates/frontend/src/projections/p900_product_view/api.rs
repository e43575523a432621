use contracts::projections::p900_product_view::ProductView;

use crate::shared::http::{self, Access, ApiError};

/// Public batch view; works without a session
pub async fn fetch_product_view(batch_id: &str) -> Result<ProductView, ApiError> {
    let path = format!("/api/product-view/{}", urlencoding::encode(batch_id));
    http::get_json(&path, Access::Public).await
}
