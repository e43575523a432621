//! Batch endpoints (`/api/batches`).

use contracts::domain::a002_batch::aggregate::{Batch, BatchDto, BatchId};
use contracts::domain::common::AggregateRoot;

use crate::shared::http::{self, Access, ApiError};

pub async fn fetch_batch(id: &BatchId) -> Result<Batch, ApiError> {
    http::get_json(&Batch::item_api_path(id), Access::Session).await
}

/// The response body is not used; the dashboard reloads after every change
pub async fn create_batch(dto: &BatchDto) -> Result<(), ApiError> {
    http::post_json::<_, serde_json::Value>(&Batch::api_path(), &dto.normalized(), Access::Session)
        .await
        .map(|_| ())
}

pub async fn update_batch(id: &BatchId, dto: &BatchDto) -> Result<(), ApiError> {
    http::put_json::<_, serde_json::Value>(&Batch::item_api_path(id), &dto.normalized())
        .await
        .map(|_| ())
}

pub async fn delete_batch(id: &BatchId) -> Result<(), ApiError> {
    http::delete(&Batch::item_api_path(id)).await
}
