//! Product endpoints (`/api/products`).

use contracts::domain::a001_product::aggregate::{Product, ProductDto, ProductId};
use contracts::domain::common::AggregateRoot;
use contracts::shared::documents::DocumentCategory;
use web_sys::{File, FormData};

use crate::shared::http::{self, Access, ApiError};

/// Files attached to a create/update request; absent ones keep what the server has
#[derive(Debug, Default, Clone)]
pub struct ProductUploads {
    pub image: Option<File>,
    pub documents: Vec<(DocumentCategory, File)>,
}

/// Fetch all products with their batches
pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    http::get_json(&Product::api_path(), Access::Session).await
}

pub async fn fetch_product(id: &ProductId) -> Result<Product, ApiError> {
    http::get_json(&Product::item_api_path(id), Access::Session).await
}

pub async fn create_product(dto: &ProductDto, uploads: &ProductUploads) -> Result<(), ApiError> {
    let form = build_form(dto, uploads)?;
    http::post_form::<serde_json::Value>(&Product::api_path(), &form)
        .await
        .map(|_| ())
}

pub async fn update_product(
    id: &ProductId,
    dto: &ProductDto,
    uploads: &ProductUploads,
) -> Result<(), ApiError> {
    let form = build_form(dto, uploads)?;
    http::put_form::<serde_json::Value>(&Product::item_api_path(id), &form)
        .await
        .map(|_| ())
}

pub async fn delete_product(id: &ProductId) -> Result<(), ApiError> {
    http::delete(&Product::item_api_path(id)).await
}

/// Multipart body: `productData` JSON plus one field per staged file
fn build_form(dto: &ProductDto, uploads: &ProductUploads) -> Result<FormData, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{:?}", e));

    let form = FormData::new().map_err(js_err)?;
    let product_data =
        serde_json::to_string(dto).map_err(|e| ApiError::Decode(e.to_string()))?;
    form.append_with_str("productData", &product_data)
        .map_err(js_err)?;

    if let Some(image) = &uploads.image {
        form.append_with_blob_and_filename("image", image, &image.name())
            .map_err(js_err)?;
    }
    for (category, file) in &uploads.documents {
        form.append_with_blob_and_filename(category.form_field(), file, &file.name())
            .map_err(js_err)?;
    }
    Ok(form)
}
