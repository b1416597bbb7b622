//! Product API Handlers

use std::fs;
use std::path::PathBuf;

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use crate::core::AppState;
use crate::db::repository::{product, product_image};
use crate::utils::{AppError, AppResult, Json};
use shared::models::{Product, ProductCreate, ProductDetail, ProductImage, ProductUpdate};

/// Maximum upload size (5MB)
pub(super) const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Accepted image extensions
const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Lowercased extension of an uploaded filename, checked against
/// [`SUPPORTED_FORMATS`].
fn validate_extension(filename: &str) -> Result<String, AppError> {
    let ext = PathBuf::from(filename)
        .extension()
        .and_then(|ext| ext.to_str().map(|s| s.to_lowercase()))
        .ok_or_else(|| AppError::Validation(format!("Invalid file extension for: {filename}")))?;
    if !SUPPORTED_FORMATS.contains(&ext.as_str()) {
        return Err(AppError::Validation(format!(
            "Unsupported file format '{}'. Supported: {}",
            ext,
            SUPPORTED_FORMATS.join(", ")
        )));
    }
    Ok(ext)
}

/// GET /products - list all products
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = product::find_all(&state.pool).await?;
    Ok(Json(products))
}

/// GET /products/:id - product with its images and variants
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ProductDetail>> {
    let detail = product::find_detail(&state.pool, id).await?;
    Ok(Json(detail))
}

/// POST /products - create a product
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<(StatusCode, Json<ProductDetail>)> {
    let detail = product::create(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

/// PUT /products/:id - partial update
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<ProductDetail>> {
    let detail = product::update(&state.pool, id, payload).await?;
    Ok(Json(detail))
}

/// DELETE /products/:id - delete a product, returning the deleted row
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Product>> {
    let product = product::delete(&state.pool, id).await?;
    Ok(Json(product))
}

/// POST /products/:id/image - attach an uploaded image to a product
///
/// Expects a multipart body with a `file` field. The file lands under
/// `<upload_dir>/photos/` with a random name and the stored row points at
/// it via `/uploads/photos/<name>`.
pub async fn upload_image(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    mut multipart: Multipart,
) -> AppResult<Json<ProductImage>> {
    if product::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::NotFound(format!("Product {id} not found")));
    }

    let mut field_data: Option<Vec<u8>> = None;
    let mut original_filename: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            original_filename = field.file_name().map(|s| s.to_string());
            field_data = Some(field.bytes().await?.to_vec());
            break;
        }
    }

    let data = field_data
        .ok_or_else(|| AppError::Validation("No 'file' field found in multipart body".into()))?;
    let filename = original_filename
        .ok_or_else(|| AppError::Validation("No filename provided in file field".into()))?;

    if data.is_empty() {
        return Err(AppError::Validation("Empty file provided".into()));
    }
    if data.len() > MAX_FILE_SIZE {
        return Err(AppError::Validation(format!(
            "File too large. Maximum size is {}MB",
            MAX_FILE_SIZE / 1024 / 1024
        )));
    }

    let ext = validate_extension(&filename)?;

    let photos_dir = PathBuf::from(&state.config.upload_dir).join("photos");
    fs::create_dir_all(&photos_dir)
        .map_err(|e| AppError::Internal(format!("Failed to create upload directory: {e}")))?;

    let stored_name = format!("{}.{}", Uuid::new_v4(), ext);
    let file_path = photos_dir.join(&stored_name);
    fs::write(&file_path, &data)
        .map_err(|e| AppError::Internal(format!("Failed to save file: {e}")))?;

    let image_url = format!("/uploads/photos/{stored_name}");
    let image = product_image::create(&state.pool, id, &image_url, false).await?;

    tracing::info!(
        product_id = %id,
        original_name = %filename,
        size = %data.len(),
        url = %image.image_url,
        "Product image uploaded"
    );

    Ok(Json(image))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_image_extensions() {
        for name in ["a.png", "b.JPG", "c.jpeg", "d.webp"] {
            assert!(validate_extension(name).is_ok(), "{name}");
        }
        // extension comes back lowercased
        assert_eq!(validate_extension("photo.PNG").unwrap(), "png");
    }

    #[test]
    fn rejects_missing_or_unknown_extensions() {
        for name in ["noext", "archive.zip", "script.sh", "double.png.exe"] {
            assert!(validate_extension(name).is_err(), "{name}");
        }
    }
}
