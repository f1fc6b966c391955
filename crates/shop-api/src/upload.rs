//! Image upload.

use crate::ShopApi;
use shop_data::FetchError;

/// Multipart field the upload endpoint reads.
pub const UPLOAD_FIELD: &str = "file";

impl ShopApi {
    /// `POST /upload`, returns the stored image path (e.g. `/api/image/<uuid>.png`).
    pub async fn upload_image(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, FetchError> {
        tracing::debug!(file_name, size = bytes.len(), "Uploading image");
        self.client
            .upload("/upload", UPLOAD_FIELD, file_name, bytes)
            .await
    }
}
