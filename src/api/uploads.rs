//! Image upload endpoint.

use reqwest::multipart::{Form, Part};
use reqwest::Method;

use super::ApiClient;
use crate::errors::ClientResult;
use crate::models::UploadResponse;
use crate::upload::{validate_image, ImageFile};

pub struct UploadService<'a> {
    pub(super) client: &'a ApiClient,
}

impl UploadService<'_> {
    /// POST /upload/image - Returns the hosted URL of the image.
    ///
    /// The file is validated first; a rejected file never reaches the network.
    pub async fn upload_image(&self, file: &ImageFile) -> ClientResult<String> {
        validate_image(Some(file))?;

        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)?;
        let form = Form::new().part("file", part);

        let request = self
            .client
            .request(Method::POST, "/upload/image")
            .multipart(form);
        let response: UploadResponse = ApiClient::send_json(request).await?;

        tracing::info!("Uploaded {} ({} bytes)", file.file_name, file.size());
        Ok(response.url)
    }
}
