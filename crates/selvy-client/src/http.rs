//! HTTP implementation of the remote store contract

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use selvy_core::{Image, ImageFile, Pod, PodFields, PodId};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::store::{RemoteStore, StoreError};

/// Connection configuration for the remote store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// HTTP(S) base URL (e.g. "http://localhost:8000")
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl StoreConfig {
    /// Create config from a store address
    ///
    /// A bare "host:port" gets an http:// scheme; explicit schemes and
    /// trailing slashes are normalized.
    pub fn from_address(addr: &str) -> Self {
        let trimmed = addr.trim_end_matches('/');
        let base_url = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("http://{}", trimmed)
        };
        Self { base_url }
    }
}

/// reqwest-backed remote store client
pub struct HttpRemoteStore {
    client: reqwest::Client,
    config: StoreConfig,
}

impl HttpRemoteStore {
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Retrieval URL for an uploaded image
    pub fn image_url(&self, filename: &str) -> String {
        self.url(&format!("/api/uploads/{}", filename))
    }

    fn check_status(response: &reqwest::Response) -> Result<(), StoreError> {
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound);
        }
        if !status.is_success() {
            return Err(StoreError::Status {
                code: status.as_u16(),
            });
        }
        Ok(())
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StoreError> {
        response
            .json::<T>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    fn image_part(file: ImageFile) -> Result<Part, StoreError> {
        Part::bytes(file.bytes)
            .file_name(file.filename)
            .mime_str(&file.content_type)
            .map_err(StoreError::Http)
    }

    fn fields_form(fields: &PodFields) -> Form {
        let mut form = Form::new()
            .text("name", fields.name.clone())
            .text("type", fields.type_value.clone())
            .text(
                "planting_date",
                fields.planting_date.format("%Y-%m-%d").to_string(),
            );
        if let Some(description) = &fields.description {
            form = form.text("description", description.clone());
        }
        form
    }
}

#[async_trait]
impl RemoteStore for HttpRemoteStore {
    async fn list_pods(&self) -> Result<Vec<Pod>, StoreError> {
        let url = self.url("/api/pods");
        debug!(url = %url, "Fetching pod list");

        let response = self.client.get(&url).send().await?;
        Self::check_status(&response)?;
        let pods: Vec<Pod> = Self::decode(response).await?;
        debug!(count = pods.len(), "Fetched pod list");
        Ok(pods)
    }

    async fn create_pod(
        &self,
        fields: PodFields,
        care_note: Option<String>,
        image: Option<ImageFile>,
    ) -> Result<Pod, StoreError> {
        let url = self.url("/api/pods");
        let mut form = Self::fields_form(&fields);
        if let Some(note) = care_note {
            form = form.text("care_note", note);
        }
        let with_image = image.is_some();
        if let Some(file) = image {
            form = form.part("image", Self::image_part(file)?);
        }

        let response = self.client.post(&url).multipart(form).send().await?;
        Self::check_status(&response)?;
        let pod: Pod = Self::decode(response).await?;
        info!(pod = %pod.id, name = %pod.name, with_image, "Created pod");
        Ok(pod)
    }

    async fn update_pod(&self, id: PodId, fields: PodFields) -> Result<Pod, StoreError> {
        let url = self.url(&format!("/api/pods/{}", id));
        let response = self.client.put(&url).json(&fields).send().await?;
        Self::check_status(&response)?;
        let pod: Pod = Self::decode(response).await?;
        info!(pod = %id, "Updated pod");
        Ok(pod)
    }

    async fn delete_pod(&self, id: PodId) -> Result<(), StoreError> {
        let url = self.url(&format!("/api/pods/{}", id));
        let response = self.client.delete(&url).send().await?;
        Self::check_status(&response)?;
        info!(pod = %id, "Deleted pod");
        Ok(())
    }

    async fn upload_image(
        &self,
        id: PodId,
        file: ImageFile,
        description: Option<String>,
    ) -> Result<Image, StoreError> {
        let url = self.url(&format!("/api/pods/{}/images", id));
        let mut form = Form::new().part("image", Self::image_part(file)?);
        if let Some(desc) = description {
            form = form.text("description", desc);
        }

        let response = match self.client.post(&url).multipart(form).send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!(pod = %id, error = %e, "Image upload failed");
                return Err(StoreError::Http(e));
            }
        };
        Self::check_status(&response)?;
        let image: Image = Self::decode(response).await?;
        info!(pod = %id, image = %image.id, "Uploaded image");
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_address_bare_host_port() {
        let config = StoreConfig::from_address("192.168.1.50:8000");
        assert_eq!(config.base_url, "http://192.168.1.50:8000");
    }

    #[test]
    fn test_from_address_explicit_scheme() {
        let config = StoreConfig::from_address("https://pods.example.com");
        assert_eq!(config.base_url, "https://pods.example.com");
    }

    #[test]
    fn test_from_address_strips_trailing_slash() {
        let config = StoreConfig::from_address("http://localhost:8000/");
        assert_eq!(config.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_image_url() {
        let store = HttpRemoteStore::new(StoreConfig::default()).unwrap();
        assert_eq!(
            store.image_url("3_ab12cd34.jpg"),
            "http://localhost:8000/api/uploads/3_ab12cd34.jpg"
        );
    }
}
