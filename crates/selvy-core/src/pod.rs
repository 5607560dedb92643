//! Pod and image entity types as served by the remote store

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a pod, assigned by the remote store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PodId(pub i64);

impl PodId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PodId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for an image, unique within its pod
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(pub i64);

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A photo attached to a pod
///
/// Images are append-only: they are created by a successful upload and
/// never reordered, edited, or deleted from the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: ImageId,
    /// Opaque storage reference used to build the retrieval URL
    pub filename: String,
    /// Optional caption
    #[serde(default)]
    pub description: Option<String>,
    /// Timestamp assigned by the remote store at upload
    pub upload_time: DateTime<Utc>,
}

/// A tracked plant entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pod {
    pub id: PodId,
    /// Non-empty display name
    pub name: String,
    /// Machine value from the pod type catalog
    #[serde(rename = "type")]
    pub pod_type: String,
    #[serde(default)]
    pub description: Option<String>,
    pub planting_date: NaiveDate,
    #[serde(default)]
    pub care_note: Option<String>,
    /// Attached photos in upload order
    #[serde(default)]
    pub images: Vec<Image>,
}

impl Pod {
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Most recently uploaded image, if any
    pub fn latest_image(&self) -> Option<&Image> {
        self.images.last()
    }
}

/// A file selected for upload (initial photo or later attachment)
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    /// Original filename as selected by the user
    pub filename: String,
    /// MIME type, e.g. "image/jpeg"
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(filename: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pod_wire_format() {
        // Matches the remote store's JSON shape, nested images included
        let json = r#"{
            "id": 3,
            "name": "Balcony Basil",
            "type": "Herb",
            "planting_date": "2026-04-12",
            "description": "South-facing balcony",
            "images": [
                {
                    "id": 7,
                    "filename": "3_ab12cd34.jpg",
                    "description": "first sprout",
                    "upload_time": "2026-05-01T09:30:00Z"
                }
            ]
        }"#;

        let pod: Pod = serde_json::from_str(json).unwrap();
        assert_eq!(pod.id, PodId(3));
        assert_eq!(pod.pod_type, "Herb");
        assert_eq!(pod.planting_date, NaiveDate::from_ymd_opt(2026, 4, 12).unwrap());
        assert_eq!(pod.care_note, None);
        assert_eq!(pod.image_count(), 1);
        assert_eq!(pod.images[0].filename, "3_ab12cd34.jpg");
    }

    #[test]
    fn test_pod_missing_optional_fields() {
        let json = r#"{
            "id": 1,
            "name": "Aloe",
            "type": "Succulent",
            "planting_date": "2026-01-01"
        }"#;

        let pod: Pod = serde_json::from_str(json).unwrap();
        assert_eq!(pod.description, None);
        assert!(pod.images.is_empty());
        assert!(pod.latest_image().is_none());
    }

    #[test]
    fn test_pod_serializes_type_field() {
        let pod = Pod {
            id: PodId(5),
            name: "Mint".to_string(),
            pod_type: "Herb".to_string(),
            description: None,
            planting_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            care_note: Some("weekly watering".to_string()),
            images: vec![],
        };

        let value = serde_json::to_value(&pod).unwrap();
        assert_eq!(value["type"], "Herb");
        assert_eq!(value["planting_date"], "2026-03-01");
    }
}
