//! Form draft validation
//!
//! `PodDraft` is what a create/edit form accumulates; `PodFields` is the
//! validated set of mutable metadata the remote store accepts. Validation
//! runs before dispatch: a draft that fails here never produces a remote
//! call.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pod::ImageFile;
use crate::types::PodTypeCatalog;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("planting date is required")]
    MissingPlantingDate,
    #[error("unknown pod type: {0}")]
    UnknownType(String),
}

/// In-progress form input for creating or editing a pod
///
/// All fields are optional or unchecked here; `validate` enforces the
/// required-field rules against the configured type catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PodDraft {
    pub name: String,
    pub type_value: String,
    pub description: Option<String>,
    pub planting_date: Option<NaiveDate>,
    pub care_note: Option<String>,
    /// Optional initial photo (create flow only)
    pub image: Option<ImageFile>,
}

impl PodDraft {
    /// Validate required fields against the catalog
    ///
    /// Returns the mutable metadata fields ready for dispatch. The draft
    /// itself is untouched, so a failed submission loses no form input.
    pub fn validate(&self, catalog: &PodTypeCatalog) -> Result<PodFields, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !catalog.contains(&self.type_value) {
            return Err(ValidationError::UnknownType(self.type_value.clone()));
        }
        let planting_date = self
            .planting_date
            .ok_or(ValidationError::MissingPlantingDate)?;

        Ok(PodFields {
            name: name.to_string(),
            type_value: self.type_value.clone(),
            description: self.description.clone().filter(|d| !d.is_empty()),
            planting_date,
        })
    }
}

/// Validated mutable metadata of a pod
///
/// This is the exact JSON body of the store's update endpoint; the create
/// endpoint sends the same fields as multipart form parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PodFields {
    pub name: String,
    #[serde(rename = "type")]
    pub type_value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub planting_date: NaiveDate,
}
