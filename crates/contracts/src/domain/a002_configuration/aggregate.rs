use serde::{Deserialize, Serialize};

use crate::domain::a001_cabinet::aggregate::ModuleSize;
use crate::shared::text::none_if_empty;

/// Fallback shown when the backend rejects a configuration without a usable detail
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save configuration";

/// Request body for `POST /api/configurations`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveConfigurationDto {
    pub customer: Option<String>,
    pub cabinet_code: String,
    pub size: ModuleSize,
    pub material: String,
    pub color: String,
    pub notes: Option<String>,
}

/// Raw form values a save request is built from; empty strings mean "not set"
#[derive(Debug, Clone, Copy)]
pub struct ConfigurationForm<'a> {
    pub customer: &'a str,
    pub cabinet_code: &'a str,
    pub size: ModuleSize,
    pub material: &'a str,
    pub color: &'a str,
    pub notes: &'a str,
}

impl SaveConfigurationDto {
    /// Build the request from raw form values; empty `customer`/`notes` become `null`
    pub fn from_form(form: &ConfigurationForm<'_>) -> Self {
        Self {
            customer: none_if_empty(form.customer),
            cabinet_code: form.cabinet_code.to_string(),
            size: form.size,
            material: form.material.to_string(),
            color: form.color.to_string(),
            notes: none_if_empty(form.notes),
        }
    }
}

/// Successful response of `POST /api/configurations`; extra fields are ignored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedConfiguration {
    pub id: String,
}

/// Error body the backend may attach to a non-2xx response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ApiErrorBody {
    /// Extract the user facing message from a raw error body.
    ///
    /// Returns [`SAVE_FAILED_MESSAGE`] when the body is empty, is not JSON, or
    /// has no string `detail`.
    pub fn message_from_body(body: &str) -> String {
        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
            .and_then(|d| d.as_str().map(str::to_string))
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| SAVE_FAILED_MESSAGE.to_string())
    }
}
