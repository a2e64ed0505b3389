use contracts::domain::a001_cabinet::aggregate::CabinetDefinition;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::shared::error::{ConfiguratorError, LOAD_FAILED_MESSAGE};

pub const CABINETS_PATH: &str = "/api/cabinets";

/// Fetch the cabinet catalog
///
/// Non-2xx answers map to a generic message; network and decoding failures
/// keep the underlying error text.
pub async fn fetch_cabinets() -> Result<Vec<CabinetDefinition>, ConfiguratorError> {
    let response = Request::get(&api_url(CABINETS_PATH))
        .send()
        .await
        .map_err(|e| ConfiguratorError::Load(e.to_string()))?;

    if let Some(err) = load_error_for_status(response.status()) {
        log::error!("Catalog request failed with HTTP {}", response.status());
        return Err(err);
    }

    response
        .json::<Vec<CabinetDefinition>>()
        .await
        .map_err(|e| ConfiguratorError::Load(e.to_string()))
}

/// `None` for 2xx, otherwise the generic load failure
fn load_error_for_status(status: u16) -> Option<ConfiguratorError> {
    if (200..300).contains(&status) {
        None
    } else {
        Some(ConfiguratorError::Load(LOAD_FAILED_MESSAGE.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_status_is_not_an_error() {
        assert_eq!(load_error_for_status(200), None);
        assert_eq!(load_error_for_status(204), None);
    }

    #[test]
    fn test_server_error_uses_generic_message() {
        let err = load_error_for_status(500).unwrap();
        assert_eq!(err, ConfiguratorError::Load(LOAD_FAILED_MESSAGE.to_string()));
        assert_eq!(err.to_string(), "Failed to load catalog");
    }

    #[test]
    fn test_client_error_and_redirect_fail() {
        assert!(load_error_for_status(404).is_some());
        assert!(load_error_for_status(304).is_some());
    }
}
