use contracts::domain::a002_configuration::aggregate::{
    ApiErrorBody, SaveConfigurationDto, SavedConfiguration, SAVE_FAILED_MESSAGE,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::shared::error::ConfiguratorError;

pub const CONFIGURATIONS_PATH: &str = "/api/configurations";

/// Persist a finished selection and return the identifier assigned by the backend
pub async fn save_configuration(
    dto: &SaveConfigurationDto,
) -> Result<SavedConfiguration, ConfiguratorError> {
    let response = Request::post(&api_url(CONFIGURATIONS_PATH))
        .json(dto)
        .map_err(|e| ConfiguratorError::Save(e.to_string()))?
        .send()
        .await
        .map_err(|e| ConfiguratorError::Save(e.to_string()))?;

    // A missing or unreadable body is treated as empty
    let body = response.text().await.unwrap_or_default();
    save_outcome(response.status(), &body)
}

/// Turn a save response into the saved identifier or a user facing error.
///
/// Non-2xx answers use the `detail` of the error body; a 2xx body without a
/// usable `id` falls back to the generic message.
fn save_outcome(status: u16, body: &str) -> Result<SavedConfiguration, ConfiguratorError> {
    if !(200..300).contains(&status) {
        log::error!("Save request failed with HTTP {}: {}", status, body);
        return Err(ConfiguratorError::Save(ApiErrorBody::message_from_body(body)));
    }

    serde_json::from_str::<SavedConfiguration>(body).map_err(|e| {
        log::error!("Unexpected save response: {}", e);
        ConfiguratorError::Save(SAVE_FAILED_MESSAGE.to_string())
    })
}
