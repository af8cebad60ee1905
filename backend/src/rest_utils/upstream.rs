//! Shared plumbing for the upstream restaurant API.

use std::fmt;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::info;


/// Base URL of the restaurant REST API (its versioned root).
pub fn restaurant_api_url() -> String {
    std::env::var("RESTAURANT_API_URL").unwrap_or("http://127.0.0.1:8080/api/v1".to_string())
}

/// Base URL of the chat assistant service.
pub fn chatbot_api_url() -> String {
    std::env::var("CHATBOT_API_URL").unwrap_or("http://127.0.0.1:8000".to_string())
}

/// Marker error for an upstream 404, so callers can distinguish a missing
/// entity from a failed request.
#[derive(Debug, Clone)]
pub struct NotFound(pub String);

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} not found", self.0)
    }
}

impl std::error::Error for NotFound {}

/// Wrapper every restaurant API response arrives in.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// GETs a path under the API base and decodes the whole response body.
pub async fn get_body<T: DeserializeOwned>(
    path: &str,
    params: &[(&str, String)],
) -> anyhow::Result<T> {
    let url = format!("{}{}", restaurant_api_url(), path);
    let client = reqwest::Client::new();

    let response = client.get(&url).query(params).send().await?;
    let status = response.status();
    let response_txt = response.text().await?;
    if status == reqwest::StatusCode::NOT_FOUND {
        anyhow::bail!(NotFound(path.to_string()));
    }
    if status.is_client_error() || status.is_server_error() {
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    info!("GET {}: {} ({} bytes)", path, status, response_txt.len());

    let body: T = serde_json::from_str(&response_txt)?;
    Ok(body)
}

/// GETs a path and unwraps the standard `{message, data}` envelope.
pub async fn get_data<T: DeserializeOwned>(
    path: &str,
    params: &[(&str, String)],
) -> anyhow::Result<T> {
    let envelope: Envelope<T> = get_body(path, params).await?;
    Ok(envelope.data)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_unwraps_data() {
        let envelope: Envelope<Vec<String>> =
            serde_json::from_str(r#"{"message": "Success", "data": ["Phở", "Bún"]}"#).unwrap();
        assert_eq!(envelope.data, vec!["Phở", "Bún"]);
    }

    #[test]
    fn test_not_found_downcasts_through_anyhow() {
        let err = anyhow::Error::new(NotFound("/restaurants/99".to_string()));
        assert!(err.downcast_ref::<NotFound>().is_some());
        assert_eq!(err.to_string(), "/restaurants/99 not found");
    }
}
