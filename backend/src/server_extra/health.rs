use axum::Json;
use serde_json::{Value, json};
use tokio::time::{Duration, timeout};
use tracing::warn;

use crate::rest_utils::upstream::restaurant_api_url;

const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

async fn probe_restaurant_api() -> anyhow::Result<bool> {
    let url = format!("{}/foodtypes", restaurant_api_url());
    let response = reqwest::get(&url).await?;
    Ok(response.status().is_success())
}

/// Liveness endpoint for the web tier. The page server is alive if this
/// handler runs at all; the payload additionally reports whether the
/// restaurant API answered a cheap probe within [`PROBE_TIMEOUT`].
pub async fn health() -> Json<Value> {
    let restaurant_api = match timeout(PROBE_TIMEOUT, probe_restaurant_api()).await {
        Ok(Ok(true)) => "reachable",
        Ok(Ok(false)) => {
            warn!("health: restaurant api answered with an error status");
            "degraded"
        }
        Ok(Err(e)) => {
            warn!("health: restaurant api probe failed: {:#?}", e);
            "unreachable"
        }
        Err(_) => {
            warn!("health: restaurant api probe timed out");
            "unreachable"
        }
    };
    Json(json!({
        "status": "ok",
        "restaurant_api": restaurant_api,
    }))
}
