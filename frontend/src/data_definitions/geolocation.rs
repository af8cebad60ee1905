//! Browser geolocation, shared through context.
//!
//! The position is requested lazily (hero card or distance sort), mirrored
//! into localStorage, and restored on the next visit while it is fresh.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use common::location::Coordinates;
use common::restaurant_const::LOCATION_STALE_MS;

use crate::data_definitions::search_cache::now_ms;

const UNSUPPORTED_MESSAGE: &str = "Geolocation is not supported by your browser";
const DENIED_MESSAGE: &str = "Location permission denied. You can enable it in your settings.";
const FAILED_MESSAGE: &str = "Unable to retrieve your location";

const PERMISSION_KEY: &str = "locationPermission";
const STORED_LOCATION_KEY: &str = "userLocation";
const PROMPT_DISMISSED_KEY: &str = "locationPromptDismissed";

/// localStorage payload for the last granted position.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredLocation {
    latitude: f64,
    longitude: f64,
    timestamp: f64,
}

/// Geolocation state provided at the app root.
#[derive(Clone, Copy)]
pub struct LocationState {
    pub coordinates: ReadSignal<Option<Coordinates>>,
    pub loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
    /// True once the user clicked the prompt card away.
    pub prompt_dismissed: ReadSignal<bool>,
    pub request: Callback<()>,
    pub dismiss_prompt: Callback<()>,
}

/// Hook installing [`LocationState`] into context. Call once, at the root.
pub fn provide_location_state() {
    let mut coordinates = use_signal(|| None::<Coordinates>);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut prompt_dismissed = use_signal(|| false);

    let request = Callback::new(move |_: ()| {
        if loading() {
            return;
        }
        loading.set(true);
        error.set(None);
        spawn(async move {
            match browser_position().await {
                Ok(found) => {
                    coordinates.set(Some(found));
                    remember_grant(&found);
                }
                Err(message) => {
                    error.set(Some(message));
                    write_storage(PERMISSION_KEY, "denied");
                }
            }
            loading.set(false);
        });
    });

    let dismiss_prompt = Callback::new(move |_: ()| {
        prompt_dismissed.set(true);
        write_storage(PROMPT_DISMISSED_KEY, "true");
    });

    // Mount restore: reuse the stored position while it is fresh, otherwise
    // re-request silently when permission was granted on an earlier visit.
    use_effect(move || {
        if read_storage(PROMPT_DISMISSED_KEY).as_deref() == Some("true") {
            prompt_dismissed.set(true);
        }
        if read_storage(PERMISSION_KEY).as_deref() != Some("granted") {
            return;
        }
        match fresh_stored_location() {
            Some(stored) => coordinates.set(Some(stored)),
            None => request.call(()),
        }
    });

    use_context_provider(|| LocationState {
        coordinates: coordinates.into(),
        loading: loading.into(),
        error: error.into(),
        prompt_dismissed: prompt_dismissed.into(),
        request,
        dismiss_prompt,
    });
}

fn remember_grant(coordinates: &Coordinates) {
    write_storage(PERMISSION_KEY, "granted");
    let stored = StoredLocation {
        latitude: coordinates.latitude,
        longitude: coordinates.longitude,
        timestamp: now_ms(),
    };
    if let Ok(payload) = serde_json::to_string(&stored) {
        write_storage(STORED_LOCATION_KEY, &payload);
    }
}

/// Stored position, unless it is older than the 30 minute window or does not
/// parse. A miss here means the caller should ask the browser again.
fn fresh_stored_location() -> Option<Coordinates> {
    let raw = read_storage(STORED_LOCATION_KEY)?;
    let stored: StoredLocation = serde_json::from_str(&raw).ok()?;
    if now_ms() - stored.timestamp >= LOCATION_STALE_MS {
        return None;
    }
    Some(Coordinates {
        latitude: stored.latitude,
        longitude: stored.longitude,
    })
}

#[cfg(target_arch = "wasm32")]
async fn browser_position() -> Result<Coordinates, String> {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    let geolocation = web_sys::window().and_then(|window| window.navigator().geolocation().ok());
    let Some(geolocation) = geolocation else {
        return Err(UNSUPPORTED_MESSAGE.to_string());
    };

    // getCurrentPosition is callback-shaped; wrap it in a promise so the
    // caller can await it like everything else.
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let reject_now = reject.clone();
        let success = Closure::once_into_js(move |position: web_sys::Position| {
            let _ = resolve.call1(&JsValue::NULL, &position);
        });
        let failure = Closure::once_into_js(move |position_error: web_sys::PositionError| {
            let _ = reject.call1(&JsValue::NULL, &position_error);
        });
        if geolocation
            .get_current_position_with_error_callback(
                success.unchecked_ref(),
                Some(failure.unchecked_ref()),
            )
            .is_err()
        {
            let _ = reject_now.call1(&JsValue::NULL, &JsValue::NULL);
        }
    });

    match JsFuture::from(promise).await {
        Ok(value) => {
            let position: web_sys::Position = value.unchecked_into();
            let coords = position.coords();
            Ok(Coordinates {
                latitude: coords.latitude(),
                longitude: coords.longitude(),
            })
        }
        Err(value) => {
            let denied = value
                .dyn_ref::<web_sys::PositionError>()
                .map(|e| e.code() == web_sys::PositionError::PERMISSION_DENIED)
                .unwrap_or(false);
            if denied {
                Err(DENIED_MESSAGE.to_string())
            } else {
                Err(FAILED_MESSAGE.to_string())
            }
        }
    }
}

// Positions only exist in the browser; server rendering and the desktop
// shell report the same unsupported state the web app would.
#[cfg(not(target_arch = "wasm32"))]
async fn browser_position() -> Result<Coordinates, String> {
    Err(UNSUPPORTED_MESSAGE.to_string())
}

#[cfg(target_arch = "wasm32")]
fn read_storage(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok().flatten()?;
    storage.get_item(key).ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn write_storage(key: &str, value: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(key, value);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_storage(_key: &str) -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn write_storage(_key: &str, _value: &str) {}
