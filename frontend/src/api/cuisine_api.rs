//! Client API calls for cuisine endpoints.

use common::cuisine::Cuisine;
use dioxus::prelude::*;




#[server]
pub async fn list_cuisines() -> Result<Vec<String>, ServerFnError> {
    let x = backend::api::cuisines::list_cuisines().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn cuisine_detail(name: String) -> Result<Cuisine, ServerFnError> {
    let x = backend::api::cuisines::cuisine_detail(name).await;
    x.map_err(|e| {
        let code = if e.downcast_ref::<backend::rest_utils::upstream::NotFound>().is_some() { 404 } else { 500 };
        ServerFnError::ServerError { message: e.to_string(), code, details: None }
    })
}
