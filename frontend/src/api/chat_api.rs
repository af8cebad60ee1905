//! Client API call for the chatbot endpoint.

use common::chat::{ChatReply, ChatRequest};
use dioxus::prelude::*;




#[server]
pub async fn send_message(request: ChatRequest) -> Result<ChatReply, ServerFnError> {
    let x = backend::api::chat::send_message(request).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
