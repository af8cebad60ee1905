use anyhow::bail;
use common::chat::{ChatReply, ChatRequest};
use reqwest::multipart::{Form, Part};
use tracing::info;

use crate::rest_utils::upstream::chatbot_api_url;

/// Forwards one chat turn to the assistant service. The upstream endpoint
/// only speaks multipart, so text-only turns still go out as a form with
/// zero image parts.
pub async fn send_message(request: ChatRequest) -> anyhow::Result<ChatReply> {
    let url = format!("{}/chat", chatbot_api_url());

    let mut form = Form::new()
        .text("session_id", request.session_id.clone())
        .text("user_text_input", request.user_text_input.clone());
    for image in request.images {
        let part = Part::bytes(image.bytes).file_name(image.file_name);
        form = form.part("image_pb", part);
    }

    let client = reqwest::Client::new();
    let response = client.post(&url).multipart(form).send().await?;
    if !response.status().is_success() {
        let status = response.status();
        let txt = response.text().await.unwrap_or_default();
        bail!("Error: {}: {}", status, txt);
    }
    let body = response.text().await?;
    info!("POST {}: {} bytes for session {}", url, body.len(), request.session_id);

    let reply: ChatReply = serde_json::from_str(&body)?;
    Ok(reply)
}
