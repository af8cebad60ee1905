//! Wire contract of the chat assistant service.

use serde::{Deserialize, Serialize};


/// One attached image, posted as an `image_pb` multipart file part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatImage {
    pub file_name: String,
    #[serde(with = "serde_bytes")]
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChatRequest {
    pub session_id: String,
    pub user_text_input: String,
    pub images: Vec<ChatImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChatReply {
    pub status: String,
    pub messages: String,
    /// Ids of restaurants the assistant recommends alongside its answer.
    pub res_id: Vec<String>,
}

impl ChatReply {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_decodes_service_payload() {
        let reply: ChatReply = serde_json::from_str(
            r#"{"status": "success", "messages": "Thử Phở Thìn nhé!", "res_id": ["12", "44"]}"#,
        )
        .unwrap();
        assert!(reply.is_success());
        assert_eq!(reply.res_id, vec!["12", "44"]);
    }

    #[test]
    fn test_reply_tolerates_missing_res_id() {
        let reply: ChatReply =
            serde_json::from_str(r#"{"status": "error", "messages": "quá tải"}"#).unwrap();
        assert!(!reply.is_success());
        assert!(reply.res_id.is_empty());
    }
}
