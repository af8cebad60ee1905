pub mod chat_input;
pub mod chat_log;
