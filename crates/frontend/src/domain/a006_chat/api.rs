use crate::shared::api_utils::{api_url, send_json};
use contracts::domain::a006_chat::aggregate::{ChatRequest, ChatResponse};
use gloo_net::http::Request;

pub async fn send_message(request: &ChatRequest) -> Result<ChatResponse, String> {
    send_json(Request::post(&api_url("/chatbot")), request).await
}
