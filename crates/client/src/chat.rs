//! Chat endpoints.

use souk_core::chat::{ChatMessage, Conversation, SendMessageRequest};
use souk_core::{CoreError, Envelope};
use validator::Validate;

use crate::error::ClientError;
use crate::http::ApiClient;

/// Fetch the signed-in user's conversations, most recent first.
///
/// `GET /chats`.
pub async fn list_conversations(
    api: &ApiClient,
) -> Result<Envelope<Vec<Conversation>>, ClientError> {
    api.get("/chats", &[]).await
}

/// Fetch all messages in a conversation, oldest first.
///
/// `GET /chats/{conversationId}/messages`.
pub async fn list_messages(
    api: &ApiClient,
    conversation_id: &str,
) -> Result<Envelope<Vec<ChatMessage>>, ClientError> {
    api.get(&format!("/chats/{conversation_id}/messages"), &[])
        .await
}

/// Send a message into a conversation.
///
/// `POST /chats/{conversationId}/messages`.
pub async fn send_message(
    api: &ApiClient,
    conversation_id: &str,
    request: &SendMessageRequest,
) -> Result<Envelope<ChatMessage>, ClientError> {
    request.validate().map_err(CoreError::from)?;
    api.post(&format!("/chats/{conversation_id}/messages"), request)
        .await
}
