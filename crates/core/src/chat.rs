//! Customer/seller chat models.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::EntityId;

/// A conversation between a customer and a seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: EntityId,
    pub customer_id: EntityId,
    pub seller_id: EntityId,
    pub seller_shop_name: String,
    #[serde(default)]
    pub last_message: Option<String>,
    pub unread_count: u32,
    pub updated_at: String,
}

/// One message inside a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: EntityId,
    pub conversation_id: EntityId,
    pub sender_id: EntityId,
    pub body: String,
    pub sent_at: String,
    pub read: bool,
}

/// Payload for sending a message.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    #[validate(length(min = 1, max = 2000))]
    pub body: String,
}
