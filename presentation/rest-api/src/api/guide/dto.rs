use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::guide::model::{ChatMessage, ChatRole};

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum ChatRoleDto {
    #[oai(rename = "user")]
    User,
    #[oai(rename = "assistant")]
    Assistant,
    #[oai(rename = "system")]
    System,
}

impl From<ChatRole> for ChatRoleDto {
    fn from(role: ChatRole) -> Self {
        match role {
            ChatRole::User => ChatRoleDto::User,
            ChatRole::Assistant => ChatRoleDto::Assistant,
            ChatRole::System => ChatRoleDto::System,
        }
    }
}

impl From<ChatRoleDto> for ChatRole {
    fn from(dto: ChatRoleDto) -> Self {
        match dto {
            ChatRoleDto::User => ChatRole::User,
            ChatRoleDto::Assistant => ChatRole::Assistant,
            ChatRoleDto::System => ChatRole::System,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ChatMessageDto {
    /// Who wrote the message
    pub role: ChatRoleDto,
    /// Message text
    pub content: String,
}

impl From<ChatMessage> for ChatMessageDto {
    fn from(message: ChatMessage) -> Self {
        Self {
            role: message.role.into(),
            content: message.content,
        }
    }
}

impl From<ChatMessageDto> for ChatMessage {
    fn from(dto: ChatMessageDto) -> Self {
        Self {
            role: dto.role.into(),
            content: dto.content,
        }
    }
}

/// Request for one guide reply.
#[derive(Debug, Clone, Object)]
pub struct GuideChatRequest {
    /// Conversation so far, oldest first
    pub messages: Vec<ChatMessageDto>,
    /// Storefront path the visitor is on, e.g. "/models/abc"
    #[oai(skip_serializing_if_is_none)]
    pub path: Option<String>,
}
