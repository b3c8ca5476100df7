//! Conversion logic between DTOs and domain entities.

use hiroba_shared::time::timestamp_to_rfc3339;

use crate::domain::{Message, MessageBody, User, Username, ValueObjectError};
use crate::infrastructure::dto::http as dto;

// ========================================
// DTO → Domain
// ========================================

impl dto::PostMessageRequest {
    /// Validate the request and split it into the author and body
    pub fn into_domain(self) -> Result<(Username, MessageBody), ValueObjectError> {
        let author = Username::new(self.username)?;
        Ok((author, MessageBody::new(self.message.unwrap_or_default())))
    }
}

impl TryFrom<dto::PingRequest> for Username {
    type Error = ValueObjectError;

    fn try_from(dto: dto::PingRequest) -> Result<Self, Self::Error> {
        Username::new(dto.username)
    }
}

// ========================================
// Domain Entity → DTO
// ========================================

impl From<Message> for dto::MessageDto {
    fn from(model: Message) -> Self {
        Self {
            username: model.author.into_string(),
            message: model.body.into_string(),
            time_sent: timestamp_to_rfc3339(model.sent_at.value()),
        }
    }
}

impl From<User> for dto::UserDto {
    fn from(model: User) -> Self {
        Self {
            username: model.username.into_string(),
            last_ping: timestamp_to_rfc3339(model.last_ping.value()),
        }
    }
}
