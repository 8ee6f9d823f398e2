use super::MemberApplication;
use crate::identity::UserUuid;
use crate::validation::{required, FieldError};
use rocket::FromForm;
use serde::Serialize;
use time::OffsetDateTime;

/// Only `content` and `user_uuid` are accepted, other submitted fields are ignored.
#[derive(Debug, Default, Clone, FromForm, Serialize)]
pub(crate) struct MemberApplicationFormData {
    #[field(default = String::new())]
    pub(crate) content: String,
    #[field(default = String::new())]
    pub(crate) user_uuid: String,
}

impl MemberApplicationFormData {
    pub(crate) fn for_user(user: &UserUuid) -> Self {
        Self {
            content: String::new(),
            user_uuid: user.0.clone(),
        }
    }

    pub(crate) fn validate(
        &self,
        now: OffsetDateTime,
    ) -> Result<MemberApplication<()>, Vec<FieldError>> {
        let mut errors = Vec::new();
        let content = required(&mut errors, "content", "Content", &self.content);
        let user_uuid = required(&mut errors, "user_uuid", "User", &self.user_uuid);
        match (content, user_uuid) {
            (Some(content), Some(user_uuid)) => Ok(MemberApplication {
                id: (),
                content,
                user_uuid: UserUuid(user_uuid),
                created_at: now.into(),
            }),
            _ => Err(errors),
        }
    }
}
