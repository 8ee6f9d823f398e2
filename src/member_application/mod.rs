use crate::identity::UserUuid;
use crate::iso_8601::Iso8601;
use rocket::{routes, Route};
use serde::Serialize;
use time::OffsetDateTime;

mod form;
pub(crate) use form::*;
mod new;
pub(crate) use new::*;

pub(crate) fn routes() -> Vec<Route> {
    routes![new::new_member_application_page, new::create_member_application]
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, sqlx::Type, Serialize)]
#[sqlx(transparent)]
#[serde(transparent)]
pub(crate) struct MemberApplicationId(pub(crate) i64);

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub(crate) struct MemberApplication<Id = MemberApplicationId> {
    pub(crate) id: Id,
    pub(crate) content: String,
    pub(crate) user_uuid: UserUuid,
    pub(crate) created_at: Iso8601<OffsetDateTime>,
}

impl MemberApplication<()> {
    pub(crate) fn with_id(self, id: MemberApplicationId) -> MemberApplication {
        MemberApplication {
            id,
            content: self.content,
            user_uuid: self.user_uuid,
            created_at: self.created_at,
        }
    }
}
