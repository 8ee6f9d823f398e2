use super::{IdentityService, User, UserUuid};
use anyhow::Result;
use rocket::async_trait;
use std::collections::HashMap;

/// An identity directory whose users are listed in the configuration.
#[derive(Debug)]
pub(crate) struct StaticDirectory {
    users: HashMap<UserUuid, User>,
}

impl StaticDirectory {
    pub(crate) fn new(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users.into_iter().map(|u| (u.uuid.clone(), u)).collect(),
        }
    }
}

#[async_trait]
impl IdentityService for StaticDirectory {
    async fn fetch_from_uuids(&self, uuids: &[UserUuid]) -> Result<HashMap<UserUuid, User>> {
        Ok(uuids
            .iter()
            .filter_map(|uuid| self.users.get(uuid))
            .map(|user| (user.uuid.clone(), user.clone()))
            .collect())
    }
}
