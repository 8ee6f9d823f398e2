//! Users live in an external identity service and are
//! referenced by their UUID everywhere in this application.

use anyhow::{Context as _, Result};
use rocket::fairing::{self, Fairing};
use rocket::figment::Figment;
use rocket::{async_trait, error, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use url::Url;

mod http;
pub(crate) use http::*;
mod static_directory;
pub(crate) use static_directory::*;

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, sqlx::Type, Serialize, Deserialize,
)]
#[sqlx(transparent)]
#[serde(transparent)]
pub(crate) struct UserUuid(pub(crate) String);

impl fmt::Display for UserUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for UserUuid {
    fn from(value: &str) -> Self {
        UserUuid(value.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct User {
    pub(crate) uuid: UserUuid,
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) role: Role,
}

impl User {
    pub(crate) fn is_member_or_mentor(&self) -> bool {
        matches!(self.role, Role::Member | Role::Mentor)
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Role {
    Member,
    Mentor,
    #[default]
    Guest,
}

#[async_trait]
pub(crate) trait IdentityService: Send + Sync {
    /// Looks up all users with the given UUIDs in one batch.
    /// Unknown UUIDs are missing from the returned map.
    async fn fetch_from_uuids(&self, uuids: &[UserUuid]) -> Result<HashMap<UserUuid, User>>;
}

pub(crate) async fn fetch_one(
    identity: &dyn IdentityService,
    uuid: &UserUuid,
) -> Result<Option<User>> {
    let mut users = identity.fetch_from_uuids(std::slice::from_ref(uuid)).await?;
    Ok(users.remove(uuid))
}

#[derive(Debug, Deserialize)]
#[serde(tag = "provider", rename_all = "snake_case")]
enum IdentityConfig {
    Static {
        #[serde(default)]
        users: Vec<User>,
    },
    Http {
        base_url: Url,
    },
}

pub(crate) fn fairing() -> impl Fairing {
    fairing::AdHoc::try_on_ignite("Identity Service", |rocket| async {
        match identity_service_from_figment(rocket.figment()) {
            Ok(service) => Ok(rocket.manage(service)),
            Err(e) => {
                error!("failed to initialize identity service:\n{e:?}");
                Err(rocket)
            }
        }
    })
}

fn identity_service_from_figment(figment: &Figment) -> Result<Box<dyn IdentityService>> {
    let config: IdentityConfig = figment
        .extract_inner("identity")
        .context("failed to read identity configuration")?;
    Ok(match config {
        IdentityConfig::Static { users } => {
            info!("using a static identity directory with {} users", users.len());
            Box::new(StaticDirectory::new(users))
        }
        IdentityConfig::Http { base_url } => {
            info!("using the identity service at {base_url}");
            Box::new(HttpIdentityService::new(base_url)?)
        }
    })
}
