use super::{IdentityService, User, UserUuid};
use anyhow::{Context as _, Result};
use rocket::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

pub(crate) type HttpClient = reqwest::Client;

/// Resolves users through the identity service's batch lookup endpoint.
pub(crate) struct HttpIdentityService {
    client: HttpClient,
    lookup_url: Url,
}

impl HttpIdentityService {
    pub(crate) fn new(base_url: Url) -> Result<Self> {
        Ok(Self {
            client: HttpClient::builder()
                .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
                .build()
                .context("failed to build http client")?,
            lookup_url: lookup_url(base_url)?,
        })
    }
}

#[async_trait]
impl IdentityService for HttpIdentityService {
    async fn fetch_from_uuids(&self, uuids: &[UserUuid]) -> Result<HashMap<UserUuid, User>> {
        if uuids.is_empty() {
            return Ok(HashMap::new());
        }
        let response: LookupResponse = self
            .client
            .post(self.lookup_url.clone())
            .json(&LookupRequest { uuids })
            .send()
            .await
            .context("identity service is unreachable")?
            .error_for_status()
            .context("identity service rejected the lookup")?
            .json()
            .await
            .context("identity service sent an invalid response")?;
        Ok(response
            .users
            .into_iter()
            .map(|user| (user.uuid.clone(), user))
            .collect())
    }
}

fn lookup_url(mut base_url: Url) -> Result<Url> {
    // Without the trailing slash, join would replace the last path segment.
    if !base_url.path().ends_with('/') {
        base_url.set_path(&format!("{}/", base_url.path()));
    }
    base_url
        .join("users/lookup")
        .context("invalid identity service url")
}

#[derive(Debug, Serialize)]
struct LookupRequest<'a> {
    uuids: &'a [UserUuid],
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    users: Vec<User>,
}
