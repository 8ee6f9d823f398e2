use crate::identity::{fetch_one, IdentityService, User, UserUuid};
use anyhow::{Context as _, Error, Result};
use rocket::http::{Cookie, CookieJar, SameSite, Status};
use rocket::request::{FromRequest, Outcome};
use rocket::{async_trait, Request, State};
use std::sync::Arc;

#[async_trait]
impl<'r> FromRequest<'r> for User {
    type Error = Arc<Error>;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        request
            .local_cache_async(async {
                match fetch_user(request).await {
                    Ok(Some(user)) => Outcome::Success(user),
                    Ok(None) => Outcome::Forward(Status::Unauthorized),
                    Err(e) => Outcome::Error((Status::InternalServerError, Arc::new(e))),
                }
            })
            .await
            .clone()
    }
}

async fn fetch_user(request: &Request<'_>) -> Result<Option<User>> {
    let Some(uuid) = request.cookies().signed_in_user() else {
        return Ok(None);
    };
    let identity = request
        .guard::<&State<Box<dyn IdentityService>>>()
        .await
        .succeeded()
        .context("identity service not registered")?;
    fetch_one(identity.inner().as_ref(), &uuid).await
}

pub(crate) trait CookieJarExt {
    fn signed_in_user(&self) -> Option<UserUuid>;

    fn sign_in(&self, user: &UserUuid);

    fn sign_out(&self);
}

impl CookieJarExt for CookieJar<'_> {
    fn signed_in_user(&self) -> Option<UserUuid> {
        self.get_private(USER_UUID_COOKIE_NAME)
            .map(|c| UserUuid(c.value().to_owned()))
    }

    fn sign_in(&self, user: &UserUuid) {
        self.add_private(
            Cookie::build((USER_UUID_COOKIE_NAME, user.0.clone()))
                .http_only(true)
                .permanent()
                .same_site(SameSite::Lax),
        );
    }

    fn sign_out(&self) {
        self.remove_private(USER_UUID_COOKIE_NAME);
    }
}

const USER_UUID_COOKIE_NAME: &str = "user-uuid";
