use crate::identity::User;
use anyhow::Error;
use rocket::fairing::Fairing;
use rocket::request::{FlashMessage, FromRequest, Outcome};
use rocket::{async_trait, Request};
use rocket_dyn_templates::{context, Template};
use serde::Serialize;
use std::borrow::Cow;

mod filters;

pub(crate) fn fairing() -> impl Fairing {
    Template::custom(|engines| filters::register_custom_filters(&mut engines.tera))
}

/// Renders pages with everything the base layout needs:
/// the signed-in user, the current path and the flash notice.
pub(crate) struct PageBuilder {
    user: Option<User>,
    path: String,
    notice: Option<Notice>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct Notice {
    kind: String,
    message: String,
}

impl PageBuilder {
    pub(crate) fn render(
        &self,
        name: impl Into<Cow<'static, str>>,
        context: impl Serialize,
    ) -> Template {
        Template::render(
            name,
            context! { user: &self.user, path: &self.path, notice: &self.notice, page: context },
        )
    }
}

#[async_trait]
impl<'r> FromRequest<'r> for PageBuilder {
    type Error = Error;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let user = request.guard::<Option<User>>().await.succeeded().flatten();
        let notice = request
            .guard::<Option<FlashMessage<'_>>>()
            .await
            .succeeded()
            .flatten()
            .map(|flash| Notice {
                kind: flash.kind().to_owned(),
                message: flash.message().to_owned(),
            });
        Outcome::Success(PageBuilder {
            user,
            path: request.uri().path().to_string(),
            notice,
        })
    }
}
