use crate::auth::CookieJarExt as _;
use crate::home::rocket_uri_macro_home_page;
use crate::identity::{fetch_one, IdentityService, UserUuid};
use crate::result::{HttpError, HttpResult};
use crate::template::PageBuilder;
use rocket::form::Form;
use rocket::http::uri::Origin;
use rocket::http::CookieJar;
use rocket::response::{Flash, Redirect};
use rocket::{catch, catchers, get, post, routes, uri, Catcher, FromForm, Request, Route, State};
use rocket_dyn_templates::{context, Template};

pub(crate) fn routes() -> Vec<Route> {
    routes![login_page, login, logout]
}

pub(crate) fn catchers() -> Vec<Catcher> {
    catchers![redirect_to_login]
}

#[get("/login?<return>")]
fn login_page(r#return: Option<&str>, page: PageBuilder) -> Template {
    page.render(
        "login",
        context! { login_uri: uri!(login(r#return = r#return)), uuid: "" },
    )
}

#[post("/login?<return>", data = "<form>")]
async fn login(
    r#return: Option<&str>,
    form: Form<LoginForm>,
    cookies: &CookieJar<'_>,
    identity: &State<Box<dyn IdentityService>>,
    page: PageBuilder,
) -> HttpResult<Redirect> {
    let uuid = UserUuid(form.into_inner().uuid.trim().to_owned());
    match fetch_one(identity.inner().as_ref(), &uuid).await? {
        Some(user) => {
            cookies.sign_in(&user.uuid);
            Ok(redirect(r#return))
        }
        None => Err(HttpError::Invalid(page.render(
            "login",
            context! {
                login_uri: uri!(login(r#return = r#return)),
                uuid,
                error_message: "There is no user with this UUID",
            },
        ))),
    }
}

#[post("/logout")]
fn logout(cookies: &CookieJar<'_>) -> Flash<Redirect> {
    cookies.sign_out();
    Flash::success(Redirect::to(uri!(home_page())), "You have been signed out.")
}

#[derive(Debug, FromForm)]
struct LoginForm {
    #[field(default = String::new())]
    uuid: String,
}

#[catch(401)]
fn redirect_to_login(request: &Request<'_>) -> Redirect {
    let origin = request.uri().to_string();
    Redirect::to(uri!(login_page(r#return = Some(origin))))
}

fn redirect(redirect_url_from_query: Option<&str>) -> Redirect {
    redirect_url_from_query
        .and_then(local_origin)
        .map(Redirect::to)
        .unwrap_or_else(|| Redirect::to(uri!(home_page())))
}

/// Only paths on this site are accepted as redirect targets.
fn local_origin(uri: &str) -> Option<Origin<'static>> {
    if uri.starts_with("//") {
        return None;
    }
    Origin::parse_owned(uri.to_owned()).ok()
}
