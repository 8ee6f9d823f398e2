use super::MemberApplicationFormData;
use crate::database::Repository;
use crate::home::rocket_uri_macro_home_page;
use crate::identity::User;
use crate::result::{HttpError, HttpResult};
use crate::template::PageBuilder;
use crate::validation::error_summary;
use rocket::form::Form;
use rocket::response::{Flash, Redirect};
use rocket::{get, info, post, uri};
use rocket_dyn_templates::{context, Template};
use time::OffsetDateTime;

/// Unlike events, applying for membership is open to every signed-in user.
#[get("/member_applications/new")]
pub(crate) async fn new_member_application_page(
    user: User,
    page: PageBuilder,
    mut repository: Box<dyn Repository>,
) -> HttpResult<Template> {
    let previous_applications = repository.get_member_applications(&user.uuid).await?;
    Ok(page.render(
        "member_applications/new",
        context! {
            form: MemberApplicationFormData::for_user(&user.uuid),
            create_uri: uri!(create_member_application()),
            previous_applications: previous_applications.len(),
        },
    ))
}

#[post("/member_applications", data = "<form>")]
pub(super) async fn create_member_application(
    _user: User,
    page: PageBuilder,
    form: Form<MemberApplicationFormData>,
    mut repository: Box<dyn Repository>,
) -> HttpResult<Flash<Redirect>> {
    let form = form.into_inner();
    let application = match form.validate(OffsetDateTime::now_utc()) {
        Ok(application) => application,
        Err(errors) => {
            return Err(HttpError::Invalid(page.render(
                "member_applications/new",
                context! {
                    error_summary: error_summary(&errors, "member application"),
                    errors,
                    form,
                    create_uri: uri!(create_member_application()),
                },
            )))
        }
    };
    let application = repository.add_member_application(application).await?;
    info!("{} submitted a member application", application.user_uuid);
    Ok(Flash::success(
        Redirect::to(uri!(home_page())),
        "Application Submitted",
    ))
}
