use super::{rocket_uri_macro_event_page, EventFormData, EventId};
use crate::auth::{AuthorizedTo, Participate};
use crate::database::Repository;
use crate::result::{HttpError, HttpResult};
use crate::template::PageBuilder;
use crate::validation::error_summary;
use rocket::form::Form;
use rocket::response::{Flash, Redirect};
use rocket::{get, info, post, uri};
use rocket_dyn_templates::{context, Template};

#[get("/events/new")]
pub(super) fn new_event_page(_user: AuthorizedTo<Participate>, page: PageBuilder) -> Template {
    page.render(
        "events/new",
        context! { form: EventFormData::default(), create_uri: uri!(create_event()) },
    )
}

#[post("/events", data = "<form>")]
pub(super) async fn create_event(
    user: AuthorizedTo<Participate>,
    page: PageBuilder,
    form: Form<EventFormData>,
    mut repository: Box<dyn Repository>,
) -> HttpResult<Flash<Redirect>> {
    let form = form.into_inner();
    let new_event = match form.validate() {
        Ok(event) => event,
        Err(errors) => {
            return Err(HttpError::Invalid(page.render(
                "events/new",
                context! {
                    error_summary: error_summary(&errors, "event"),
                    errors,
                    form,
                    create_uri: uri!(create_event()),
                },
            )))
        }
    };
    let event = repository.add_event(new_event, &user.uuid).await?;
    info!("{} created event {}", user.uuid, event.id);
    Ok(Flash::success(
        Redirect::to(uri!(event_page(id = event.id))),
        "Your event has been created.",
    ))
}
