use super::{find_organized_event, rocket_uri_macro_event_page, Event, EventFormData, EventId};
use crate::auth::{AuthorizedTo, Participate};
use crate::database::Repository;
use crate::result::{HttpError, HttpResult};
use crate::template::PageBuilder;
use crate::validation::error_summary;
use rocket::form::Form;
use rocket::response::{Flash, Redirect};
use rocket::{get, post, uri};
use rocket_dyn_templates::{context, Template};

#[get("/events/<id>/edit")]
pub(super) async fn edit_event_page(
    id: EventId,
    user: AuthorizedTo<Participate>,
    page: PageBuilder,
    mut repository: Box<dyn Repository>,
) -> HttpResult<Template> {
    let event = find_organized_event(repository.as_mut(), id, &user).await?;
    Ok(page.render(
        "events/edit",
        context! {
            form: EventFormData::from_event(&event),
            update_uri: uri!(update_event(id)),
            cancel_uri: uri!(event_page(id)),
            event,
        },
    ))
}

#[post("/events/<id>/edit", data = "<form>")]
pub(super) async fn update_event(
    id: EventId,
    user: AuthorizedTo<Participate>,
    page: PageBuilder,
    form: Form<EventFormData>,
    mut repository: Box<dyn Repository>,
) -> HttpResult<Flash<Redirect>> {
    let event = find_organized_event(repository.as_mut(), id, &user).await?;
    let form = form.into_inner();
    let changes = match form.validate() {
        Ok(changes) => changes,
        Err(errors) => {
            return Err(HttpError::Invalid(page.render(
                "events/edit",
                context! {
                    error_summary: error_summary(&errors, "event"),
                    errors,
                    form,
                    update_uri: uri!(update_event(id)),
                    cancel_uri: uri!(event_page(id)),
                    event,
                },
            )))
        }
    };
    let event: Event = changes.with_id(event.id);
    repository.update_event(&event).await?;
    Ok(Flash::success(
        Redirect::to(uri!(event_page(id))),
        "Your event has been updated.",
    ))
}
