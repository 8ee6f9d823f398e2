use super::{find_organized_event, rocket_uri_macro_event_page, EventId};
use crate::auth::{AuthorizedTo, Participate};
use crate::database::Repository;
use crate::identity::UserUuid;
use crate::result::HttpResult;
use rocket::form::Form;
use rocket::http::Status;
use rocket::response::Redirect;
use rocket::{info, post, uri, FromForm};

#[post("/events/<id>/organizers", data = "<form>")]
pub(super) async fn create_organizer(
    id: EventId,
    user: AuthorizedTo<Participate>,
    form: Form<NewOrganizerForm>,
    mut repository: Box<dyn Repository>,
) -> HttpResult<Redirect> {
    find_organized_event(repository.as_mut(), id, &user).await?;
    let new_organizer = UserUuid(form.into_inner().user_uuid);
    // Only attendees can be promoted.
    if !repository.has_rsvp(id, &new_organizer).await? {
        return Err(Status::UnprocessableEntity.into());
    }
    repository.add_organizer(id, &new_organizer).await?;
    info!("{} made {new_organizer} an organizer of event {id}", user.uuid);
    Ok(Redirect::to(uri!(event_page(id))))
}

#[derive(Debug, FromForm)]
pub(super) struct NewOrganizerForm {
    user_uuid: String,
}
