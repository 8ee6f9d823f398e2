use super::{find_event, rocket_uri_macro_event_page, EventId};
use crate::auth::{AuthorizedTo, Participate};
use crate::database::Repository;
use crate::result::HttpResult;
use rocket::response::Redirect;
use rocket::{post, uri};

#[post("/events/<id>/rsvp")]
pub(super) async fn create_rsvp(
    id: EventId,
    user: AuthorizedTo<Participate>,
    mut repository: Box<dyn Repository>,
) -> HttpResult<Redirect> {
    find_event(repository.as_mut(), id).await?;
    repository.add_rsvp(id, &user.uuid).await?;
    Ok(Redirect::to(uri!(event_page(id))))
}

#[post("/events/<id>/rsvp/cancel")]
pub(super) async fn cancel_rsvp(
    id: EventId,
    user: AuthorizedTo<Participate>,
    mut repository: Box<dyn Repository>,
) -> HttpResult<Redirect> {
    find_event(repository.as_mut(), id).await?;
    repository.remove_rsvp(id, &user.uuid).await?;
    Ok(Redirect::to(uri!(event_page(id))))
}
