use super::find_organized_event;
use super::{rocket_uri_macro_event_page, EventId};
use crate::auth::{AuthorizedTo, Participate};
use crate::database::Repository;
use crate::result::HttpResult;
use crate::template::PageBuilder;
use rocket::response::{Flash, Redirect};
use rocket::{get, info, post, uri};
use rocket_dyn_templates::{context, Template};

#[get("/events/<id>/delete")]
pub(super) async fn delete_event_page(
    id: EventId,
    user: AuthorizedTo<Participate>,
    page: PageBuilder,
    mut repository: Box<dyn Repository>,
) -> HttpResult<Template> {
    let event = find_organized_event(repository.as_mut(), id, &user).await?;
    Ok(page.render(
        "events/delete",
        context! {
            event,
            delete_uri: uri!(delete_event(id)),
            cancel_uri: uri!(event_page(id)),
        },
    ))
}

#[post("/events/<id>/delete")]
pub(super) async fn delete_event(
    id: EventId,
    user: AuthorizedTo<Participate>,
    mut repository: Box<dyn Repository>,
) -> HttpResult<Flash<Redirect>> {
    find_organized_event(repository.as_mut(), id, &user).await?;
    repository.delete_event(id).await?;
    info!("{} deleted event {id}", user.uuid);
    Ok(Flash::success(
        Redirect::to(uri!(super::list::events_page())),
        "Your event has been deleted.",
    ))
}
