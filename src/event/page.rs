use super::{find_event, people_to_resolve, EventId, EventPeople};
use crate::auth::{AuthorizedTo, Participate};
use crate::database::Repository;
use crate::identity::IdentityService;
use crate::result::HttpResult;
use crate::template::PageBuilder;
use rocket::{get, uri, State};
use rocket_dyn_templates::{context, Template};

#[get("/events/<id>")]
pub(crate) async fn event_page(
    id: EventId,
    user: AuthorizedTo<Participate>,
    page: PageBuilder,
    mut repository: Box<dyn Repository>,
    identity: &State<Box<dyn IdentityService>>,
) -> HttpResult<Template> {
    let event = find_event(repository.as_mut(), id).await?;
    let organizers = repository.get_organizers(id).await?;
    let rsvps = repository.get_rsvps(id).await?;
    let users = identity
        .fetch_from_uuids(&people_to_resolve(&organizers, &rsvps))
        .await?;
    let people = EventPeople::new(&organizers, &rsvps, &users, &user);
    Ok(page.render(
        "events/show",
        context! {
            event,
            people,
            index_uri: uri!(super::list::events_page()),
            edit_uri: uri!(super::edit::edit_event_page(id)),
            delete_uri: uri!(super::delete::delete_event_page(id)),
            rsvp_uri: uri!(super::rsvp::create_rsvp(id)),
            cancel_rsvp_uri: uri!(super::rsvp::cancel_rsvp(id)),
            make_organizer_uri: uri!(super::organizers::create_organizer(id)),
        },
    ))
}
