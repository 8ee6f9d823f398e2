use super::{rocket_uri_macro_event_page, EventId, EventListItem};
use crate::auth::{AuthorizedTo, Participate};
use crate::database::Repository;
use crate::result::HttpResult;
use crate::template::PageBuilder;
use rocket::{get, uri};
use rocket_dyn_templates::{context, Template};

#[get("/events")]
pub(crate) async fn events_page(
    _user: AuthorizedTo<Participate>,
    page: PageBuilder,
    mut repository: Box<dyn Repository>,
) -> HttpResult<Template> {
    let events: Vec<_> = repository
        .get_events()
        .await?
        .into_iter()
        .map(|event| EventListItem {
            view_uri: uri!(event_page(id = event.id)).to_string(),
            event,
        })
        .collect();
    Ok(page.render(
        "events/index",
        context! { events, new_event_uri: uri!(super::new::new_event_page()) },
    ))
}
