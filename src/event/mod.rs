use crate::database::Repository;
use crate::identity::{User, UserUuid};
use crate::iso_8601::Iso8601;
use crate::result::HttpResult;
use rocket::http::Status;
use rocket::request::FromParam;
use rocket::{routes, Route, UriDisplayPath};
use serde::Serialize;
use std::fmt;
use std::num::ParseIntError;
use time::{Date, Time};

mod delete;
mod edit;
mod form;
pub(crate) use form::*;
mod list;
pub(crate) use list::*;
mod new;
mod organizers;
mod page;
pub(crate) use page::*;
mod rsvp;
mod view_model;
pub(crate) use view_model::*;

pub(crate) fn routes() -> Vec<Route> {
    routes![
        list::events_page,
        new::new_event_page,
        new::create_event,
        page::event_page,
        edit::edit_event_page,
        edit::update_event,
        delete::delete_event_page,
        delete::delete_event,
        rsvp::create_rsvp,
        rsvp::cancel_rsvp,
        organizers::create_organizer,
    ]
}

#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, sqlx::Type, Serialize, UriDisplayPath,
)]
#[sqlx(transparent)]
#[serde(transparent)]
pub(crate) struct EventId(pub(crate) i64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'a> FromParam<'a> for EventId {
    type Error = ParseIntError;

    fn from_param(param: &'a str) -> Result<Self, Self::Error> {
        param.parse().map(EventId)
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub(crate) struct Event<Id = EventId> {
    pub(crate) id: Id,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) location: String,
    pub(crate) date: Iso8601<Date>,
    pub(crate) start_time: Iso8601<Time>,
    pub(crate) end_time: Iso8601<Time>,
}

impl Event<()> {
    pub(crate) fn with_id(self, id: EventId) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            location: self.location,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub(crate) struct EventOrganizer {
    pub(crate) id: i64,
    pub(crate) event_id: EventId,
    pub(crate) user_uuid: UserUuid,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub(crate) struct EventRsvp {
    pub(crate) id: i64,
    pub(crate) event_id: EventId,
    pub(crate) user_uuid: UserUuid,
}

/// Fetches the event or fails with `404 Not Found`.
pub(crate) async fn find_event(repository: &mut dyn Repository, id: EventId) -> HttpResult<Event> {
    Ok(repository.get_event(id).await?.ok_or(Status::NotFound)?)
}

/// Fetches the event if `user` organizes it, fails with
/// `404 Not Found` or `403 Forbidden` otherwise.
pub(crate) async fn find_organized_event(
    repository: &mut dyn Repository,
    id: EventId,
    user: &User,
) -> HttpResult<Event> {
    let event = find_event(repository, id).await?;
    if repository.is_organizer(id, &user.uuid).await? {
        Ok(event)
    } else {
        Err(Status::Forbidden.into())
    }
}
