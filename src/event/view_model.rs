use super::{Event, EventOrganizer, EventRsvp};
use crate::identity::{User, UserUuid};
use itertools::Itertools as _;
use serde::Serialize;
use std::collections::HashMap;

/// A user as displayed on an event page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Person {
    pub(crate) uuid: UserUuid,
    pub(crate) name: String,
}

impl Person {
    fn resolve(uuid: &UserUuid, users: &HashMap<UserUuid, User>) -> Self {
        Self {
            uuid: uuid.clone(),
            // Users deleted from the identity service still occupy their slot.
            name: users
                .get(uuid)
                .map(|u| u.name.clone())
                .unwrap_or_else(|| uuid.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct EventPeople {
    pub(crate) organizers: Vec<Person>,
    /// Users who RSVP'd but do not organize the event.
    pub(crate) attendees: Vec<Person>,
    pub(crate) is_organizer: bool,
    pub(crate) has_rsvp: bool,
}

impl EventPeople {
    pub(crate) fn new(
        organizers: &[EventOrganizer],
        rsvps: &[EventRsvp],
        users: &HashMap<UserUuid, User>,
        viewer: &User,
    ) -> Self {
        let is_organizer = organizers.iter().any(|o| o.user_uuid == viewer.uuid);
        let has_rsvp = rsvps.iter().any(|r| r.user_uuid == viewer.uuid);
        let organizers = organizers
            .iter()
            .map(|o| Person::resolve(&o.user_uuid, users))
            .collect_vec();
        let attendees = rsvps
            .iter()
            .filter(|r| !organizers.iter().any(|o| o.uuid == r.user_uuid))
            .map(|r| Person::resolve(&r.user_uuid, users))
            .collect_vec();
        Self {
            organizers,
            attendees,
            is_organizer,
            has_rsvp,
        }
    }
}

/// All users that need to be resolved for an event page, without duplicates.
pub(crate) fn people_to_resolve(
    organizers: &[EventOrganizer],
    rsvps: &[EventRsvp],
) -> Vec<UserUuid> {
    organizers
        .iter()
        .map(|o| &o.user_uuid)
        .chain(rsvps.iter().map(|r| &r.user_uuid))
        .unique()
        .cloned()
        .collect()
}

#[derive(Debug, Serialize)]
pub(crate) struct EventListItem {
    #[serde(flatten)]
    pub(crate) event: Event,
    pub(crate) view_uri: String,
}
