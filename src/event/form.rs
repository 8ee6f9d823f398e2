use super::Event;
use crate::iso_8601::Iso8601;
use crate::validation::{required, FieldError};
use rocket::FromForm;
use serde::Serialize;
use time::{Date, Time};

/// The event form exactly as it was submitted, so that
/// it can be shown again when it contains errors.
#[derive(Debug, Default, Clone, FromForm, Serialize)]
pub(crate) struct EventFormData {
    #[field(default = String::new())]
    pub(crate) title: String,
    #[field(default = String::new())]
    pub(crate) description: String,
    #[field(default = String::new())]
    pub(crate) location: String,
    #[field(default = String::new())]
    pub(crate) date: String,
    #[field(default = String::new())]
    pub(crate) start_time: String,
    #[field(default = String::new())]
    pub(crate) end_time: String,
}

impl EventFormData {
    pub(crate) fn from_event<Id>(event: &Event<Id>) -> Self {
        Self {
            title: event.title.clone(),
            description: event.description.clone(),
            location: event.location.clone(),
            date: event.date.0.to_string(),
            start_time: format_time(*event.start_time),
            end_time: format_time(*event.end_time),
        }
    }

    pub(crate) fn validate(&self) -> Result<Event<()>, Vec<FieldError>> {
        let mut errors = Vec::new();
        let title = required(&mut errors, "title", "Title", &self.title);
        let description = required(&mut errors, "description", "Description", &self.description);
        let location = required(&mut errors, "location", "Location", &self.location);
        let date = parse::<Date>(&mut errors, "date", "Date", &self.date);
        let start_time = parse::<Time>(&mut errors, "start_time", "Start time", &self.start_time);
        let end_time = parse::<Time>(&mut errors, "end_time", "End time", &self.end_time);

        match (title, description, location, date, start_time, end_time) {
            (
                Some(title),
                Some(description),
                Some(location),
                Some(date),
                Some(start_time),
                Some(end_time),
            ) => {
                if *end_time < *start_time {
                    return Err(vec![FieldError::new(
                        "end_time",
                        "End time must not be before the start time",
                    )]);
                }
                Ok(Event {
                    id: (),
                    title,
                    description,
                    location,
                    date,
                    start_time,
                    end_time,
                })
            }
            _ => Err(errors),
        }
    }
}

fn parse<T>(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    label: &str,
    value: &str,
) -> Option<Iso8601<T>>
where
    Iso8601<T>: std::str::FromStr,
{
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, format!("{label} can't be blank")));
        return None;
    }
    match value.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.push(FieldError::new(field, format!("{label} is invalid")));
            None
        }
    }
}

fn format_time(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}
