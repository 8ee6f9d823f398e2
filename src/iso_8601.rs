use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::str::FromStr;
use time::format_description::BorrowedFormatItem as FormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, Time};

/// Stores and renders dates and times in their ISO 8601 representation,
/// which is also what `<input type="date">` and `<input type="time">` use.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, sqlx::Type)]
#[sqlx(transparent)]
pub(crate) struct Iso8601<T>(pub(crate) T);

impl<T> From<T> for Iso8601<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> Deref for Iso8601<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

const DATE_FORMAT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");
const TIME_FORMAT: &[FormatItem<'_>] = format_description!("[hour]:[minute]");
const TIME_WITH_SECONDS_FORMAT: &[FormatItem<'_>] =
    format_description!("[hour]:[minute]:[second]");

impl FromStr for Iso8601<Date> {
    type Err = time::error::Parse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s.trim(), DATE_FORMAT).map(Self)
    }
}

/// Seconds are accepted but dropped: times are shown and
/// edited with minute precision only.
impl FromStr for Iso8601<Time> {
    type Err = time::error::Parse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Time::parse(s, TIME_WITH_SECONDS_FORMAT)
            .or_else(|_| Time::parse(s, TIME_FORMAT))
            .map(|time| Self(time.replace_second(0).unwrap_or(time)))
    }
}

macro_rules! impl_serde {
    ($T:ident with $mod:path) => {
        impl Serialize for Iso8601<$T> {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                use $mod as module;
                module::serialize(self, serializer)
            }
        }

        impl<'de> Deserialize<'de> for Iso8601<$T> {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                use $mod as module;
                module::deserialize(deserializer).map(Self)
            }
        }
    };
}

time::serde::format_description!(iso8601_date, Date, "[year]-[month]-[day]");
time::serde::format_description!(iso8601_time, Time, "[hour]:[minute]");

impl_serde!(OffsetDateTime with time::serde::iso8601);
impl_serde!(Date with iso8601_date);
impl_serde!(Time with iso8601_time);
