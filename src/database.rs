use crate::event::{Event, EventId, EventOrganizer, EventRsvp};
use crate::identity::UserUuid;
use crate::member_application::{MemberApplication, MemberApplicationId};
use anyhow::{Context as _, Result};
use rocket::fairing::{self, Fairing};
use rocket::request::{FromRequest, Outcome};
use rocket::{async_trait, error, info, Build, Request, Rocket};
use rocket_db_pools::{Connection, Database};
use sqlx::pool::PoolConnection;
use sqlx::{Connection as _, Sqlite, SqlitePool};
use std::ops::DerefMut;

type SqliteConnection = PoolConnection<Sqlite>;

#[derive(Database)]
#[database("sqlite")]
pub(crate) struct CommunityDatabase(SqlitePool);

#[async_trait]
pub(crate) trait Repository: Send {
    async fn add_member_application(
        &mut self,
        application: MemberApplication<()>,
    ) -> Result<MemberApplication>;

    async fn get_member_applications(
        &mut self,
        user: &UserUuid,
    ) -> Result<Vec<MemberApplication>>;

    /// Adds the event and makes `organizer` its first organizer.
    async fn add_event(&mut self, event: Event<()>, organizer: &UserUuid) -> Result<Event>;

    /// Fetches all events ordered by their date.
    async fn get_events(&mut self) -> Result<Vec<Event>>;

    async fn get_event(&mut self, id: EventId) -> Result<Option<Event>>;

    async fn update_event(&mut self, event: &Event) -> Result<()>;

    /// Deletes the event together with its organizers and RSVPs.
    async fn delete_event(&mut self, id: EventId) -> Result<()>;

    async fn get_organizers(&mut self, event: EventId) -> Result<Vec<EventOrganizer>>;

    async fn is_organizer(&mut self, event: EventId, user: &UserUuid) -> Result<bool>;

    /// Adding an existing organizer again is a no-op.
    async fn add_organizer(&mut self, event: EventId, user: &UserUuid) -> Result<()>;

    async fn get_rsvps(&mut self, event: EventId) -> Result<Vec<EventRsvp>>;

    async fn has_rsvp(&mut self, event: EventId, user: &UserUuid) -> Result<bool>;

    /// RSVPing twice is a no-op.
    async fn add_rsvp(&mut self, event: EventId, user: &UserUuid) -> Result<()>;

    async fn remove_rsvp(&mut self, event: EventId, user: &UserUuid) -> Result<()>;
}

pub(crate) struct SqliteRepository(pub(crate) SqliteConnection);

#[async_trait]
impl Repository for SqliteRepository {
    async fn add_member_application(
        &mut self,
        application: MemberApplication<()>,
    ) -> Result<MemberApplication> {
        let result = sqlx::query(
            "INSERT INTO member_applications (content, user_uuid, created_at)
             VALUES (?1, ?2, ?3)",
        )
        .bind(&application.content)
        .bind(&application.user_uuid)
        .bind(application.created_at)
        .execute(self.0.deref_mut())
        .await?;
        Ok(application.with_id(MemberApplicationId(result.last_insert_rowid())))
    }

    async fn get_member_applications(
        &mut self,
        user: &UserUuid,
    ) -> Result<Vec<MemberApplication>> {
        let applications = sqlx::query_as(
            "SELECT * FROM member_applications WHERE user_uuid = ?1 ORDER BY created_at",
        )
        .bind(user)
        .fetch_all(self.0.deref_mut())
        .await?;
        Ok(applications)
    }

    async fn add_event(&mut self, event: Event<()>, organizer: &UserUuid) -> Result<Event> {
        let mut transaction = self.0.begin().await?;

        let event_id: i64 = sqlx::query_scalar(
            "INSERT INTO events (title, description, location, date, start_time, end_time)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING id",
        )
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.location)
        .bind(event.date)
        .bind(event.start_time)
        .bind(event.end_time)
        .fetch_one(&mut *transaction)
        .await?;

        sqlx::query("INSERT INTO event_organizers (event_id, user_uuid) VALUES (?1, ?2)")
            .bind(event_id)
            .bind(organizer)
            .execute(&mut *transaction)
            .await?;

        transaction.commit().await?;

        Ok(event.with_id(EventId(event_id)))
    }

    async fn get_events(&mut self) -> Result<Vec<Event>> {
        let events = sqlx::query_as("SELECT * FROM events ORDER BY date, start_time, id")
            .fetch_all(self.0.deref_mut())
            .await?;
        Ok(events)
    }

    async fn get_event(&mut self, id: EventId) -> Result<Option<Event>> {
        let event = sqlx::query_as("SELECT * FROM events WHERE id = ?1")
            .bind(id)
            .fetch_optional(self.0.deref_mut())
            .await?;
        Ok(event)
    }

    async fn update_event(&mut self, event: &Event) -> Result<()> {
        sqlx::query(
            "UPDATE events
             SET title = ?2, description = ?3, location = ?4, date = ?5, start_time = ?6, end_time = ?7
             WHERE id = ?1",
        )
        .bind(event.id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.location)
        .bind(event.date)
        .bind(event.start_time)
        .bind(event.end_time)
        .execute(self.0.deref_mut())
        .await?;
        Ok(())
    }

    async fn delete_event(&mut self, id: EventId) -> Result<()> {
        let mut transaction = self.0.begin().await?;
        sqlx::query("DELETE FROM event_rsvps WHERE event_id = ?1")
            .bind(id)
            .execute(&mut *transaction)
            .await?;
        sqlx::query("DELETE FROM event_organizers WHERE event_id = ?1")
            .bind(id)
            .execute(&mut *transaction)
            .await?;
        sqlx::query("DELETE FROM events WHERE id = ?1")
            .bind(id)
            .execute(&mut *transaction)
            .await?;
        transaction.commit().await?;
        Ok(())
    }

    async fn get_organizers(&mut self, event: EventId) -> Result<Vec<EventOrganizer>> {
        let organizers =
            sqlx::query_as("SELECT * FROM event_organizers WHERE event_id = ?1 ORDER BY id")
                .bind(event)
                .fetch_all(self.0.deref_mut())
                .await?;
        Ok(organizers)
    }

    async fn is_organizer(&mut self, event: EventId, user: &UserUuid) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT count(1) FROM event_organizers WHERE event_id = ?1 AND user_uuid = ?2",
        )
        .bind(event)
        .bind(user)
        .fetch_one(self.0.deref_mut())
        .await?;
        Ok(count >= 1)
    }

    async fn add_organizer(&mut self, event: EventId, user: &UserUuid) -> Result<()> {
        sqlx::query("INSERT OR IGNORE INTO event_organizers (event_id, user_uuid) VALUES (?1, ?2)")
            .bind(event)
            .bind(user)
            .execute(self.0.deref_mut())
            .await?;
        Ok(())
    }

    async fn get_rsvps(&mut self, event: EventId) -> Result<Vec<EventRsvp>> {
        let rsvps = sqlx::query_as("SELECT * FROM event_rsvps WHERE event_id = ?1 ORDER BY id")
            .bind(event)
            .fetch_all(self.0.deref_mut())
            .await?;
        Ok(rsvps)
    }

    async fn has_rsvp(&mut self, event: EventId, user: &UserUuid) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT count(1) FROM event_rsvps WHERE event_id = ?1 AND user_uuid = ?2",
        )
        .bind(event)
        .bind(user)
        .fetch_one(self.0.deref_mut())
        .await?;
        Ok(count >= 1)
    }

    async fn add_rsvp(&mut self, event: EventId, user: &UserUuid) -> Result<()> {
        sqlx::query("INSERT OR IGNORE INTO event_rsvps (event_id, user_uuid) VALUES (?1, ?2)")
            .bind(event)
            .bind(user)
            .execute(self.0.deref_mut())
            .await?;
        Ok(())
    }

    async fn remove_rsvp(&mut self, event: EventId, user: &UserUuid) -> Result<()> {
        sqlx::query("DELETE FROM event_rsvps WHERE event_id = ?1 AND user_uuid = ?2")
            .bind(event)
            .bind(user)
            .execute(self.0.deref_mut())
            .await?;
        Ok(())
    }
}

#[async_trait]
impl<'r> FromRequest<'r> for Box<dyn Repository> {
    type Error = <Connection<CommunityDatabase> as FromRequest<'r>>::Error;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        request
            .guard::<Connection<CommunityDatabase>>()
            .await
            .map(|connection| {
                Box::new(SqliteRepository(connection.into_inner())) as Box<dyn Repository>
            })
    }
}

pub(crate) fn migrations_fairing() -> impl Fairing {
    fairing::AdHoc::try_on_ignite("Database Migrations", |rocket| async {
        match run_migrations(&rocket).await {
            Ok(()) => Ok(rocket),
            Err(e) => {
                error!("failed to migrate database: {e:?}");
                Err(rocket)
            }
        }
    })
}

async fn run_migrations(rocket: &Rocket<Build>) -> Result<()> {
    let database = CommunityDatabase::fetch(rocket).context("database is not initialized")?;
    sqlx::migrate!("./migrations")
        .run(&**database)
        .await
        .context("failed to run migrations")?;
    info!("database schema is up to date");
    Ok(())
}
