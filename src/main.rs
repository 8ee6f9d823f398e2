use anyhow::{anyhow, Result};
use rocket::figment::Figment;
use rocket::{routes, Build, Rocket};
use rocket_db_pools::Database as _;

mod auth;
mod database;
mod error_pages;
mod event;
mod home;
mod identity;
mod infra;
mod iso_8601;
mod login;
mod member_application;
mod result;
mod template;
mod validation;

#[rocket::main]
async fn main() -> Result<()> {
    let figment = infra::figment()?;
    build_rocket(figment)
        .launch()
        .await
        .map_err(|e| anyhow!("failed to launch: {e}"))?;
    Ok(())
}

fn build_rocket(figment: Figment) -> Rocket<Build> {
    let rocket = rocket::custom(figment)
        .mount("/", routes![home::home_page])
        .mount("/", login::routes())
        .mount("/", event::routes())
        .mount("/", member_application::routes())
        .register("/", login::catchers())
        .register("/", error_pages::catchers())
        .attach(database::CommunityDatabase::init())
        .attach(database::migrations_fairing())
        .attach(identity::fairing())
        .attach(template::fairing());

    #[cfg(feature = "serve-static-files")]
    let rocket = rocket.mount("/", rocket::fs::FileServer::from("public"));

    rocket
}
