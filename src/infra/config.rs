use super::SecretKey;
use anyhow::{Context as _, Result};
use rand::rng;
use rocket::figment::providers::{Env, Format as _, Toml};
use rocket::figment::{Figment, Profile};
use rocket::Config;
use std::path::PathBuf;

/// The application configuration with the secret key
/// read from (or generated into) `secret_keys_path`.
pub(crate) fn figment() -> Result<Figment> {
    let figment = default_figment();
    let secret_keys_path: PathBuf = figment
        .extract_inner("secret_keys_path")
        .context("secret_keys_path is not configured")?;
    let key = SecretKey::read_or_generate(&secret_keys_path, &mut rng())?;
    Ok(figment.merge((Config::SECRET_KEY, key.0)))
}

/// Adapted from [`Config::figment`] but with the
/// ability to have two rocket config files:
/// `Rocket.default.toml` ships with the application,
/// `Rocket.toml` holds the local overrides.
pub(crate) fn default_figment() -> Figment {
    Figment::from(Config::default())
        .merge(Toml::file(Env::var_or("ROCKET_DEFAULT_CONFIG", "Rocket.default.toml")).nested())
        .merge(Toml::file(Env::var_or("ROCKET_CONFIG", "Rocket.toml")).nested())
        .merge(Env::prefixed("ROCKET_").ignore(&["PROFILE"]).global())
        .select(Profile::from_env_or(
            "ROCKET_PROFILE",
            Config::DEFAULT_PROFILE,
        ))
}
