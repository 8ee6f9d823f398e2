mod config;
pub(crate) use config::*;
mod secret_key;
pub(crate) use secret_key::*;
