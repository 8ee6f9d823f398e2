mod authentication;
pub(crate) use authentication::*;
mod authorization;
pub(crate) use authorization::*;
