use anyhow::Error;
use rocket::http::Status;
use rocket::response::Debug;
use rocket::Responder;
use rocket_dyn_templates::Template;

pub(crate) type HttpResult<T> = Result<T, HttpError>;

#[derive(Responder)]
pub(crate) enum HttpError {
    Error(Debug<Error>),
    Status(Status),
    /// A form page shown again with its validation errors.
    #[response(status = 422)]
    Invalid(Template),
}

impl From<Error> for HttpError {
    fn from(value: Error) -> Self {
        HttpError::Error(Debug(value))
    }
}

impl From<Status> for HttpError {
    fn from(value: Status) -> Self {
        HttpError::Status(value)
    }
}
