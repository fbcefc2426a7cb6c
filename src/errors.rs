use crate::handlers::Response;
use derive_more::Display;
use ntex::web::{HttpRequest, HttpResponse, WebResponseError};

/// Errors raised while bootstrapping the store client. All of them are fatal at startup.
#[derive(Debug, Display)]
pub enum InitError {
    #[display("Missing {} in .env", _0.join(" and "))]
    MissingConfiguration(Vec<&'static str>),
    #[display("{_0} is set but is not valid unicode")]
    InvalidConfiguration(&'static str),
    #[display("Invalid store url `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[display("Redis client rejected the connection info: {_0}")]
    Client(redis::RedisError),
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InitError::Client(e) => Some(e),
            _ => None,
        }
    }
}

impl From<redis::RedisError> for InitError {
    fn from(e: redis::RedisError) -> Self {
        InitError::Client(e)
    }
}

#[derive(Debug, Display)]
pub enum AppError {
    #[display("Internal Server Error")]
    InternalServerError(String),
    #[display("Service Unavailable")]
    ServiceUnavailable,
}

impl std::error::Error for AppError {}

/// Ntex uses `ResponseError` for conversion of errors to a response
impl WebResponseError for AppError {
    fn error_response(&self, _: &HttpRequest) -> HttpResponse {
        match self {
            AppError::InternalServerError(ref message) => {
                HttpResponse::InternalServerError().json(&Response::<()> {
                    status: "failed".to_string(),
                    message: message.clone(),
                    count: None,
                    data: None,
                })
            }
            AppError::ServiceUnavailable => {
                HttpResponse::ServiceUnavailable().json(&Response::<()> {
                    status: "failed".to_string(),
                    message: "Store Unavailable".to_string(),
                    count: None,
                    data: None,
                })
            }
        }
    }
}

#[test]
fn test_missing_configuration_names_every_variable() {
    let err = InitError::MissingConfiguration(vec!["UPSTASH_REDIS_URL", "UPSTASH_REDIS_TOKEN"]);
    assert_eq!(
        err.to_string(),
        "Missing UPSTASH_REDIS_URL and UPSTASH_REDIS_TOKEN in .env"
    );

    let err = InitError::MissingConfiguration(vec!["UPSTASH_REDIS_TOKEN"]);
    assert_eq!(err.to_string(), "Missing UPSTASH_REDIS_TOKEN in .env");
}
