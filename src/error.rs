use std::error::Error as _;
use thiserror::Error;
use tracing::error;
use validify::ValidationErrors;

#[cfg(feature = "http")]
pub mod http;

#[derive(Debug, Error)]
pub enum RosterErr {
    #[error("Does not exist; {0}")]
    DoesNotExist(String),

    #[error("Entity in use; {0}")]
    InUse(String),

    #[error("Invalid reference; {0}")]
    InvalidReference(String),

    #[error("Invalid file; {0}")]
    InvalidFile(String),

    #[error("Invalid path; {0}")]
    InvalidPath(String),

    #[error("Password hash; {0}")]
    PasswordHash(String),

    #[error("IO; {0}")]
    IO(#[from] std::io::Error),

    #[error("SQL; {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Migration; {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("JSON error; {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("Validation; {0}")]
    Validation(#[from] ValidationErrors),

    #[cfg(feature = "http")]
    #[error("Multipart; {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),
}

#[derive(Debug, Error)]
#[error("{error}")]
pub struct RosterError {
    file: &'static str,
    line: u32,
    column: u32,
    pub error: RosterErr,
}

impl RosterError {
    pub fn new(file: &'static str, line: u32, column: u32, error: RosterErr) -> RosterError {
        RosterError {
            file,
            line,
            column,
            error,
        }
    }

    pub fn location(&self) -> String {
        format!("{}:{}:{}", self.file, self.line, self.column)
    }

    pub fn print(&self) {
        let location = self.location();

        error!("{location} | {self}");

        if self.error.source().is_some() {
            error!("Causes:");
        }

        let mut src = self.error.source();
        while let Some(source) = src {
            error!(" - {source}");
            src = source.source();
        }
    }
}

/// Construct an `Err(RosterError)` of the given [RosterErr] variant at the call site.
#[macro_export]
macro_rules! err {
    ($ty:ident $(, $l:literal $(,)? $($args:expr),* )?) => {
        Err($crate::error::RosterError::new(
            file!(),
            line!(),
            column!(),
            $crate::error::RosterErr::$ty $( (format!($l, $( $args, )*)) )?,
        ))
    };
}

/// Unwrap the result or return early with the error converted to a [RosterError]
/// carrying the call site location.
#[macro_export]
macro_rules! map_err {
    ($ex:expr) => {
        $ex.map_err(|e| $crate::error::RosterError::new(file!(), line!(), column!(), e.into()))?
    };
}
