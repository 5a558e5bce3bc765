//! Typed errors, store-error classification and envelope mapping.

use crate::config::ResourceDef;
use crate::response::Envelope;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing reference: {kind} '{id}'")]
    MissingReference { kind: &'static str, id: String },
    #[error("invalid primary key: table {table} column {column}")]
    InvalidPrimaryKey { table: String, column: String },
    #[error("duplicate route: {0}")]
    DuplicatePath(String),
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
    #[error("environment: {0}")]
    Env(String),
    #[error("validation: {0}")]
    Validation(String),
}

/// Category of a store failure, as seen by clients.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    DuplicateKey,
    Internal,
}

const PG_UNIQUE_VIOLATION: &str = "23505";
const MYSQL_DUP_ENTRY: &str = "1062";

/// Map a store error to the client-facing taxonomy. Validation never originates here.
pub fn classify(err: &sqlx::Error) -> ErrorKind {
    match err {
        sqlx::Error::RowNotFound => ErrorKind::NotFound,
        sqlx::Error::Database(db) => {
            let code = db.code();
            let code = code.as_deref();
            if db.is_unique_violation()
                || code == Some(PG_UNIQUE_VIOLATION)
                || code == Some(MYSQL_DUP_ENTRY)
                || code == Some("ER_DUP_ENTRY")
            {
                ErrorKind::DuplicateKey
            } else {
                ErrorKind::Internal
            }
        }
        _ => ErrorKind::Internal,
    }
}

pub const INTERNAL_MESSAGE: &str = "Internal server error.";

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Duplicate(String),
    #[error("{0}")]
    Internal(String),
    /// Request could not be read as JSON; rendered with its own status.
    #[error("{message}")]
    Transport { status: StatusCode, message: String },
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(_) | AppError::Transport { .. } => ErrorKind::Validation,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Duplicate(_) => ErrorKind::DuplicateKey,
            AppError::Db(e) => classify(e),
            AppError::Config(_) | AppError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Translate a store failure into the resource's wording.
    pub fn from_store(err: sqlx::Error, def: &ResourceDef) -> Self {
        tracing::error!(resource = %def.route_key(), error = %err, "store error");
        match classify(&err) {
            ErrorKind::DuplicateKey => AppError::Duplicate(def.messages.duplicate.to_string()),
            ErrorKind::NotFound => AppError::NotFound(def.messages.not_found.to_string()),
            ErrorKind::Validation | ErrorKind::Internal => {
                if def.sensitive {
                    AppError::Internal(INTERNAL_MESSAGE.to_string())
                } else {
                    AppError::Internal(engine_message(&err))
                }
            }
        }
    }
}

/// The database's own text, without sqlx's "error returned from database:" prefix.
fn engine_message(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db) => db.message().to_string(),
        other => other.to_string(),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Transport { status, message } => (status, message),
            AppError::Config(e) => {
                tracing::error!(error = %e, "configuration error");
                (StatusCode::OK, INTERNAL_MESSAGE.to_string())
            }
            AppError::Db(e) => {
                tracing::error!(error = %e, "unclassified store error");
                (StatusCode::OK, INTERNAL_MESSAGE.to_string())
            }
            other => (StatusCode::OK, other.to_string()),
        };
        (status, Envelope::<()>::fail(message)).into_response()
    }
}
