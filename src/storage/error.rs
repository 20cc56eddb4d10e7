use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage connection unavailable: {0}")]
    Connection(#[source] rusqlite::Error),
    #[error("required field `{field}` is missing")]
    Validation { field: &'static str },
    #[error("storage query failed: {0}")]
    Query(#[from] rusqlite::Error),
}

/// Maps a `NOT NULL` violation reported by SQLite to a validation error.
/// SQLite phrases it as `NOT NULL constraint failed: cheeses.<column>`.
pub(crate) fn classify_write_error(err: rusqlite::Error) -> StoreError {
    if let rusqlite::Error::SqliteFailure(ffi, Some(msg)) = &err {
        if ffi.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_NOTNULL {
            let column = msg.rsplit('.').next().unwrap_or_default();
            return StoreError::Validation {
                field: column_to_field(column),
            };
        }
    }
    StoreError::Query(err)
}

/// Sorts failures of schema statements: a connection that cannot reach its
/// database file is `Connection`, anything else stays `Query`.
pub(crate) fn classify_schema_error(err: rusqlite::Error) -> StoreError {
    use rusqlite::ErrorCode;

    match err.sqlite_error_code() {
        Some(
            ErrorCode::CannotOpen
            | ErrorCode::NotADatabase
            | ErrorCode::DatabaseCorrupt
            | ErrorCode::SystemIoFailure
            | ErrorCode::PermissionDenied,
        ) => StoreError::Connection(err),
        _ => StoreError::Query(err),
    }
}

fn column_to_field(column: &str) -> &'static str {
    match column {
        "name" => "name",
        "origin" => "origin",
        "price" => "price",
        "image_url" => "imageUrl",
        "description" => "description",
        "category" => "category",
        _ => "unknown",
    }
}
