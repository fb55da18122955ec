/// Controller-facing error taxonomy.
///
/// Every backend-facing operation fails independently: a failure never rolls
/// back or retries, never escapes the controller boundary as a panic, and
/// never leaves the collection reflecting a partially-applied operation. The
/// transport kind and HTTP status stay opaque past this point; the message
/// string carries them for the diagnostic channel.
#[derive(Debug, thiserror::Error)]
pub enum CrudError {
    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    #[error("Submit failed: {0}")]
    SubmitFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Entity not found: {kind} with id {id}")]
    NotFound { kind: String, id: String },

    #[error("Invalid id: delete requires a non-empty id")]
    InvalidId,
}

pub type CrudResult<T> = std::result::Result<T, CrudError>;
