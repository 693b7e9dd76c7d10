pub mod blog;
pub mod store;
pub mod submission;
pub mod tool;
pub mod verify;

pub use store::ContentStore;
pub use tool::{CategorySummary, DirectoryStats, Tool, ToolQuery};
pub use verify::{OrderVerifier, VerificationResult};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("service misconfigured: {0}")]
    Config(String),
    #[error("upstream authentication failed: {0}")]
    UpstreamAuth(String),
    #[error("upstream request failed: {0}")]
    UpstreamFetch(String),
    #[error("content backend error: {0}")]
    Content(String),
    #[error("validation failed: {0}")]
    Validation(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
