// Domain Layer - Pure business entities

pub mod error;
pub mod job;
pub mod post;
pub mod settings;
pub mod status;

// Re-exports
pub use error::DomainError;
pub use job::{Job, JobId, JobKind, JobSettings, JobStats, JobStatus, PostingHours, StatsEvent};
pub use post::PostRecord;
pub use settings::{BotSettings, ContentTypes};
pub use status::PersistedStatus;
