// Port Layer - Interfaces for external dependencies

pub mod content_provider;
pub mod job_store;
pub mod post_log;
pub mod publisher;
pub mod settings_store;
pub mod status_store;
pub mod time_provider;

// Re-exports
pub use content_provider::{ContentProvider, GeneratedPost};
pub use job_store::JobStore;
pub use post_log::PostLog;
pub use publisher::{PublishOutcome, Publisher};
pub use settings_store::SettingsStore;
pub use status_store::StatusStore;
pub use time_provider::{SystemTimeProvider, TimeProvider};
