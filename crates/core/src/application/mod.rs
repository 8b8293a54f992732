// Application Layer - Use Cases and Business Logic

pub mod engagement;
pub mod registry;
pub mod reporter;
pub mod runner;
pub mod schedule;
pub mod service;

// Re-exports
pub use registry::ActiveJobs;
pub use reporter::{MetricsSummary, PagedPosts, Reporter, StatusSummary};
pub use runner::JobRunner;
pub use service::BotService;
