//! Social platform adapters: template content generation and the X
//! posting client.

pub mod content;
pub mod publisher;

pub use content::TemplateContentProvider;
pub use publisher::HttpPublisher;
