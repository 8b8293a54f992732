//! JSON-RPC API layer
//!
//! Exposes job lifecycle, reporting, settings, and content methods over
//! JSON-RPC 2.0 on localhost TCP.

pub mod error;
pub mod handler;
pub mod server;
pub mod types;

pub use server::{RpcServer, RpcServerConfig};
