//! Core plumbing for the BinaRig configurator.
//!
//! This crate provides the types every handler touches:
//! - `RequestContext` - method, path, query and headers in one place
//! - `RequestId` - correlation ID for log lines
//! - `StructuredLogger` - leveled, fielded logging to stderr

mod context;
mod logging;

pub use context::*;
pub use logging::*;
