//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!
//! Consumers:
//!     → stdout (fmt layer), filtered by RUST_LOG or config
//! ```

pub mod logging;

pub use logging::init_logging;
