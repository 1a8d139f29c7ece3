//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → client_ip.rs (attribute request to a caller address)
//!     → http middleware stores the result as a request extension
//!     → handlers, logging and rate limiting read it from there
//! ```
//!
//! # Design Decisions
//! - No trust in client input unless the header is explicitly trusted
//! - Resolution never fails; the socket peer is the last resort

pub mod client_ip;

pub use client_ip::{host_of, resolve_client_ip};
