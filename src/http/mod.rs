//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection (peer address captured as ConnectInfo)
//!     → server.rs (Axum setup, trace + timeout layers)
//!     → client_ip.rs (resolve caller address, attach ClientIp extension)
//!     → handlers (/ip, /health)
//! ```

pub mod client_ip;
pub mod server;

pub use client_ip::ClientIp;
pub use server::HttpServer;
