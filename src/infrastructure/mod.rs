//! # Infrastructure Layer
//!
//! Host-facing adapters: configuration loading, tracing setup and the
//! system clock and entropy used in production wiring.

pub mod config;
pub mod system;
pub mod telemetry;

pub use config::{AppConfig, LogConfig, LogFormat};
pub use system::{SystemClock, ThreadRngEntropy};
pub use telemetry::init_tracing;
