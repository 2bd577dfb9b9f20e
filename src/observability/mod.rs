//! Observability for `PersonaForge`
//!
//! Structured logging via `tracing`.

pub mod logging;

pub use logging::{LogFormat, init_logging};
