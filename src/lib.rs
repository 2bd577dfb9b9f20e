//! `PersonaForge` - loader and validator for agent persona configuration files
//!
//! Agent runtimes describe a persona — voice, traits, example dialogue,
//! provider connections, and task weighting — as a single JSON document.
//! This library parses and validates such documents and exposes them as an
//! immutable [`config::AgentPersona`] value for the runtime to consume.

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
