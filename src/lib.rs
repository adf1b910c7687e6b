//! Atelier Projects - workspace project management and type resolution
//!
//! This crate talks to the workspace agent's project API and decides which
//! project type best describes a freshly imported or newly created project.
//!
//! # Modules
//!
//! - [`config`] — Strongly-typed configuration with TOML and environment variable support
//! - [`domain`] — Project and type-catalog models plus the type selection rules
//! - [`application`] — Project management and type resolution services
//! - [`infrastructure`] — Workspace agent HTTP client and session-scoped caches
//! - [`logging`] — Structured logging with tracing
//!
//! # Architecture
//!
//! The crate follows Domain-Driven Design principles:
//!
//! ```text
//! atelier-projects/
//! ├── domain/           # Pure business logic
//! │   ├── project/      # Project details, sources, attributes
//! │   └── typing/       # Type catalog, candidates, selection rules
//! ├── application/      # Project service and type resolution service
//! ├── infrastructure/   # External integrations
//! │   ├── api_clients/  # Workspace agent project API client
//! │   └── cache/        # Session-scoped project store
//! └── config/           # Configuration management
//! ```
//!
//! # Configuration
//!
//! Load configuration from files and environment:
//!
//! ```rust,ignore
//! use atelier_projects::Config;
//!
//! let config = Config::load()?;
//! ```
//!
//! Environment variables use the `ATELIER__` prefix with double underscore
//! separators:
//!
//! ```bash
//! ATELIER__AGENT__BASE_URL=http://localhost:8080/api
//! ATELIER__CACHE__TTL_SECONDS=3600
//! ```
//!
//! # Logging
//!
//! Initialize structured logging:
//!
//! ```rust,ignore
//! use atelier_projects::init_tracing;
//!
//! init_tracing(&config.logging)?;
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;

pub use config::Config;
pub use logging::init_tracing;
