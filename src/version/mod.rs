//! Version layer: parsing, selection and release listing
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Registry  │────▶│   Semver    │────▶│  Selector   │
//! │  (fetch)    │     │  (parse)    │     │  (select)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │  Registries │
//! │  (github)   │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`registry`]: Registry trait for listing releases from remote sources
//! - [`registries`]: Concrete registry implementations
//! - [`semver`]: The `Version` value type and tag parsing
//! - [`selector`]: Newest stable release per minor line
//! - [`error`]: Error types for parsing and registry operations

pub mod error;
pub mod registries;
pub mod registry;
pub mod selector;
pub mod semver;
