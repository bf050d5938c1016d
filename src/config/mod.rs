//! Configuration loading and validation.
//!
//! The tracker is configured through a JSON `config.json` file with sections
//! for the database connection, queue capacities, timer intervals, the HTTP
//! listener and announce policy. `Configuration::load_from_file` optionally
//! writes a default file when started with `--create-config`.

/// Configuration error enumeration.
pub mod enums;

/// Implementation blocks for configuration types.
pub mod impls;

/// Configuration data structures.
pub mod structs;

/// Unit tests for configuration handling.
pub mod tests;
