//! Subcommand implementations.

/// Engine listing command handler.
pub mod engines;

/// Listening session command handler.
pub mod listen;
