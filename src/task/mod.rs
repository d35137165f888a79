//! Task list management.
//!
//! Tasks are created from validated drafts, kept in a collection sorted by a
//! [`domain::SortConfig`], filtered by title and removed only after the user
//! confirms. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
