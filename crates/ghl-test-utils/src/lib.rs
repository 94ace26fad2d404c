//! Shared test utilities for the ghl-mcp workspace.
//!
//! This crate provides standardised catalog fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`registrars`]: registrars that declare dummy tools, or fail
//! - [`catalog`]: [`TestCatalog`] wrapper with visibility assertions

pub mod catalog;
pub mod registrars;

pub use catalog::TestCatalog;
pub use registrars::{alpha_beta_entries, category, dummy_registrar, failing_registrar};
