//! Bookshelf application library
//!
//! Holds the application modules so the binary and the integration tests
//! wire the same routes.

pub mod modules;
