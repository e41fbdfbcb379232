//! Authentication state.
//!
//! This module provides the token store: persistence of the bearer token
//! and everything derived from its claims.

mod token_store;

pub use token_store::TokenStore;
