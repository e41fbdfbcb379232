//! Authentication domain types

mod claims;
mod role;

pub use claims::{ClaimsDecode, InvalidToken, TokenClaims, decode_claims};
pub use role::UserRole;
