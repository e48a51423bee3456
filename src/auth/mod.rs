pub mod token;

pub use token::{decode_claims, decode_identity, AccessClaims};
