//! Bearer token signing and verification

pub mod token;

pub use token::{Claims, TokenService};
