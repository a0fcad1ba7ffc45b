//! # Auth Module
//!
//! This module handles all authentication-related functionality including:
//! - Password hashing and verification
//! - JWT token issuing and validation
//! - The bearer-token authorization middleware
//! - The RequestContext extractor read by every handler

pub mod extractors;
pub mod middleware;
pub mod models;
pub mod password;
pub mod token;

#[cfg(test)]
mod tests;

pub use extractors::RequestContext;
pub use models::Claims;
pub use token::{JwtIssuer, SignedToken, TokenError, TokenIssuer};
