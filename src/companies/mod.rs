//! # Companies Module
//!
//! Company records owned by authenticated users.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod service;
pub mod validators;


pub use routes::companies_routes;
