//! # Users Module
//!
//! Registration and login: the only unauthenticated surface of the API.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod service;
pub mod validators;


pub use routes::users_routes;
