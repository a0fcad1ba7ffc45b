//! # Jobs Module
//!
//! Job postings attached to companies.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod service;


pub use routes::jobs_routes;
