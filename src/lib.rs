//! `Authorization: ApiKey <token>` extraction and the small axum service around it.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
