//! HTTP request handlers, organized by domain.

pub mod audit;
pub mod auth;
pub mod document;
pub mod health;
pub mod message;
pub mod security;
pub mod ticket;
