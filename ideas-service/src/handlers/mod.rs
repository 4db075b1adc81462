//! HTTP handlers for the ideas service.

pub mod health;
pub mod ideas;
