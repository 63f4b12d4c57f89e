//! HTTP route handlers.

pub mod dashboard;
pub mod flow;
pub mod health;
pub mod login;
pub mod logs;
