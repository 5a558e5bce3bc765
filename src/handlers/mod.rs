//! HTTP handlers for resource CRUD and account endpoints.

pub mod entity;
pub mod pos;
