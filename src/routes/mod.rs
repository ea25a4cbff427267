//! HTTP route handlers

pub mod budget;
