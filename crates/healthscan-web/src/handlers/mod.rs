//! HTTP handlers for all web routes.

pub mod layout;
pub mod predict;
pub mod form;
pub mod results;
pub mod health;
