//! Interaction engines for a matching / friends / chat app.
//!
//! The host UI renders state and dispatches intents; engines answer with
//! effects (navigate, animate, call a service) and never schedule work
//! themselves.

pub mod config;
pub mod logging;
pub mod profile;
pub mod route;
pub mod services;
pub mod ui;
