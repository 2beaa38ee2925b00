//! Data and workflow core for a neighbourhood mutual-aid marketplace.
//!
//! Neighbours register an account, publish listings for services or
//! equipment, browse what is on offer nearby and send booking requests to
//! each other. This crate owns the relational schema, the credential
//! handling, the request lifecycle and the query contracts behind search;
//! the presentation layer consuming it is responsible for input
//! pre-validation, session tracking and rendering.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;

pub use error::CoreError;
