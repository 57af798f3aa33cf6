//! Token-overlap matchmaking.
//!
//! Builds one token profile per user from a memo and a task history, then
//! scores every pair of users with Jaccard similarity.

pub mod config;
pub mod error;
pub mod intelligence;
pub mod models;
pub mod services;
