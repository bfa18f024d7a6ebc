//! Core use-case services.
//!
//! # Responsibility
//! - Resolve which reunions a staff member may view.
//! - Narrow and summarize already-resolved accessible sets.
//! - Keep HTTP/UI layers decoupled from storage details.

pub mod access_service;
pub mod filter;
pub mod stats;
