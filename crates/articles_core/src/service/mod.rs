//! Core use-case services.
//!
//! # Responsibility
//! - Expose the article operations by use-case name.
//! - Keep front ends decoupled from storage details.

pub mod article_service;
