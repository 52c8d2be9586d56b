//! Search module entry.
//!
//! # Responsibility
//! - Expose keyword matching over article designations.
//! - Keep matching rules independent from SQL storage details.

pub mod keyword;
