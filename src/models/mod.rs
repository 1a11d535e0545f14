//! Core data models for cpam-analytics
//!
//! This module contains the record types for the two analysis datasets
//! (health spending by category, medical acts by specialty) plus the static
//! portfolio project list, together with the fixed datasets themselves.

pub mod acts;
pub mod project;
pub mod spending;

pub use acts::{acts_dataset, ActRecord};
pub use project::{project_ideas, ProjectIdea};
pub use spending::{spending_dataset, SpendingRecord};
