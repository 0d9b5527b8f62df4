//! Proposal System - derived-value computation engine for private-wealth proposals
//!
//! This library provides:
//! - A copy-on-write proposal record with client, premium, scenario, and promo data
//! - Scenario B withdrawal projections at fixed 10/20/30/40-year horizons
//! - Scenario C life-goal ledger with chronological running totals
//! - Shared derived-value and formatting functions for all render targets
//! - LaTeX report export and a narrative generation client

pub mod engine;
pub mod format;
pub mod narrative;
pub mod proposal;
pub mod render;

// Re-export commonly used types
pub use engine::{apply_edit, ProposalEdit};
pub use narrative::{NarrativeClient, NarrativeError};
pub use proposal::{GoalEvent, Horizon, ProposalRecord};
pub use render::{Language, Localizer};
