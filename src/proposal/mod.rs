//! Proposal data structures and JSON loading

mod data;
pub mod loader;

pub use data::{
    ClientData, Generation, GoalEvent, Horizon, PolicyLegacy, PremiumData, PrepayOption,
    PromoData, PromoOption, ProposalRecord, ScenarioAData, ScenarioAValue, ScenarioBData,
    ScenarioBValue, ScenarioCData, GOAL_PURPOSES,
};
pub use loader::{load_proposal, save_proposal};
