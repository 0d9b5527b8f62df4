//! Load and save proposal records as JSON

use super::ProposalRecord;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a proposal record from a JSON file
pub fn load_proposal(path: &Path) -> Result<ProposalRecord> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Unable to read proposal file {}", path.display()))?;
    let record: ProposalRecord = serde_json::from_str(&text)
        .with_context(|| format!("Invalid proposal JSON in {}", path.display()))?;
    log::debug!(
        "Loaded proposal for client '{}' with {} goals",
        record.client.name,
        record.scenario_c.goals.len()
    );
    Ok(record)
}

/// Save a proposal record to a JSON file, pretty-printed
pub fn save_proposal(record: &ProposalRecord, path: &Path) -> Result<()> {
    let text = serde_json::to_string_pretty(record).context("Unable to serialize proposal")?;
    fs::write(path, text)
        .with_context(|| format!("Unable to write proposal file {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proposal::{Generation, GoalEvent, GOAL_PURPOSES};

    #[test]
    fn test_json_round_trip() {
        let mut record = ProposalRecord::default();
        record.client.name = "Kelly".to_string();
        record.client.age = 40;
        record.premium.total = 1_000_000;
        record.scenario_c.goals.push(GoalEvent {
            policy_year_start: 10,
            policy_year_end: 12,
            amount: 5000,
            cumulative: 15000,
            remaining_value: 900_000,
            purpose: GOAL_PURPOSES[3].to_string(),
            generation: Generation::Gen2,
        });

        let json = serde_json::to_string(&record).unwrap();
        let back: ProposalRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(back.client.name, "Kelly");
        assert_eq!(back.scenario_c.goals.len(), 1);
        assert_eq!(back.scenario_c.goals[0].cumulative, 15000);
        assert_eq!(back.scenario_c.goals[0].generation, Generation::Gen2);
    }

    #[test]
    fn test_missing_optional_goal_fields_default() {
        // Records written by older sessions may omit derived fields
        let json = r#"{
            "policy_year_start": 5,
            "policy_year_end": 7,
            "amount": 2000,
            "purpose": "退休基金 (Retirement Fund)"
        }"#;
        let goal: GoalEvent = serde_json::from_str(json).unwrap();
        assert_eq!(goal.cumulative, 0);
        assert_eq!(goal.remaining_value, 0);
        assert_eq!(goal.generation, Generation::Gen1);
    }
}
