//! Proposal record structures matching the adviser input format

use serde::{Deserialize, Serialize};

/// Fixed options for the goal purpose selector, first entry is the
/// default for newly added goals
pub const GOAL_PURPOSES: [&str; 7] = [
    "大学教育基金 (University Education)",
    "外国升学基金 (Overseas Studies)",
    "结婚/创业金 (Marriage/Startup)",
    "退休基金 (Retirement Fund)",
    "传承予子女 (Gift to Descendants)",
    "家族遗产 (Compassionate Legacy)",
    "百年基业 (Centennial Legacy)",
];

/// The four fixed reporting checkpoints for scenarios A and B
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Horizon {
    Year10,
    Year20,
    Year30,
    Year40,
}

impl Horizon {
    /// All horizons in ascending order
    pub const ALL: [Horizon; 4] = [
        Horizon::Year10,
        Horizon::Year20,
        Horizon::Year30,
        Horizon::Year40,
    ];

    /// Policy year the checkpoint falls on
    pub fn years(&self) -> u32 {
        match self {
            Horizon::Year10 => 10,
            Horizon::Year20 => 20,
            Horizon::Year30 => 30,
            Horizon::Year40 => 40,
        }
    }
}

/// Client identity and entry age
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientData {
    pub name: String,
    /// Age at policy inception; attained age at a checkpoint is age + policy year
    pub age: u32,
}

/// Premium amount and payment schedule label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PremiumData {
    /// Total premium, whole currency units
    pub total: u64,
    /// Payment schedule label, e.g. "整付" or "5年"
    pub payment_type: String,
}

impl Default for PremiumData {
    fn default() -> Self {
        Self {
            total: 0,
            payment_type: "整付".to_string(),
        }
    }
}

/// Legacy feature flags, independent of each other
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PolicyLegacy {
    pub second_owner: bool,
    pub successor_insured: bool,
}

/// Directly entered surrender/death values at one scenario A checkpoint
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScenarioAValue {
    pub surrender: u64,
    pub death: u64,
}

/// Scenario A: capital accumulation table, all values entered by the adviser
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioAData {
    pub year10: ScenarioAValue,
    pub year20: ScenarioAValue,
    pub year30: ScenarioAValue,
    pub year40: ScenarioAValue,
}

impl ScenarioAData {
    pub fn get(&self, horizon: Horizon) -> &ScenarioAValue {
        match horizon {
            Horizon::Year10 => &self.year10,
            Horizon::Year20 => &self.year20,
            Horizon::Year30 => &self.year30,
            Horizon::Year40 => &self.year40,
        }
    }

    pub fn get_mut(&mut self, horizon: Horizon) -> &mut ScenarioAValue {
        match horizon {
            Horizon::Year10 => &mut self.year10,
            Horizon::Year20 => &mut self.year20,
            Horizon::Year30 => &mut self.year30,
            Horizon::Year40 => &mut self.year40,
        }
    }
}

/// One scenario B checkpoint: derived cumulative withdrawal plus the
/// independently entered remaining account value
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScenarioBValue {
    /// Cumulative withdrawal through this checkpoint, derived and read-only
    pub cumulative: u64,
    /// Account value remaining after withdrawals, entered
    pub remaining: u64,
}

/// Scenario B: passive income via a level annual withdrawal stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioBData {
    /// Level withdrawal taken each policy year
    pub annual_withdrawal: u64,
    /// First policy year a withdrawal is taken
    pub withdrawal_start_year: u32,
    pub year10: ScenarioBValue,
    pub year20: ScenarioBValue,
    pub year30: ScenarioBValue,
    pub year40: ScenarioBValue,
}

impl Default for ScenarioBData {
    fn default() -> Self {
        Self {
            annual_withdrawal: 0,
            withdrawal_start_year: 6,
            year10: ScenarioBValue::default(),
            year20: ScenarioBValue::default(),
            year30: ScenarioBValue::default(),
            year40: ScenarioBValue::default(),
        }
    }
}

impl ScenarioBData {
    pub fn get(&self, horizon: Horizon) -> &ScenarioBValue {
        match horizon {
            Horizon::Year10 => &self.year10,
            Horizon::Year20 => &self.year20,
            Horizon::Year30 => &self.year30,
            Horizon::Year40 => &self.year40,
        }
    }

    pub fn get_mut(&mut self, horizon: Horizon) -> &mut ScenarioBValue {
        match horizon {
            Horizon::Year10 => &mut self.year10,
            Horizon::Year20 => &mut self.year20,
            Horizon::Year30 => &mut self.year30,
            Horizon::Year40 => &mut self.year40,
        }
    }
}

/// Family generation a goal belongs to, descriptive only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Generation {
    #[default]
    #[serde(rename = "Gen 1")]
    Gen1,
    #[serde(rename = "Gen 2")]
    Gen2,
    #[serde(rename = "Gen 3")]
    Gen3,
}

impl Generation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Generation::Gen1 => "Gen 1",
            Generation::Gen2 => "Gen 2",
            Generation::Gen3 => "Gen 3",
        }
    }
}

/// One discrete future withdrawal need in scenario C
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalEvent {
    /// First policy year of the withdrawal range
    pub policy_year_start: u32,
    /// Last policy year of the withdrawal range; start <= end holds after
    /// every single-field edit (the mutator repairs the other endpoint)
    pub policy_year_end: u32,
    /// Annual withdrawal amount over the range
    pub amount: u64,
    /// Running total across all goals in chronological start-year order,
    /// derived and not independently settable
    #[serde(default)]
    pub cumulative: u64,
    /// Account value remaining after withdrawals, entered independently
    #[serde(default)]
    pub remaining_value: u64,
    pub purpose: String,
    #[serde(default)]
    pub generation: Generation,
}

impl GoalEvent {
    /// Number of policy years the withdrawal runs, at least one
    pub fn duration(&self) -> u32 {
        (self.policy_year_end.saturating_sub(self.policy_year_start) + 1).max(1)
    }

    /// Total withdrawn by this goal alone over its range
    pub fn total_withdrawal(&self) -> u64 {
        self.amount * self.duration() as u64
    }
}

/// Scenario C: life-goal withdrawal ledger
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioCData {
    pub goals: Vec<GoalEvent>,
}

/// A percentage rebate promotion
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PromoOption {
    pub enabled: bool,
    pub percent: f64,
}

/// Prepayment interest promotion with an offer deadline
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrepayOption {
    pub enabled: bool,
    pub rate: f64,
    /// ISO date string; may be empty or unparseable, renderers pass such
    /// values through unchanged
    pub deadline: String,
}

/// Promotional terms attached to the proposal
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromoData {
    pub lump_sum: PromoOption,
    pub five_year: PromoOption,
    pub prepay: PrepayOption,
}

/// Root aggregate for one proposal session
///
/// Mutated wholesale: every edit in [`crate::engine::edit`] clones the record
/// and returns a new value, so a consumer holding the current record never
/// observes a partial update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProposalRecord {
    pub client: ClientData,
    pub plan_name: String,
    pub premium: PremiumData,
    pub legacy: PolicyLegacy,
    pub scenario_a: ScenarioAData,
    pub scenario_b: ScenarioBData,
    pub scenario_c: ScenarioCData,
    pub promo: PromoData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizon_years() {
        let years: Vec<u32> = Horizon::ALL.iter().map(|h| h.years()).collect();
        assert_eq!(years, vec![10, 20, 30, 40]);
    }

    #[test]
    fn test_goal_duration_floors_at_one() {
        let goal = GoalEvent {
            policy_year_start: 10,
            policy_year_end: 10,
            amount: 5000,
            cumulative: 0,
            remaining_value: 0,
            purpose: GOAL_PURPOSES[0].to_string(),
            generation: Generation::Gen1,
        };
        assert_eq!(goal.duration(), 1);
        assert_eq!(goal.total_withdrawal(), 5000);
    }

    #[test]
    fn test_goal_duration_inclusive_span() {
        let goal = GoalEvent {
            policy_year_start: 5,
            policy_year_end: 7,
            amount: 2000,
            cumulative: 0,
            remaining_value: 0,
            purpose: GOAL_PURPOSES[0].to_string(),
            generation: Generation::Gen1,
        };
        assert_eq!(goal.duration(), 3);
        assert_eq!(goal.total_withdrawal(), 6000);
    }

    #[test]
    fn test_default_record() {
        let record = ProposalRecord::default();
        assert_eq!(record.scenario_b.withdrawal_start_year, 6);
        assert!(record.scenario_c.goals.is_empty());
        assert!(!record.promo.lump_sum.enabled);
    }

    #[test]
    fn test_generation_serde_labels() {
        let json = serde_json::to_string(&Generation::Gen2).unwrap();
        assert_eq!(json, "\"Gen 2\"");
        let back: Generation = serde_json::from_str("\"Gen 3\"").unwrap();
        assert_eq!(back, Generation::Gen3);
    }
}
