//! Copy-on-write edit surface over the proposal record
//!
//! Every mutator clones the current record, applies one edit, and returns the
//! new value. The editing surface holds a single current record and replaces
//! it wholesale, so render targets never see a half-applied edit.

use super::{ledger, withdrawal};
use crate::proposal::{Generation, Horizon, ProposalRecord};

/// Scenario B inputs that drive the cumulative recomputation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalInput {
    AnnualWithdrawal(u64),
    StartYear(u32),
}

/// Goal edits that change the ledger arithmetic
///
/// Applying one of these always recalculates every goal's cumulative total.
/// Start/end edits repair the other endpoint first so `start <= end` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralGoalEdit {
    Amount(u64),
    PolicyYearStart(u32),
    PolicyYearEnd(u32),
}

/// Goal edits with no arithmetic consequence
///
/// These mutate the goal in place and deliberately skip recalculation; the
/// ledger totals are refreshed on the next structural edit.
#[derive(Debug, Clone, PartialEq)]
pub enum CosmeticGoalEdit {
    Purpose(String),
    Generation(Generation),
    RemainingValue(u64),
}

/// One field edit against the proposal record
#[derive(Debug, Clone, PartialEq)]
pub enum ProposalEdit {
    ClientName(String),
    ClientAge(u32),
    PlanName(String),
    PremiumTotal(u64),
    PaymentType(String),
    SecondOwner(bool),
    SuccessorInsured(bool),
    /// Directly entered scenario A cell
    ScenarioASurrender(Horizon, u64),
    ScenarioADeath(Horizon, u64),
    /// Changing either input recomputes all four scenario B cumulatives
    ScenarioBInput(WithdrawalInput),
    /// Entered remaining value at one scenario B horizon
    ScenarioBRemaining(Horizon, u64),
    AddGoal,
    RemoveGoal(usize),
    StructuralGoal(usize, StructuralGoalEdit),
    CosmeticGoal(usize, CosmeticGoalEdit),
    LumpSumEnabled(bool),
    LumpSumPercent(f64),
    FiveYearEnabled(bool),
    FiveYearPercent(f64),
    PrepayEnabled(bool),
    PrepayRate(f64),
    PrepayDeadline(String),
}

/// Apply one edit, returning the replacement record
///
/// Total over its input domain: goal indices out of range leave the record
/// unchanged rather than failing.
pub fn apply_edit(record: &ProposalRecord, edit: ProposalEdit) -> ProposalRecord {
    let mut next = record.clone();

    match edit {
        ProposalEdit::ClientName(name) => next.client.name = name,
        ProposalEdit::ClientAge(age) => next.client.age = age,
        ProposalEdit::PlanName(name) => next.plan_name = name,
        ProposalEdit::PremiumTotal(total) => next.premium.total = total,
        ProposalEdit::PaymentType(label) => next.premium.payment_type = label,
        ProposalEdit::SecondOwner(on) => next.legacy.second_owner = on,
        ProposalEdit::SuccessorInsured(on) => next.legacy.successor_insured = on,

        ProposalEdit::ScenarioASurrender(horizon, value) => {
            next.scenario_a.get_mut(horizon).surrender = value;
        }
        ProposalEdit::ScenarioADeath(horizon, value) => {
            next.scenario_a.get_mut(horizon).death = value;
        }

        ProposalEdit::ScenarioBInput(input) => {
            match input {
                WithdrawalInput::AnnualWithdrawal(amount) => {
                    next.scenario_b.annual_withdrawal = amount;
                }
                WithdrawalInput::StartYear(year) => {
                    next.scenario_b.withdrawal_start_year = year;
                }
            }
            withdrawal::apply(&mut next.scenario_b);
        }
        ProposalEdit::ScenarioBRemaining(horizon, value) => {
            next.scenario_b.get_mut(horizon).remaining = value;
        }

        ProposalEdit::AddGoal => ledger::add_goal(&mut next.scenario_c.goals),
        ProposalEdit::RemoveGoal(index) => ledger::remove_goal(&mut next.scenario_c.goals, index),
        ProposalEdit::StructuralGoal(index, goal_edit) => {
            apply_structural_goal_edit(&mut next, index, goal_edit);
        }
        ProposalEdit::CosmeticGoal(index, goal_edit) => {
            apply_cosmetic_goal_edit(&mut next, index, goal_edit);
        }

        ProposalEdit::LumpSumEnabled(on) => next.promo.lump_sum.enabled = on,
        ProposalEdit::LumpSumPercent(pct) => next.promo.lump_sum.percent = pct,
        ProposalEdit::FiveYearEnabled(on) => next.promo.five_year.enabled = on,
        ProposalEdit::FiveYearPercent(pct) => next.promo.five_year.percent = pct,
        ProposalEdit::PrepayEnabled(on) => next.promo.prepay.enabled = on,
        ProposalEdit::PrepayRate(rate) => next.promo.prepay.rate = rate,
        ProposalEdit::PrepayDeadline(date) => next.promo.prepay.deadline = date,
    }

    next
}

fn apply_structural_goal_edit(
    record: &mut ProposalRecord,
    index: usize,
    edit: StructuralGoalEdit,
) {
    let goals = &mut record.scenario_c.goals;
    let Some(goal) = goals.get_mut(index) else {
        log::debug!("structural goal edit: index {} out of range", index);
        return;
    };

    match edit {
        StructuralGoalEdit::Amount(amount) => goal.amount = amount,
        StructuralGoalEdit::PolicyYearStart(start) => {
            goal.policy_year_start = start;
            // Raising the start past the end drags the end along
            if goal.policy_year_end < start {
                goal.policy_year_end = start;
            }
        }
        StructuralGoalEdit::PolicyYearEnd(end) => {
            goal.policy_year_end = end;
            // Lowering the end below the start drags the start down
            if goal.policy_year_start > end {
                goal.policy_year_start = end;
            }
        }
    }

    ledger::recalculate(goals);
}

fn apply_cosmetic_goal_edit(record: &mut ProposalRecord, index: usize, edit: CosmeticGoalEdit) {
    let Some(goal) = record.scenario_c.goals.get_mut(index) else {
        log::debug!("cosmetic goal edit: index {} out of range", index);
        return;
    };

    match edit {
        CosmeticGoalEdit::Purpose(purpose) => goal.purpose = purpose,
        CosmeticGoalEdit::Generation(generation) => goal.generation = generation,
        CosmeticGoalEdit::RemainingValue(value) => goal.remaining_value = value,
    }
    // No recalculation: these fields carry no arithmetic weight
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_goals() -> ProposalRecord {
        let mut record = ProposalRecord::default();
        record = apply_edit(&record, ProposalEdit::AddGoal);
        record = apply_edit(
            &record,
            ProposalEdit::StructuralGoal(0, StructuralGoalEdit::Amount(5000)),
        );
        record
    }

    #[test]
    fn test_edit_returns_new_record() {
        let record = ProposalRecord::default();
        let next = apply_edit(&record, ProposalEdit::ClientAge(40));
        assert_eq!(record.client.age, 0);
        assert_eq!(next.client.age, 40);
    }

    #[test]
    fn test_scenario_b_input_recomputes_all_horizons() {
        let record = ProposalRecord::default();
        let record = apply_edit(
            &record,
            ProposalEdit::ScenarioBInput(WithdrawalInput::AnnualWithdrawal(1000)),
        );
        let record = apply_edit(
            &record,
            ProposalEdit::ScenarioBInput(WithdrawalInput::StartYear(6)),
        );

        assert_eq!(record.scenario_b.year10.cumulative, 5000);
        assert_eq!(record.scenario_b.year20.cumulative, 15000);
        assert_eq!(record.scenario_b.year30.cumulative, 25000);
        assert_eq!(record.scenario_b.year40.cumulative, 35000);
    }

    #[test]
    fn test_scenario_b_remaining_does_not_touch_cumulative() {
        let record = ProposalRecord::default();
        let record = apply_edit(
            &record,
            ProposalEdit::ScenarioBInput(WithdrawalInput::AnnualWithdrawal(1000)),
        );
        let before = record.scenario_b.year20.cumulative;
        let record = apply_edit(
            &record,
            ProposalEdit::ScenarioBRemaining(Horizon::Year20, 250_000),
        );
        assert_eq!(record.scenario_b.year20.cumulative, before);
        assert_eq!(record.scenario_b.year20.remaining, 250_000);
    }

    #[test]
    fn test_range_repair_start_drags_end_up() {
        let record = record_with_goals();
        // Default goal sits at 10..=10; push end to 15 then start to 20
        let record = apply_edit(
            &record,
            ProposalEdit::StructuralGoal(0, StructuralGoalEdit::PolicyYearEnd(15)),
        );
        let record = apply_edit(
            &record,
            ProposalEdit::StructuralGoal(0, StructuralGoalEdit::PolicyYearStart(20)),
        );
        let goal = &record.scenario_c.goals[0];
        assert_eq!(goal.policy_year_start, 20);
        assert_eq!(goal.policy_year_end, 20);
    }

    #[test]
    fn test_range_repair_end_drags_start_down() {
        let record = record_with_goals();
        let record = apply_edit(
            &record,
            ProposalEdit::StructuralGoal(0, StructuralGoalEdit::PolicyYearStart(12)),
        );
        let record = apply_edit(
            &record,
            ProposalEdit::StructuralGoal(0, StructuralGoalEdit::PolicyYearEnd(8)),
        );
        let goal = &record.scenario_c.goals[0];
        assert_eq!(goal.policy_year_start, 8);
        assert_eq!(goal.policy_year_end, 8);
    }

    #[test]
    fn test_structural_edit_recalculates_ledger() {
        let record = record_with_goals();
        assert_eq!(record.scenario_c.goals[0].cumulative, 5000);

        let record = apply_edit(
            &record,
            ProposalEdit::StructuralGoal(0, StructuralGoalEdit::PolicyYearEnd(12)),
        );
        // Duration grew to 3 years
        assert_eq!(record.scenario_c.goals[0].cumulative, 15000);
    }

    #[test]
    fn test_cosmetic_edit_skips_recalculation() {
        let mut record = record_with_goals();
        // Leave a stale cumulative behind on purpose
        record.scenario_c.goals[0].cumulative = 999;

        let record = apply_edit(
            &record,
            ProposalEdit::CosmeticGoal(0, CosmeticGoalEdit::RemainingValue(80_000)),
        );
        assert_eq!(record.scenario_c.goals[0].remaining_value, 80_000);
        assert_eq!(record.scenario_c.goals[0].cumulative, 999);

        let record = apply_edit(
            &record,
            ProposalEdit::CosmeticGoal(0, CosmeticGoalEdit::Generation(Generation::Gen3)),
        );
        assert_eq!(record.scenario_c.goals[0].generation, Generation::Gen3);
        assert_eq!(record.scenario_c.goals[0].cumulative, 999);
    }

    #[test]
    fn test_goal_index_out_of_range_is_noop() {
        let record = record_with_goals();
        let next = apply_edit(
            &record,
            ProposalEdit::StructuralGoal(9, StructuralGoalEdit::Amount(1)),
        );
        assert_eq!(next.scenario_c.goals, record.scenario_c.goals);

        let next = apply_edit(&record, ProposalEdit::RemoveGoal(9));
        assert_eq!(next.scenario_c.goals.len(), 1);
    }

    #[test]
    fn test_end_to_end_two_goal_scenario() {
        let record = ProposalRecord::default();
        let record = apply_edit(&record, ProposalEdit::ClientAge(40));

        // First goal: single year 10 at 5000
        let record = apply_edit(&record, ProposalEdit::AddGoal);
        let record = apply_edit(
            &record,
            ProposalEdit::StructuralGoal(0, StructuralGoalEdit::Amount(5000)),
        );

        // Second goal: years 5-7 at 2000, inserted after but chronologically first
        let record = apply_edit(&record, ProposalEdit::AddGoal);
        let record = apply_edit(
            &record,
            ProposalEdit::StructuralGoal(1, StructuralGoalEdit::PolicyYearStart(5)),
        );
        let record = apply_edit(
            &record,
            ProposalEdit::StructuralGoal(1, StructuralGoalEdit::PolicyYearEnd(7)),
        );
        let record = apply_edit(
            &record,
            ProposalEdit::StructuralGoal(1, StructuralGoalEdit::Amount(2000)),
        );

        let goals = &record.scenario_c.goals;
        // Insertion order preserved
        assert_eq!(goals[0].policy_year_start, 10);
        assert_eq!(goals[1].policy_year_start, 5);
        // Chronological accumulation: 2000*3 = 6000, then +5000
        assert_eq!(goals[1].cumulative, 6000);
        assert_eq!(goals[0].cumulative, 11000);
        // Attained ages at each goal's start
        assert_eq!(crate::format::age_at(record.client.age, goals[0].policy_year_start), 50);
        assert_eq!(crate::format::age_at(record.client.age, goals[1].policy_year_start), 45);
    }
}
