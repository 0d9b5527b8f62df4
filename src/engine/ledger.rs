//! Scenario C goal ledger
//!
//! Maintains the running cumulative-withdrawal total across an unordered
//! list of life-goal events. Accumulation walks the goals in chronological
//! start-year order, but the list itself keeps its insertion order.

use crate::proposal::{Generation, GoalEvent, GOAL_PURPOSES};

/// Start year given to the first goal when the list is empty
const FIRST_GOAL_START_YEAR: u32 = 10;

/// Gap in policy years between a new goal and the previous goal's end
const NEW_GOAL_GAP_YEARS: u32 = 5;

/// Recompute every goal's cumulative withdrawal total
///
/// The accumulation pass visits goals sorted by ascending `policy_year_start`
/// (stable: equal start years keep their input order), adding
/// `amount * duration` to a running total and assigning it to the visited
/// goal. Output positions are untouched, only `cumulative` changes.
pub fn recalculate(goals: &mut [GoalEvent]) {
    let mut order: Vec<usize> = (0..goals.len()).collect();
    order.sort_by_key(|&i| goals[i].policy_year_start);

    let mut running_total: u64 = 0;
    for i in order {
        running_total += goals[i].total_withdrawal();
        goals[i].cumulative = running_total;
    }
}

/// Append a new goal with defaults chained from the last existing goal
///
/// Start and end both land `NEW_GOAL_GAP_YEARS` after the previous goal's
/// end, or at `FIRST_GOAL_START_YEAR` for an empty list. The ledger is
/// recalculated immediately.
pub fn add_goal(goals: &mut Vec<GoalEvent>) {
    let start = match goals.last() {
        Some(last) => last.policy_year_end + NEW_GOAL_GAP_YEARS,
        None => FIRST_GOAL_START_YEAR,
    };

    goals.push(GoalEvent {
        policy_year_start: start,
        policy_year_end: start,
        amount: 0,
        cumulative: 0,
        remaining_value: 0,
        purpose: GOAL_PURPOSES[0].to_string(),
        generation: Generation::Gen1,
    });

    recalculate(goals);
}

/// Remove the goal at `index` and recalculate the remaining ledger
///
/// An out-of-range index leaves the list unchanged.
pub fn remove_goal(goals: &mut Vec<GoalEvent>, index: usize) {
    if index >= goals.len() {
        log::debug!("remove_goal: index {} out of range ({} goals)", index, goals.len());
        return;
    }
    goals.remove(index);
    recalculate(goals);
}
