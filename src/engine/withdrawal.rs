//! Scenario B withdrawal projector
//!
//! Models an unbroken level withdrawal stream starting at a given policy year
//! and reports the cumulative amount taken through each fixed horizon.

use crate::proposal::{Horizon, ScenarioBData};

/// Cumulative withdrawals at each fixed horizon for one input pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalProjection {
    pub year10: u64,
    pub year20: u64,
    pub year30: u64,
    pub year40: u64,
}

impl WithdrawalProjection {
    pub fn get(&self, horizon: Horizon) -> u64 {
        match horizon {
            Horizon::Year10 => self.year10,
            Horizon::Year20 => self.year20,
            Horizon::Year30 => self.year30,
            Horizon::Year40 => self.year40,
        }
    }
}

/// Project cumulative withdrawals through each horizon
///
/// A stream starting in year `start_year` counted at horizon `h` spans years
/// `start_year..=h`, so the horizon year itself is paid: a withdrawal
/// starting in year 6 has made 5 payments by year 10. Horizons before the
/// start year have taken nothing.
pub fn project(annual_withdrawal: u64, start_year: u32) -> WithdrawalProjection {
    let at = |horizon: Horizon| {
        let h = horizon.years();
        if h < start_year {
            0
        } else {
            annual_withdrawal * (h - start_year + 1) as u64
        }
    };

    WithdrawalProjection {
        year10: at(Horizon::Year10),
        year20: at(Horizon::Year20),
        year30: at(Horizon::Year30),
        year40: at(Horizon::Year40),
    }
}

/// Write the projection for the scenario's current inputs into all four
/// horizon rows at once
///
/// Partial updates are a correctness violation: the four cumulatives always
/// reflect the same (annual, start year) pair. The entered `remaining`
/// values are never touched here.
pub fn apply(scenario: &mut ScenarioBData) {
    let projection = project(scenario.annual_withdrawal, scenario.withdrawal_start_year);
    for horizon in Horizon::ALL {
        scenario.get_mut(horizon).cumulative = projection.get(horizon);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_from_year_six() {
        let p = project(1000, 6);
        assert_eq!(p.year10, 5000);
        assert_eq!(p.year20, 15000);
        assert_eq!(p.year30, 25000);
        assert_eq!(p.year40, 35000);
    }

    #[test]
    fn test_start_after_horizon_is_zero() {
        let p = project(1000, 25);
        assert_eq!(p.year10, 0);
        assert_eq!(p.year20, 0);
        assert_eq!(p.year30, 6000);
        assert_eq!(p.year40, 16000);
    }

    #[test]
    fn test_start_on_horizon_counts_one_payment() {
        let p = project(750, 10);
        assert_eq!(p.year10, 750);
        assert_eq!(p.year20, 750 * 11);
    }

    #[test]
    fn test_zero_annual_withdrawal() {
        let p = project(0, 1);
        assert_eq!(p.year40, 0);
    }

    #[test]
    fn test_apply_updates_all_horizons_and_keeps_remaining() {
        let mut scenario = ScenarioBData {
            annual_withdrawal: 2000,
            withdrawal_start_year: 11,
            ..Default::default()
        };
        scenario.year10.remaining = 500_000;
        scenario.year40.remaining = 100_000;

        apply(&mut scenario);

        assert_eq!(scenario.year10.cumulative, 0);
        assert_eq!(scenario.year20.cumulative, 20000);
        assert_eq!(scenario.year30.cumulative, 40000);
        assert_eq!(scenario.year40.cumulative, 60000);
        // Entered values untouched
        assert_eq!(scenario.year10.remaining, 500_000);
        assert_eq!(scenario.year40.remaining, 100_000);
    }
}
