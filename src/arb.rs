//! Two-leg arbitrage staking: splits a stake across opposing prices so that the
//! payout is identical on both legs, and reports the guaranteed economics.

use serde::Serialize;
use thiserror::Error;

use crate::odds::Odds;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArbError {
    #[error("stake must be positive, got {0}")]
    NonPositiveStake(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArbLeg {
    pub odds: f64,
    pub implied_percent: f64,
    pub stake: f64,
    pub payout: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArbOutcome {
    pub legs: [ArbLeg; 2],
    pub total_outlay: f64,
    pub guaranteed_return: f64,
    pub profit: f64,
    pub roi_percent: f64,
    pub is_arb: bool,
}

/// Sizes the opposing stake off `stake_a` and derives the guaranteed return. An
/// opportunity exists when the implied probabilities book under 100%; inputs that
/// don't arb still produce a full outcome with `is_arb` unset and a negative profit.
pub fn calculate(odds_a: Odds, odds_b: Odds, stake_a: f64) -> Result<ArbOutcome, ArbError> {
    if !stake_a.is_finite() || stake_a <= 0.0 {
        return Err(ArbError::NonPositiveStake(stake_a));
    }

    let is_arb = odds_a.implied_prob() + odds_b.implied_prob() < 1.0;

    // equalizes stake * odds across the two legs
    let stake_b = stake_a * odds_a.price() / odds_b.price();
    let payout_a = stake_a * odds_a.price();
    let payout_b = stake_b * odds_b.price();

    let total_outlay = stake_a + stake_b;
    let guaranteed_return = f64::min(payout_a, payout_b);
    let profit = guaranteed_return - total_outlay;
    let roi_percent = profit / total_outlay * 100.0;

    Ok(ArbOutcome {
        legs: [
            ArbLeg {
                odds: odds_a.price(),
                implied_percent: odds_a.implied_percent(),
                stake: stake_a,
                payout: payout_a,
            },
            ArbLeg {
                odds: odds_b.price(),
                implied_percent: odds_b.implied_percent(),
                stake: stake_b,
                payout: payout_b,
            },
        ],
        total_outlay,
        guaranteed_return,
        profit,
        roi_percent,
        is_arb,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;

    fn odds(price: f64) -> Odds {
        Odds::decimal(price).unwrap()
    }

    #[test]
    fn symmetric_arb() {
        let outcome = calculate(odds(2.1), odds(2.1), 1000.0).unwrap();
        assert!(outcome.is_arb);
        assert_float_absolute_eq!(1000.0, outcome.legs[1].stake, 1e-9);
        assert_float_absolute_eq!(2000.0, outcome.total_outlay, 1e-9);
        assert_float_absolute_eq!(2100.0, outcome.guaranteed_return, 1e-9);
        assert_float_absolute_eq!(100.0, outcome.profit, 1e-9);
        assert_float_absolute_eq!(5.0, outcome.roi_percent, 1e-9);
        assert_float_absolute_eq!(100.0 / 2.1, outcome.legs[0].implied_percent, 1e-9);
    }

    #[test]
    fn asymmetric_arb() {
        let outcome = calculate(odds(2.2), odds(2.1), 100.0).unwrap();
        assert!(outcome.is_arb);
        // stake_b sized so both payouts match
        assert_float_absolute_eq!(100.0 * 2.2 / 2.1, outcome.legs[1].stake, 1e-9);
        assert_float_absolute_eq!(outcome.legs[0].payout, outcome.legs[1].payout, 1e-9);
        assert!(outcome.profit > 0.0);
        assert!(outcome.roi_percent > 0.0);
    }

    #[test]
    fn no_arb() {
        let outcome = calculate(odds(1.8), odds(1.8), 1000.0).unwrap();
        assert!(!outcome.is_arb);
        // booksum 1/1.8 + 1/1.8 ≈ 1.111 exceeds 1
        assert_float_absolute_eq!(2000.0, outcome.total_outlay, 1e-9);
        assert_float_absolute_eq!(1800.0, outcome.guaranteed_return, 1e-9);
        assert_float_absolute_eq!(-200.0, outcome.profit, 1e-9);
        assert_float_absolute_eq!(-10.0, outcome.roi_percent, 1e-9);
    }

    #[test]
    fn boundary_booksum_is_not_arb() {
        let outcome = calculate(odds(2.0), odds(2.0), 100.0).unwrap();
        assert!(!outcome.is_arb);
        assert_float_absolute_eq!(0.0, outcome.profit, 1e-9);
    }

    #[test]
    fn rejects_non_positive_stake() {
        assert_eq!(
            ArbError::NonPositiveStake(0.0),
            calculate(odds(2.1), odds(2.1), 0.0).err().unwrap()
        );
        assert_eq!(
            ArbError::NonPositiveStake(-50.0),
            calculate(odds(2.1), odds(2.1), -50.0).err().unwrap()
        );
        assert!(calculate(odds(2.1), odds(2.1), f64::NAN).is_err());
    }
}
