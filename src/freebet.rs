//! Free-bet conversion by laying the back bet on an exchange: sizes the lay stake
//! against the back odds and reports the worst-case (guaranteed) extraction across
//! both outcomes.

use serde::Serialize;
use thiserror::Error;

use crate::odds::Odds;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FreeBetError {
    #[error("free bet amount must be positive, got {0}")]
    NonPositiveAmount(f64),

    #[error("commission must be between 0 and 100, got {0}")]
    CommissionOutOfRange(f64),

    #[error("lay odds {lay} minus commission rate {rate} must be positive")]
    DegenerateLay { lay: f64, rate: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FreeBetOutcome {
    /// Stake to lay against the backed outcome on the exchange.
    pub lay_stake: f64,
    /// Exposure on the exchange if the backed outcome wins.
    pub liability: f64,
    pub back_win_profit: f64,
    pub lay_win_profit: f64,
    /// Worst case across both outcomes; the only extraction that is guaranteed.
    pub guaranteed_profit: f64,
    /// Guaranteed profit as a percentage of the free bet's face value.
    pub conversion_percent: f64,
}

pub fn convert(
    back: Odds,
    lay: Odds,
    amount: f64,
    commission_percent: f64,
) -> Result<FreeBetOutcome, FreeBetError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(FreeBetError::NonPositiveAmount(amount));
    }
    if !commission_percent.is_finite() || !(0.0..=100.0).contains(&commission_percent) {
        return Err(FreeBetError::CommissionOutOfRange(commission_percent));
    }

    let rate = commission_percent / 100.0;
    let divisor = lay.price() - rate;
    if divisor <= 0.0 {
        return Err(FreeBetError::DegenerateLay {
            lay: lay.price(),
            rate,
        });
    }

    // stake-not-returned free bet: only the winnings pay out on the back side
    let lay_stake = amount * (back.price() - 1.0) / divisor;
    let liability = lay_stake * (lay.price() - 1.0);
    let back_win_profit = amount * (back.price() - 1.0) - liability;
    let lay_win_profit = lay_stake * (1.0 - rate) - amount;
    let guaranteed_profit = f64::min(back_win_profit, lay_win_profit);
    let conversion_percent = guaranteed_profit / amount * 100.0;

    Ok(FreeBetOutcome {
        lay_stake,
        liability,
        back_win_profit,
        lay_win_profit,
        guaranteed_profit,
        conversion_percent,
    })
}
