//! Booksum analysis of a quoted market: inverting prices into implied
//! probabilities, extracting the bookmaker's overround and recovering the de-vigged
//! (true) probabilities.

use serde::Serialize;
use thiserror::Error;

use crate::probs::SliceExt;

/// Percentage mass of a fair market once the vig is stripped.
pub const FAIR_VALUE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MarketError {
    #[error("a market requires at least two outcomes, got {0}")]
    TooFewOutcomes(usize),

    #[error("price at index {index} must be greater than 1, got {price}")]
    InvalidPrice { index: usize, price: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Market {
    /// Quoted decimal prices, one per outcome.
    pub prices: Vec<f64>,
    /// De-vigged probabilities, normalised to sum to 1.
    pub probs: Vec<f64>,
    /// Booksum of the raw implied probabilities. Anything above 1 is margin.
    pub overround: f64,
}
impl Market {
    /// Fits a market from quoted prices. Works identically for 2-way and 3-way (and
    /// wider) markets.
    pub fn fit(prices: Vec<f64>) -> Result<Self, MarketError> {
        if prices.len() < 2 {
            return Err(MarketError::TooFewOutcomes(prices.len()));
        }
        for (index, &price) in prices.iter().enumerate() {
            if !price.is_finite() || price <= 1.0 {
                return Err(MarketError::InvalidPrice { index, price });
            }
        }
        let mut probs = prices.invert();
        let overround = probs.normalise(1.0);
        Ok(Self {
            prices,
            probs,
            overround,
        })
    }

    /// Bookmaker margin as a percentage of the fair 100% mass.
    pub fn vig_percent(&self) -> f64 {
        (self.overround - 1.0) * 100.0
    }

    /// What the prices would be with the margin stripped.
    pub fn fair_prices(&self) -> Vec<f64> {
        self.probs.invert()
    }

    pub fn breakdown(&self) -> VigBreakdown {
        VigBreakdown {
            total_vig: self.vig_percent(),
            fair_value: FAIR_VALUE,
            true_percents: self.probs.iter().map(|prob| prob * 100.0).collect(),
            fair_prices: self.fair_prices(),
        }
    }
}

/// Serializable snapshot of a fitted market for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VigBreakdown {
    pub total_vig: f64,
    pub fair_value: f64,
    pub true_percents: Vec<f64>,
    pub fair_prices: Vec<f64>,
}
