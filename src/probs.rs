//! Utilities for working with probabilities and price fractions.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{bail, Context};

pub trait SliceExt {
    fn sum(&self) -> f64;
    fn invert(&self) -> Vec<f64>;
    fn normalise(&mut self, target: f64) -> f64;
    fn scale(&mut self, factor: f64);
}
impl SliceExt for [f64] {
    fn sum(&self) -> f64 {
        self.iter().sum()
    }

    fn invert(&self) -> Vec<f64> {
        self.iter().map(|element| 1.0 / element).collect()
    }

    fn normalise(&mut self, target: f64) -> f64 {
        let sum = self.sum();
        self.scale(target / sum);
        sum
    }

    fn scale(&mut self, factor: f64) {
        for element in self {
            *element *= factor;
        }
    }
}

/// Iterative Euclidean algorithm. `gcd(0, n)` = `n`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fraction {
    pub numerator: u64,
    pub denominator: u64,
}
impl Fraction {
    pub fn quotient(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Lowest-terms equivalent. The denominator stays nonzero: the divisor is a
    /// factor of the (nonzero) denominator.
    pub fn reduced(&self) -> Self {
        let divisor = gcd(self.numerator, self.denominator);
        Self {
            numerator: self.numerator / divisor,
            denominator: self.denominator / divisor,
        }
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for Fraction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (numerator, denominator) = s
            .split_once('/')
            .context("expected a numerator/denominator pair")?;
        let numerator = numerator
            .trim()
            .parse()
            .context("numerator is not a whole number")?;
        let denominator: u64 = denominator
            .trim()
            .parse()
            .context("denominator is not a whole number")?;
        if denominator == 0 {
            bail!("denominator must be positive");
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }
}
