//! Parsing, validation and conversion of betting odds across decimal, American and
//! fractional notation.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display as StrumDisplay, EnumString};
use thiserror::Error;

use crate::probs::Fraction;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    StrumDisplay,
    EnumString,
    clap::ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OddsFormat {
    Decimal,
    American,
    Fractional,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OddsError {
    #[error("cannot parse '{raw}' as {format} odds")]
    Unparseable { raw: String, format: OddsFormat },

    #[error("decimal odds must be greater than 1, got {0}")]
    TooLow(f64),

    #[error("american odds cannot be zero")]
    ZeroAmerican,

    #[error("fractional odds require a whole numerator and a positive whole denominator")]
    BadFraction,
}

/// Decimal odds: the total payout multiplier per unit staked. A stake of 1 unit at
/// odds 2.0 returns 2.0 in total. Invariant: finite and strictly greater than 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Odds(f64);

impl Odds {
    pub fn decimal(price: f64) -> Result<Self, OddsError> {
        if price.is_finite() && price > 1.0 {
            Ok(Self(price))
        } else {
            Err(OddsError::TooLow(price))
        }
    }

    pub fn parse(raw: &str, format: OddsFormat) -> Result<Self, OddsError> {
        let unparseable = || OddsError::Unparseable {
            raw: raw.to_string(),
            format,
        };
        match format {
            OddsFormat::Decimal => {
                let price = f64::from_str(raw.trim()).map_err(|_| unparseable())?;
                Self::decimal(price)
            }
            OddsFormat::American => {
                let value = i64::from_str(raw.trim()).map_err(|_| unparseable())?;
                match value {
                    0 => Err(OddsError::ZeroAmerican),
                    value if value > 0 => Self::decimal(1.0 + value as f64 / 100.0),
                    value => Self::decimal(1.0 + 100.0 / -value as f64),
                }
            }
            OddsFormat::Fractional => {
                let fraction = Fraction::from_str(raw).map_err(|_| OddsError::BadFraction)?;
                Self::decimal(1.0 + fraction.quotient())
            }
        }
    }

    /// Pass/fail form of [`Odds::parse`], for per-field validation.
    pub fn validate(raw: &str, format: OddsFormat) -> bool {
        Self::parse(raw, format).is_ok()
    }

    pub fn price(&self) -> f64 {
        self.0
    }

    /// Implied win probability in (0, 1).
    pub fn implied_prob(&self) -> f64 {
        1.0 / self.0
    }

    /// Implied win probability as a percentage.
    pub fn implied_percent(&self) -> f64 {
        100.0 / self.0
    }

    /// American (moneyline) rendition. Decimal 2.0 is the even-money boundary and
    /// renders as `+100`, not `-100`.
    pub fn to_american(&self) -> String {
        if self.0 >= 2.0 {
            format!("+{}", ((self.0 - 1.0) * 100.0).round() as i64)
        } else {
            format!("-{}", (100.0 / (self.0 - 1.0)).round() as i64)
        }
    }

    /// Fractional rendition in lowest terms, quantised to hundredths.
    pub fn to_fractional(&self) -> Fraction {
        Fraction {
            numerator: ((self.0 - 1.0) * 100.0).round() as u64,
            denominator: 100,
        }
        .reduced()
    }

    pub fn convert(&self) -> Conversion {
        Conversion {
            decimal: self.0,
            american: self.to_american(),
            fractional: self.to_fractional().to_string(),
            implied_percent: self.implied_percent(),
        }
    }
}

impl Display for Odds {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Odds {
    type Err = OddsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, OddsFormat::Decimal)
    }
}

/// One odds value snapshotted in every supported notation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub decimal: f64,
    pub american: String,
    pub fractional: String,
    pub implied_percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;

    #[test]
    fn parse_decimal() {
        assert_f64_near!(2.5, Odds::parse("2.5", OddsFormat::Decimal).unwrap().price());
        assert_f64_near!(1.01, Odds::parse(" 1.01 ", OddsFormat::Decimal).unwrap().price());

        assert_eq!(
            OddsError::TooLow(1.0),
            Odds::parse("1.0", OddsFormat::Decimal).err().unwrap()
        );
        assert_eq!(
            OddsError::TooLow(0.5),
            Odds::parse("0.5", OddsFormat::Decimal).err().unwrap()
        );
        assert_eq!(
            OddsError::Unparseable {
                raw: "abc".into(),
                format: OddsFormat::Decimal
            },
            Odds::parse("abc", OddsFormat::Decimal).err().unwrap()
        );
        assert_eq!(
            OddsError::Unparseable {
                raw: "".into(),
                format: OddsFormat::Decimal
            },
            Odds::parse("", OddsFormat::Decimal).err().unwrap()
        );
        assert!(Odds::parse("inf", OddsFormat::Decimal).is_err());
    }

    #[test]
    fn parse_american() {
        assert_f64_near!(2.5, Odds::parse("+150", OddsFormat::American).unwrap().price());
        assert_f64_near!(2.5, Odds::parse("150", OddsFormat::American).unwrap().price());
        assert_f64_near!(1.5, Odds::parse("-200", OddsFormat::American).unwrap().price());
        assert_f64_near!(2.0, Odds::parse("+100", OddsFormat::American).unwrap().price());

        assert_eq!(
            OddsError::ZeroAmerican,
            Odds::parse("0", OddsFormat::American).err().unwrap()
        );
        assert!(Odds::parse("+1.5", OddsFormat::American).is_err());
        assert!(Odds::parse("", OddsFormat::American).is_err());
    }

    #[test]
    fn parse_fractional() {
        assert_f64_near!(1.5, Odds::parse("1/2", OddsFormat::Fractional).unwrap().price());
        assert_f64_near!(3.5, Odds::parse("5/2", OddsFormat::Fractional).unwrap().price());

        assert_eq!(
            OddsError::BadFraction,
            Odds::parse("1/0", OddsFormat::Fractional).err().unwrap()
        );
        assert_eq!(
            OddsError::BadFraction,
            Odds::parse("x/2", OddsFormat::Fractional).err().unwrap()
        );
        // 0/2 parses but degenerates to even stakes with no winnings
        assert_eq!(
            OddsError::TooLow(1.0),
            Odds::parse("0/2", OddsFormat::Fractional).err().unwrap()
        );
    }

    #[test]
    fn validate() {
        assert!(Odds::validate("2.2", OddsFormat::Decimal));
        assert!(Odds::validate("-110", OddsFormat::American));
        assert!(Odds::validate("10/11", OddsFormat::Fractional));

        assert!(!Odds::validate("abc", OddsFormat::Decimal));
        assert!(!Odds::validate("1/0", OddsFormat::Fractional));
        assert!(!Odds::validate("", OddsFormat::Decimal));
        assert!(!Odds::validate("", OddsFormat::American));
        assert!(!Odds::validate("", OddsFormat::Fractional));
    }

    #[test]
    fn to_american() {
        assert_eq!("+100", Odds::decimal(2.0).unwrap().to_american());
        assert_eq!("-200", Odds::decimal(1.5).unwrap().to_american());
        assert_eq!("+150", Odds::decimal(2.5).unwrap().to_american());
        assert_eq!("-110", Odds::decimal(1.909).unwrap().to_american());
    }

    #[test]
    fn to_fractional() {
        assert_eq!("1/1", Odds::decimal(2.0).unwrap().to_fractional().to_string());
        assert_eq!("1/2", Odds::decimal(1.5).unwrap().to_fractional().to_string());
        assert_eq!("3/2", Odds::decimal(2.5).unwrap().to_fractional().to_string());
        assert_eq!("1/4", Odds::decimal(1.25).unwrap().to_fractional().to_string());
        assert_eq!("33/100", Odds::decimal(1.33).unwrap().to_fractional().to_string());
    }

    #[test]
    fn implied() {
        assert_f64_near!(0.5, Odds::decimal(2.0).unwrap().implied_prob());
        assert_float_absolute_eq!(40.0, Odds::decimal(2.5).unwrap().implied_percent(), 1e-9);
    }

    #[test]
    fn round_trips() {
        for price in [1.1, 1.25, 1.5, 1.91, 2.0, 2.1, 2.5, 3.75, 11.0] {
            let odds = Odds::decimal(price).unwrap();
            let from_american = Odds::parse(&odds.to_american(), OddsFormat::American).unwrap();
            assert_float_absolute_eq!(price, from_american.price(), 0.01);

            let from_fractional =
                Odds::parse(&odds.to_fractional().to_string(), OddsFormat::Fractional).unwrap();
            assert_float_absolute_eq!(price, from_fractional.price(), 0.01);
        }
    }

    #[test]
    fn format_from_str() {
        assert_eq!(OddsFormat::Decimal, "decimal".parse().unwrap());
        assert_eq!(OddsFormat::American, "american".parse().unwrap());
        assert_eq!(OddsFormat::Fractional, "fractional".parse().unwrap());
        assert_eq!("american", OddsFormat::American.to_string());
    }

    #[test]
    fn odds_display() {
        assert_eq!("2.50", format!("{}", Odds::decimal(2.5).unwrap()));
    }
}
