//! Calculators for the economics of fixed-odds betting: conversion between decimal,
//! American and fractional odds, two-leg arbitrage staking, free-bet conversion via
//! exchange lay hedging, and bookmaker margin (vig) analysis.

pub mod arb;
pub mod display;
pub mod freebet;
pub mod market;
pub mod odds;
pub mod print;
pub mod probs;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
