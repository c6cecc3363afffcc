//! Savings Projection Engine
//!
//! This crate projects how a savings plan grows with time worked. Given a start
//! date, a working calendar with holidays, a savings rate and an asset price
//! multiplier, it computes the value accrued up to any instant and simulates
//! the calendar date on which a financial goal is reached.
//!
//! The engine never reads the clock itself: every evaluation takes `now` as
//! an argument, so the same inputs always produce the same projection.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
