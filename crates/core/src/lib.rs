//! Core types for maxsub, a traced maximum subarray solver.
//!
//! This crate holds everything the solvers build on:
//!
//! - [`NumericSequence`] — an immutable sequence of real numbers
//! - [`parse()`] / [`parse_with`] — validate text into a [`NumericSequence`]
//! - [`Number`] — renders an `f64` the way trace and result text expect
//! - [`Observer`] — receives solver events and optionally returns control actions

mod number;
mod observer;
mod sequence;

pub mod parse;

pub use number::Number;
pub use observer::Observer;
pub use parse::{Config, ValidationError, ValidationReason, parse, parse_with};
pub use sequence::NumericSequence;
