//! Solvers for maxsub.
//!
//! # Solvers
//!
//! - [`max_subarray`] — single-pass maximum subarray search that reports each
//!   extend/restart and best-so-far decision as an [`Event`]
//!
//! # Features
//!
//! - `serde` — derives `Serialize` for solutions, statuses, and events.
//!
//! [`Event`]: max_subarray::Event

pub mod max_subarray;
