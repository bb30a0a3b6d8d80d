//! Dilution - Founder Equity Dilution Calculator
//!
//! Computes how founder shares shrink across an ordered sequence of funding
//! rounds. Each round dilutes every founder by `amount / post_valuation`,
//! cumulatively and in list order.
//!
//! # Architecture
//!
//! - `engine`: the pure calculation plus its skip diagnostics and advisories
//! - `model`: founders, rounds and snapshots
//! - `input`: raw-text coercion and scenario files
//! - `report`: breakdown table and JSON report
//!
//! ```
//! use dilution::engine::compute;
//! use dilution::model::{Founder, FundingRound};
//!
//! let founders = vec![Founder::new(1, 60.0), Founder::new(2, 40.0)];
//! let rounds = vec![FundingRound::new(1, "Seed", 500_000.0, 2_500_000.0)];
//!
//! let calc = compute(&founders, &rounds);
//! assert!((calc.results[0].share_of(1).unwrap() - 48.0).abs() < 1e-9);
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod model;
pub mod report;

pub use engine::{compute, Calculation, Diagnostic, DiagnosticKind};
pub use error::{DilutionError, Result};
