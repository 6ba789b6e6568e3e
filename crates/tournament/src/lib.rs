//! Tournament Runner
//!
//! This crate provides:
//! - Playing a configured tournament on either engine
//! - Checking the baseline and indexed engines agree
//! - Reports and JSON results for finished (or partial) tournaments
//!
//! # Usage
//!
//! ```bash
//! # Play a tournament and save the results
//! cargo run -p tournament -- run cup.json --engine indexed --out results.json
//!
//! # Run both engines and report any divergence
//! cargo run -p tournament -- compare cup.toml
//! ```

mod results;
mod runner;

pub use results::*;
pub use runner::*;
