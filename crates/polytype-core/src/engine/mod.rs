//! # Engine Module
//!
//! This module orchestrates individual enthalpy evaluations: it defines the contract of
//! the external structure relaxer, the configuration of a sweep, and the evaluator that
//! drives one polytype from geometry to a relaxed per-atom enthalpy.
//!
//! ## Overview
//!
//! An evaluation is synchronous and blocking: the evaluator builds the structure, hands
//! it to the relaxer together with the applied pressure tensor, and reads back the
//! relaxed energy and volume. Non-convergence within the iteration budget is a degraded
//! result, never an error.
//!
//! ## Architecture
//!
//! - **Relaxer Contract** ([`relax`]) - Applied pressure, relaxation request/result, and
//!   the trait implemented by external relaxation engines
//! - **Configuration** ([`config`]) - Reference stacking, convergence tolerance, and
//!   iteration budget with explicit defaults
//! - **Evaluation** ([`evaluator`]) - The build → relax → enthalpy pipeline for a single
//!   sequence/pressure pair
//! - **Progress Monitoring** ([`progress`]) - Typed progress events and the optional
//!   callback reporter

pub mod config;
pub mod evaluator;
pub mod progress;
pub mod relax;
