//! # Workflows Module
//!
//! This module provides the high-level, user-facing entry point of the library: the
//! pressure sweep that compares polytype enthalpies against a reference stacking.
//!
//! ## Overview
//!
//! A workflow ties the core models and the engine together into one complete procedure.
//! The caller supplies validated stacking sequences, a pressure list, the external
//! potential and relaxer implementations, sweep configuration, and an optional progress
//! reporter; the workflow returns the assembled enthalpy-difference table.
//!
//! ## Architecture
//!
//! - **Enthalpy Sweep** ([`sweep`]) - Reference enthalpies per pressure, the ordered
//!   per-sequence/per-pressure difference table, and the `EnthalpyTable` result type
//!   consumed by reporting layers.

pub mod sweep;
