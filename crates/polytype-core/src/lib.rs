//! # Polytypes Core Library
//!
//! A library for constructing close-packed stacking polytypes and comparing their
//! mechanically relaxed per-atom enthalpies under hydrostatic pressure.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear separation of
//! concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`StackingSequence`,
//!   `AtomicStructure`), the deterministic geometry construction, and the parameter/capability
//!   surface of the external pair potential.
//!
//! - **[`engine`]: The Logic Core.** This layer orchestrates individual evaluations. It defines
//!   the relaxation request/result contract, the `EnthalpyEvaluator` that drives a structure
//!   through the external relaxer, sweep configuration, and progress reporting.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer. It ties the
//!   `engine` and `core` together to execute a complete pressure sweep and assemble the
//!   enthalpy-difference table consumed by reporting layers.

pub mod core;
pub mod engine;
pub mod workflows;
