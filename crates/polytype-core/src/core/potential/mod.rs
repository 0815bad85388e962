//! # Potential Module
//!
//! This module defines the surface between the library and the external pair-potential
//! engine: the static parameterization loaded once at process start, and the narrow
//! capability trait a potential implementation must provide.
//!
//! ## Overview
//!
//! The library never computes pairwise energies itself. The energy/force law, neighbor
//! handling, and minimization all live behind [`model::PotentialModel`] and the relaxer
//! interface in the engine layer, so a native implementation or a binding to an external
//! simulation package can be substituted without touching the core contracts.
//!
//! ## Key Components
//!
//! - [`params`] - Pair-potential constants (`species`, `epsilon`, `sigma`, `cutoff`)
//!   deserialized from a TOML file into one explicit configuration object
//! - [`model`] - The consumed capability trait: intrinsic cutoff plus total-energy
//!   evaluation of a periodic structure

pub mod model;
pub mod params;
