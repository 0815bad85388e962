//! # Core Models Module
//!
//! This module contains the fundamental data structures used to represent close-packed
//! stacking polytypes, providing the foundation for all structure construction and
//! enthalpy evaluation.
//!
//! ## Overview
//!
//! The models module defines the core abstractions for describing a polytype: the layer
//! registry of its stacking sequence, the periodic cell, and the atomic structure built
//! from them. These models are designed to:
//!
//! - **Validate early** - A `StackingSequence` cannot exist with an invalid symbol
//! - **Stay immutable** - Structures are built once and consumed by the relaxer
//! - **Be exactly reproducible** - Identical input always yields bit-identical geometry
//!
//! ## Key Components
//!
//! - [`sequence`] - Layer symbols and validated stacking sequences
//! - [`structure`] - Periodic lattice and atomic structure representation
//! - [`builder`] - Deterministic mapping from a sequence to its 3-D structure
//!
//! ## Usage
//!
//! ```ignore
//! use polytypes::core::models::builder::StructureBuilder;
//! use polytypes::core::models::sequence::StackingSequence;
//!
//! let sequence: StackingSequence = "abcacb".parse()?;
//! let structure = StructureBuilder::new().build(&sequence);
//! assert_eq!(structure.atom_count(), 6);
//! ```

pub mod builder;
pub mod sequence;
pub mod structure;
