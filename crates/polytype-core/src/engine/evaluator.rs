use super::config::SweepConfig;
use super::relax::{Pressure, RelaxationRequest, StructureRelaxer};
use crate::core::models::builder::StructureBuilder;
use crate::core::models::sequence::StackingSequence;
use crate::core::potential::model::PotentialModel;
use tracing::{debug, warn};

/// Drives one polytype from its stacking sequence to a relaxed per-atom
/// enthalpy.
///
/// The evaluator builds the geometry, takes the neighbor cutoff from the
/// potential's intrinsic range, and requests a relaxation in which both the
/// atomic positions and the cell are free to change. The relaxer's result is
/// used as-is even when the iteration budget ran out: a less precise value is
/// preferred over aborting a sweep.
pub struct EnthalpyEvaluator<'a, P, R> {
    potential: &'a P,
    relaxer: &'a R,
    config: &'a SweepConfig,
    builder: StructureBuilder,
}

impl<'a, P: PotentialModel, R: StructureRelaxer> EnthalpyEvaluator<'a, P, R> {
    pub fn new(potential: &'a P, relaxer: &'a R, config: &'a SweepConfig) -> Self {
        Self {
            potential,
            relaxer,
            config,
            builder: StructureBuilder::new(),
        }
    }

    /// Per-atom enthalpy `h = (E + p·V) / N` of the relaxed polytype.
    ///
    /// For fixed inputs, repeated calls agree within the relaxer's tolerance;
    /// relaxation is iterative, so bit-exact repetition is not guaranteed.
    pub fn enthalpy(&self, sequence: &StackingSequence, pressure: Pressure) -> f64 {
        let structure = self.builder.build(sequence);
        let cutoff = self.potential.cutoff();

        let initial_energy = self.potential.evaluate(&structure, cutoff);
        debug!(
            sequence = %sequence,
            initial_energy,
            initial_volume = structure.volume(),
            "Evaluating polytype before relaxation"
        );

        let request = RelaxationRequest {
            cutoff,
            pressure: pressure.tensor(),
            allow_position_change: true,
            allow_lattice_change: true,
            tolerance: self.config.tolerance,
            max_iterations: self.config.max_iterations,
        };
        let relaxed = self.relaxer.relax(&structure, &request);

        if !relaxed.converged {
            warn!(
                sequence = %sequence,
                pressure = %pressure,
                max_iterations = self.config.max_iterations,
                "Relaxation exhausted its iteration budget; using the best available estimate"
            );
        }
        debug!(
            sequence = %sequence,
            pressure = %pressure,
            energy = relaxed.energy,
            volume = relaxed.volume,
            atoms = relaxed.atom_count,
            "Relaxed polytype"
        );

        (relaxed.energy + pressure.scalar() * relaxed.volume) / relaxed.atom_count as f64
    }
}
