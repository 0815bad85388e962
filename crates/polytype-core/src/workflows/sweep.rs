use crate::core::models::sequence::StackingSequence;
use crate::core::potential::model::PotentialModel;
use crate::engine::config::SweepConfig;
use crate::engine::evaluator::EnthalpyEvaluator;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::relax::{Pressure, StructureRelaxer};
use tracing::{info, instrument};

/// Enthalpy differences of a set of polytypes against the reference stacking.
///
/// Rows follow the caller's sequence order, columns the caller's pressure
/// order. Entry `(i, j)` is `h_ref(p_j) - h(s_i, p_j)`: positive values mean
/// the polytype is more stable than the reference at that pressure. Together
/// with the sequences and pressures this is sufficient for an external layer
/// to label and plot one curve per sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct EnthalpyTable {
    sequences: Vec<StackingSequence>,
    pressures: Vec<Pressure>,
    differences: Vec<Vec<f64>>,
}

impl EnthalpyTable {
    pub fn sequences(&self) -> &[StackingSequence] {
        &self.sequences
    }

    pub fn pressures(&self) -> &[Pressure] {
        &self.pressures
    }

    /// All rows, outer index = sequence, inner index = pressure.
    pub fn differences(&self) -> &[Vec<f64>] {
        &self.differences
    }

    pub fn difference(&self, sequence_index: usize, pressure_index: usize) -> Option<f64> {
        self.differences
            .get(sequence_index)
            .and_then(|row| row.get(pressure_index))
            .copied()
    }

    /// One labeled curve per sequence, in input order.
    pub fn curves(&self) -> impl Iterator<Item = (&StackingSequence, &[f64])> {
        self.sequences
            .iter()
            .zip(self.differences.iter().map(Vec::as_slice))
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

/// Runs the full enthalpy-difference sweep.
///
/// The reference enthalpy is computed once per pressure (in input order) and
/// reused for every sequence. Sequences and pressures are processed strictly
/// in the caller's order; repeated entries are recomputed, never cached
/// across list positions, so the table shape always mirrors the input shape.
#[instrument(skip_all, name = "enthalpy_sweep")]
pub fn run<P: PotentialModel, R: StructureRelaxer>(
    sequences: &[StackingSequence],
    pressures: &[Pressure],
    potential: &P,
    relaxer: &R,
    config: &SweepConfig,
    reporter: &ProgressReporter,
) -> EnthalpyTable {
    let evaluator = EnthalpyEvaluator::new(potential, relaxer, config);

    reporter.report(Progress::PhaseStart {
        name: "Reference Enthalpies",
    });
    info!(
        reference = %config.reference,
        pressures = pressures.len(),
        "Computing reference enthalpy at each pressure."
    );
    let reference_enthalpies: Vec<f64> = pressures
        .iter()
        .map(|&pressure| evaluator.enthalpy(&config.reference, pressure))
        .collect();
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Polytype Sweep",
    });
    reporter.report(Progress::SweepStart {
        total_evaluations: (sequences.len() * pressures.len()) as u64,
    });

    let differences: Vec<Vec<f64>> = sequences
        .iter()
        .map(|sequence| {
            pressures
                .iter()
                .zip(&reference_enthalpies)
                .map(|(&pressure, &h_ref)| {
                    let h = evaluator.enthalpy(sequence, pressure);
                    reporter.report(Progress::EvaluationFinish);
                    h_ref - h
                })
                .collect()
        })
        .collect();

    reporter.report(Progress::SweepFinish);
    reporter.report(Progress::PhaseFinish);

    info!(
        sequences = sequences.len(),
        pressures = pressures.len(),
        "Enthalpy sweep complete."
    );

    EnthalpyTable {
        sequences: sequences.to_vec(),
        pressures: pressures.to_vec(),
        differences,
    }
}
