use crate::core::models::sequence::StackingSequence;

/// Convergence tolerance requested from the relaxer by default.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Iteration budget handed to the relaxer by default.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// One period of cubic close packing; the conventional zero point for
/// enthalpy differences.
pub const DEFAULT_REFERENCE: &str = "abc";

/// Settings of an enthalpy sweep.
///
/// The reference stacking is an explicit field rather than a literal inside
/// the aggregation loop: the zero-difference baseline is a convention, and
/// callers may pick a different one.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    pub reference: StackingSequence,
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfigBuilder::new().build()
    }
}

impl SweepConfig {
    pub fn builder() -> SweepConfigBuilder {
        SweepConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct SweepConfigBuilder {
    reference: Option<StackingSequence>,
    tolerance: Option<f64>,
    max_iterations: Option<usize>,
}

impl SweepConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reference(mut self, sequence: StackingSequence) -> Self {
        self.reference = Some(sequence);
        self
    }
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }
    pub fn max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = Some(iterations);
        self
    }

    pub fn build(self) -> SweepConfig {
        SweepConfig {
            reference: self.reference.unwrap_or_else(|| {
                DEFAULT_REFERENCE
                    .parse()
                    .expect("default reference stacking is valid")
            }),
            tolerance: self.tolerance.unwrap_or(DEFAULT_TOLERANCE),
            max_iterations: self.max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS),
        }
    }
}
