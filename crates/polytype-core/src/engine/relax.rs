use crate::core::models::structure::AtomicStructure;
use nalgebra::Matrix3;
use std::fmt;

/// Hydrostatic load applied during relaxation.
///
/// `Ambient` and `Hydrostatic(0.0)` are numerically interchangeable: both map
/// to the zero tensor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Pressure {
    /// No applied pressure.
    #[default]
    Ambient,
    /// Equal pressure on all three principal directions.
    Hydrostatic(f64),
}

impl Pressure {
    /// Scalar pressure value (0 when ambient).
    pub fn scalar(&self) -> f64 {
        match self {
            Pressure::Ambient => 0.0,
            Pressure::Hydrostatic(p) => *p,
        }
    }

    /// The 3×3 diagonal pressure tensor handed to the relaxer.
    pub fn tensor(&self) -> Matrix3<f64> {
        Matrix3::from_diagonal_element(self.scalar())
    }
}

impl fmt::Display for Pressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pressure::Ambient => write!(f, "ambient"),
            Pressure::Hydrostatic(p) => write!(f, "{}", p),
        }
    }
}

/// Full argument set of one relaxation call.
#[derive(Debug, Clone, PartialEq)]
pub struct RelaxationRequest {
    /// Neighbor/connectivity cutoff, taken from the potential's intrinsic range.
    pub cutoff: f64,
    /// Applied external pressure tensor.
    pub pressure: Matrix3<f64>,
    /// Whether atomic positions may move.
    pub allow_position_change: bool,
    /// Whether the cell shape and size may change.
    pub allow_lattice_change: bool,
    /// Convergence tolerance of the minimizer.
    pub tolerance: f64,
    /// Iteration budget; exhaustion yields a best-effort result.
    pub max_iterations: usize,
}

/// Outcome of a relaxation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelaxationResult {
    /// Energy of the relaxed structure.
    pub energy: f64,
    /// Volume of the relaxed cell.
    pub volume: f64,
    /// Atom count, unchanged by relaxation.
    pub atom_count: usize,
    /// False when the iteration budget ran out before the tolerance was met.
    /// Energy and volume still hold the best estimate found.
    pub converged: bool,
}

/// Capability interface of the external relaxation engine.
///
/// Relaxation is iterative minimization of the structure under the pair
/// potential and the applied pressure. The call blocks until convergence or
/// budget exhaustion and never fails at the type level; quality is reported
/// through [`RelaxationResult::converged`].
pub trait StructureRelaxer {
    fn relax(&self, structure: &AtomicStructure, request: &RelaxationRequest) -> RelaxationResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambient_pressure_is_the_zero_tensor() {
        assert_eq!(Pressure::Ambient.scalar(), 0.0);
        assert_eq!(Pressure::Ambient.tensor(), Matrix3::zeros());
    }

    #[test]
    fn ambient_and_zero_hydrostatic_are_numerically_equivalent() {
        assert_eq!(Pressure::Ambient.scalar(), Pressure::Hydrostatic(0.0).scalar());
        assert_eq!(Pressure::Ambient.tensor(), Pressure::Hydrostatic(0.0).tensor());
    }

    #[test]
    fn hydrostatic_tensor_is_diagonal_with_equal_entries() {
        let tensor = Pressure::Hydrostatic(2.5).tensor();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 2.5 } else { 0.0 };
                assert_eq!(tensor[(i, j)], expected);
            }
        }
    }

    #[test]
    fn default_pressure_is_ambient() {
        assert_eq!(Pressure::default(), Pressure::Ambient);
    }

    #[test]
    fn pressure_displays_for_curve_labels() {
        assert_eq!(Pressure::Ambient.to_string(), "ambient");
        assert_eq!(Pressure::Hydrostatic(0.5).to_string(), "0.5");
    }
}
