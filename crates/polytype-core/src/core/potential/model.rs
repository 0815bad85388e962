use crate::core::models::structure::AtomicStructure;

/// Capability interface of the external pair-potential engine.
///
/// Implementations own the energy law and its parameterization; the library
/// only asks for the intrinsic interaction range and for total energies of
/// periodic structures. A typical implementation wraps
/// [`super::params::PairPotentialParams`] loaded at process start:
///
/// ```ignore
/// struct NativePairPotential {
///     params: PairPotentialParams,
/// }
///
/// impl PotentialModel for NativePairPotential {
///     fn cutoff(&self) -> f64 {
///         self.params.cutoff
///     }
///
///     fn evaluate(&self, structure: &AtomicStructure, cutoff: f64) -> f64 {
///         // periodic pairwise sum within `cutoff`
///     }
/// }
/// ```
pub trait PotentialModel {
    /// Intrinsic interaction range, used as the neighbor/connectivity cutoff.
    fn cutoff(&self) -> f64;

    /// Total potential energy of the periodic structure with the given cutoff.
    fn evaluate(&self, structure: &AtomicStructure, cutoff: f64) -> f64;
}
