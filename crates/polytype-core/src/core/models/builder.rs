use super::sequence::{Layer, StackingSequence};
use super::structure::{AtomicStructure, Lattice};
use nalgebra::{Point3, Vector3};

/// Default species label for built structures. The reference pair-potential
/// parameterization targets a single placeholder species.
pub const DEFAULT_SPECIES: &str = "Si";

/// Vertical spacing between adjacent close-packed layers, in units of the
/// nearest-neighbor distance: sqrt(2/3) for ideal hard-sphere packing.
pub fn layer_spacing() -> f64 {
    (2.0 / 3.0f64).sqrt()
}

/// Deterministic constructor of polytype geometry.
///
/// Maps each layer of a stacking sequence to a fixed in-plane offset and a
/// vertical coordinate `i * layer_spacing()`, and spans the periodic cell
/// with two fixed basal-plane vectors plus a stacking-axis vector whose
/// length grows with the number of layers. Identical input always yields
/// bit-identical output.
#[derive(Debug, Clone)]
pub struct StructureBuilder {
    species: String,
}

impl Default for StructureBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StructureBuilder {
    pub fn new() -> Self {
        Self {
            species: DEFAULT_SPECIES.to_string(),
        }
    }

    pub fn with_species(species: impl Into<String>) -> Self {
        Self {
            species: species.into(),
        }
    }

    /// Builds the periodic structure of the polytype described by `sequence`.
    ///
    /// One atom per layer: layer i at `(dx, dy, i * layer_spacing())` where
    /// `(dx, dy)` is the registry offset of its symbol. The lattice holds the
    /// two close-packed basal vectors and a stacking-axis vector of length
    /// `N * layer_spacing()`.
    pub fn build(&self, sequence: &StackingSequence) -> AtomicStructure {
        let spacing = layer_spacing();

        let positions = sequence
            .layers()
            .iter()
            .enumerate()
            .map(|(i, &layer)| {
                let (dx, dy) = in_plane_offset(layer);
                Point3::new(dx, dy, i as f64 * spacing)
            })
            .collect();

        let lattice = Lattice::from_rows(
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.5, 3f64.sqrt() / 2.0, 0.0),
            Vector3::new(0.0, 0.0, sequence.len() as f64 * spacing),
        );

        AtomicStructure::new(self.species.clone(), positions, lattice)
    }
}

/// Cartesian basal-plane offset of each layer registry.
fn in_plane_offset(layer: Layer) -> (f64, f64) {
    let b = 3f64.sqrt() / 6.0;
    match layer {
        Layer::A => (0.0, 0.0),
        Layer::B => (0.5, b),
        Layer::C => (0.0, 1.0 - b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-8;

    fn build(sequence: &str) -> AtomicStructure {
        let sequence: StackingSequence = sequence.parse().unwrap();
        StructureBuilder::new().build(&sequence)
    }

    fn assert_point_close(actual: Point3<f64>, expected: [f64; 3]) {
        for axis in 0..3 {
            assert!(
                (actual[axis] - expected[axis]).abs() < TOLERANCE,
                "axis {} of {:?} differs from {:?}",
                axis,
                actual,
                expected
            );
        }
    }

    #[test]
    fn atom_count_equals_sequence_length() {
        for sequence in ["a", "ab", "abc", "abcabcacbacb"] {
            assert_eq!(build(sequence).atom_count(), sequence.len());
        }
    }

    #[test]
    fn building_is_deterministic() {
        let first = build("abcacb");
        let second = build("abcacb");
        assert_eq!(first, second);
    }

    #[test]
    fn single_layer_sits_at_the_origin() {
        let structure = build("a");
        assert_eq!(structure.atom_count(), 1);
        assert_point_close(structure.positions()[0], [0.0, 0.0, 0.0]);
        let stacking_axis = structure.lattice().row(2);
        assert!((stacking_axis.norm() - layer_spacing()).abs() < TOLERANCE);
    }

    #[test]
    fn cubic_stacking_has_three_distinct_offsets_and_uniform_spacing() {
        let structure = build("abc");
        let positions = structure.positions();
        assert_eq!(positions.len(), 3);

        for i in 0..3 {
            for j in (i + 1)..3 {
                let dx = positions[i].x - positions[j].x;
                let dy = positions[i].y - positions[j].y;
                assert!(
                    dx.abs() > TOLERANCE || dy.abs() > TOLERANCE,
                    "layers {} and {} share an in-plane offset",
                    i,
                    j
                );
            }
        }

        for i in 0..3 {
            assert!((positions[i].z - i as f64 * layer_spacing()).abs() < TOLERANCE);
        }
    }

    #[test]
    fn build_reproduces_known_six_layer_geometry() {
        let structure = build("abcacb");
        let expected = [
            [0.0, 0.0, 0.0],
            [0.5, 0.28867513, 0.81649658],
            [0.0, 0.71132487, 1.63299316],
            [0.0, 0.0, 2.44948974],
            [0.0, 0.71132487, 3.26598632],
            [0.5, 0.28867513, 4.0824829],
        ];
        for (actual, expected) in structure.positions().iter().zip(expected) {
            assert_point_close(*actual, expected);
        }
    }

    #[test]
    fn basal_vectors_are_independent_of_length() {
        let short = build("ab");
        let long = build("abcabcabc");
        assert_eq!(short.lattice().row(0), long.lattice().row(0));
        assert_eq!(short.lattice().row(1), long.lattice().row(1));
    }

    #[test]
    fn stacking_axis_scales_with_layer_count() {
        let structure = build("abcab");
        let axis = structure.lattice().row(2);
        assert!((axis.norm() - 5.0 * layer_spacing()).abs() < TOLERANCE);
    }

    #[test]
    fn case_is_ignored_when_building() {
        let lower = build("abcacb");
        let mixed = build("AbCaCb");
        assert_eq!(lower, mixed);
    }

    #[test]
    fn species_label_defaults_and_can_be_overridden() {
        let sequence: StackingSequence = "abc".parse().unwrap();
        let default = StructureBuilder::new().build(&sequence);
        assert_eq!(default.species(), DEFAULT_SPECIES);

        let argon = StructureBuilder::with_species("Ar").build(&sequence);
        assert_eq!(argon.species(), "Ar");
    }
}
