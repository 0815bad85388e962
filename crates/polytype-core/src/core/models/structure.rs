use nalgebra::{Matrix3, Point3, Vector3};

/// Periodic cell spanned by three row vectors.
///
/// Rows are the lattice vectors a, b, c in Cartesian coordinates; the cell
/// volume is the absolute value of the determinant.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    vectors: Matrix3<f64>,
}

impl Lattice {
    pub fn from_rows(a: Vector3<f64>, b: Vector3<f64>, c: Vector3<f64>) -> Self {
        Self {
            vectors: Matrix3::from_rows(&[a.transpose(), b.transpose(), c.transpose()]),
        }
    }

    /// The full 3×3 row-vector matrix.
    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.vectors
    }

    /// The i-th lattice vector (0 = a, 1 = b, 2 = c).
    pub fn row(&self, index: usize) -> Vector3<f64> {
        self.vectors.row(index).transpose()
    }

    /// Cell volume.
    pub fn volume(&self) -> f64 {
        self.vectors.determinant().abs()
    }
}

/// A periodic single-species atomic structure.
///
/// Holds Cartesian atom positions together with the lattice that defines the
/// periodic cell. All atoms share one species label; multi-species systems
/// are outside this library's domain.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomicStructure {
    species: String,
    positions: Vec<Point3<f64>>,
    lattice: Lattice,
}

impl AtomicStructure {
    pub fn new(species: impl Into<String>, positions: Vec<Point3<f64>>, lattice: Lattice) -> Self {
        Self {
            species: species.into(),
            positions,
            lattice,
        }
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn atom_count(&self) -> usize {
        self.positions.len()
    }

    /// Volume of the periodic cell.
    pub fn volume(&self) -> f64 {
        self.lattice.volume()
    }
}
