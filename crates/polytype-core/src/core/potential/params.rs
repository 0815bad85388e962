use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid parameter in '{path}': {reason}")]
    Invalid { path: String, reason: String },
}

/// Constants of the single-species pair potential, in its natural units.
///
/// Loaded once at process start and passed by reference to whatever
/// implements [`super::model::PotentialModel`]; nothing in the library reads
/// parameters from shared global state.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PairPotentialParams {
    /// Species label the parameterization applies to.
    pub species: String,
    /// Well depth (energy unit of all reported enthalpies).
    pub epsilon: f64,
    /// Zero-crossing distance (length unit of all geometry).
    pub sigma: f64,
    /// Intrinsic interaction range used for neighbor construction.
    pub cutoff: f64,
}

impl PairPotentialParams {
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let params: Self = toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        params.validate(path)?;
        Ok(params)
    }

    fn validate(&self, path: &Path) -> Result<(), ParamLoadError> {
        let invalid = |reason: String| ParamLoadError::Invalid {
            path: path.to_string_lossy().to_string(),
            reason,
        };
        if self.epsilon <= 0.0 {
            return Err(invalid(format!("epsilon must be positive, got {}", self.epsilon)));
        }
        if self.sigma <= 0.0 {
            return Err(invalid(format!("sigma must be positive, got {}", self.sigma)));
        }
        if self.cutoff <= 0.0 {
            return Err(invalid(format!("cutoff must be positive, got {}", self.cutoff)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_succeeds_with_valid_toml() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("pair.toml");
        fs::write(
            &file_path,
            r#"
            species = "Si"
            epsilon = 1.0
            sigma = 1.0
            cutoff = 2.5
            "#,
        )
        .unwrap();

        let params = PairPotentialParams::load(&file_path).unwrap();
        assert_eq!(params.species, "Si");
        assert_eq!(params.epsilon, 1.0);
        assert_eq!(params.sigma, 1.0);
        assert_eq!(params.cutoff, 2.5);
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("non_existent.toml");
        let result = PairPotentialParams::load(&file_path);
        assert!(matches!(result, Err(ParamLoadError::Io { .. })));
    }

    #[test]
    fn load_fails_for_malformed_toml() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("malformed.toml");
        fs::write(&file_path, "this is not toml").unwrap();
        let result = PairPotentialParams::load(&file_path);
        assert!(matches!(result, Err(ParamLoadError::Toml { .. })));
    }

    #[test]
    fn load_fails_for_missing_field() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("partial.toml");
        fs::write(&file_path, "species = \"Si\"\nepsilon = 1.0").unwrap();
        let result = PairPotentialParams::load(&file_path);
        assert!(matches!(result, Err(ParamLoadError::Toml { .. })));
    }

    #[test]
    fn load_rejects_non_positive_constants() {
        let dir = tempdir().unwrap();
        for (name, body) in [
            ("epsilon", "species = \"Si\"\nepsilon = 0.0\nsigma = 1.0\ncutoff = 2.5"),
            ("sigma", "species = \"Si\"\nepsilon = 1.0\nsigma = -1.0\ncutoff = 2.5"),
            ("cutoff", "species = \"Si\"\nepsilon = 1.0\nsigma = 1.0\ncutoff = 0.0"),
        ] {
            let file_path = dir.path().join(format!("{name}.toml"));
            fs::write(&file_path, body).unwrap();
            let result = PairPotentialParams::load(&file_path);
            assert!(
                matches!(result, Err(ParamLoadError::Invalid { .. })),
                "non-positive {} was accepted",
                name
            );
        }
    }
}
