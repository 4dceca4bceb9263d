use super::models::PairOperation;
use crate::error::{CliError, Result};
use crate::utils::parser::{self, ParticleField};
use leptons::Species;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileDefaults {
    pub momentum: Option<Vec<f64>>,
    pub conjugate: Option<bool>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileParticle {
    pub label: String,
    pub species: Species,
    pub energy: Option<f64>,
    pub momentum: Option<Vec<f64>>,
    pub charge: Option<i32>,
    pub conjugate: Option<bool>,
    /// Single-component overrides from `--set`, applied once the momentum is resolved.
    #[serde(skip)]
    pub component_overrides: ComponentOverrides,
}

/// `px`, `py` and `pz` replacements, indexed like the three-momentum.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ComponentOverrides([Option<f64>; 3]);

impl ComponentOverrides {
    pub fn set(&mut self, index: usize, value: f64) {
        self.0[index] = Some(value);
    }

    /// Writes each override into `momentum`. Components past the end are left out, so a
    /// short momentum stays short and is rejected when the particle is constructed.
    pub fn apply(&self, momentum: &mut [f64]) {
        for (slot, value) in momentum.iter_mut().zip(self.0) {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct FilePair {
    pub left: String,
    pub right: String,
    pub operation: PairOperation,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct FileDeck {
    pub defaults: Option<FileDefaults>,
    #[serde(default, rename = "particle")]
    pub particles: Vec<FileParticle>,
    #[serde(default, rename = "pair")]
    pub pairs: Vec<FilePair>,
}

impl FileDeck {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading particle deck from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for raw in set_values {
            let set = parser::parse_set_value(raw)?;
            debug!("Applying override {:?}", set);

            let particle = self
                .particles
                .iter_mut()
                .find(|p| p.label == set.label)
                .ok_or_else(|| {
                    CliError::Config(format!(
                        "Unknown particle label '{}' in --set '{}'",
                        set.label, raw
                    ))
                })?;

            match set.field {
                ParticleField::Energy => particle.energy = Some(parse_float(&set.value, raw)?),
                ParticleField::Px => particle
                    .component_overrides
                    .set(0, parse_float(&set.value, raw)?),
                ParticleField::Py => particle
                    .component_overrides
                    .set(1, parse_float(&set.value, raw)?),
                ParticleField::Pz => particle
                    .component_overrides
                    .set(2, parse_float(&set.value, raw)?),
                ParticleField::Charge => {
                    particle.charge = Some(set.value.parse().map_err(|_| {
                        CliError::Config(format!("Invalid integer value for {}", raw))
                    })?);
                }
                ParticleField::Conjugate => {
                    particle.conjugate = Some(set.value.parse().map_err(|_| {
                        CliError::Config(format!("Invalid boolean value for {}", raw))
                    })?);
                }
            }
        }
        Ok(())
    }
}

fn parse_float(value: &str, raw: &str) -> Result<f64> {
    value
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid float value for {}", raw)))
}
