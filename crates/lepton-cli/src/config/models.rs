use leptons::{Particle, Species};
use serde::Deserialize;
use std::fmt;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PairOperation {
    Sum,
    Dot,
}

impl fmt::Display for PairOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairOperation::Sum => f.write_str("sum"),
            PairOperation::Dot => f.write_str("dot"),
        }
    }
}

/// A fully resolved particle entry, ready to be constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSpec {
    pub label: String,
    pub species: Species,
    pub energy: f64,
    pub momentum: Vec<f64>,
    pub charge: Option<i32>,
    pub conjugate: bool,
}

impl ParticleSpec {
    /// Constructs the particle, then applies the charge override and conjugation in that
    /// order.
    pub fn build(&self) -> leptons::Result<Particle> {
        let mut particle = Particle::new(self.species.symbol(), self.energy, &self.momentum)?;
        if let Some(charge) = self.charge {
            particle.set_charge(charge);
        }
        if self.conjugate {
            particle.charge_conjugate();
        }
        Ok(particle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairSpec {
    pub left: String,
    pub right: String,
    pub operation: PairOperation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    pub particles: Vec<ParticleSpec>,
    pub pairs: Vec<PairSpec>,
}
