use super::species::Species;
use crate::core::constants::LIGHT_SPEED;
use crate::core::error::{ParticleError, Result};
use crate::core::format::format_significant;
use crate::core::kinematics::{self, ENERGY, FourMomentum, PX, PY, PZ};
use nalgebra::Vector3;
use tracing::trace;

/// Number of significant figures used for numeric fields by [`Particle::describe`].
const DESCRIBE_PRECISION: usize = 3;

/// A point particle described by its species, charge and four-momentum.
///
/// The four-momentum lives in its own heap allocation that the particle owns exclusively.
/// Cloning deep-copies that buffer, while [`Particle::take`] and [`Particle::assign_from`]
/// hand it over without copying and leave the source empty. An empty particle reports the
/// ghost species, answers `true` to [`Particle::is_empty`] and rejects every operation that
/// needs its four-momentum with [`ParticleError::EmptyParticle`].
#[derive(Debug, PartialEq)]
pub struct Particle {
    species: Species,
    charge: i32,
    four_momentum: Option<Box<FourMomentum>>,
}

impl Particle {
    /// Label used by callers that have no better name for the particle they print.
    pub const DEFAULT_LABEL: &'static str = "Particle";

    /// Creates a particle from a species symbol, an energy and a three-momentum.
    ///
    /// The charge is derived from the species: `-1` for leptons, `0` for `"ghost"`. Only the
    /// first three entries of `three_momentum` are read.
    ///
    /// # Arguments
    ///
    /// * `species` - One of `"e"`, `"mu"`, `"tau"` or `"ghost"`.
    /// * `energy` - Energy in MeV, within `[0, LIGHT_SPEED]`.
    /// * `three_momentum` - `[px, py, pz]` in MeV/c.
    ///
    /// # Errors
    ///
    /// Checked in this order, before anything is allocated:
    ///
    /// * [`ParticleError::InvalidSpecies`] for an unrecognized symbol.
    /// * [`ParticleError::EnergyOutOfRange`] if `energy` is negative or above
    ///   [`LIGHT_SPEED`].
    /// * [`ParticleError::IndexOutOfRange`] if fewer than three momentum components are given.
    pub fn new(species: &str, energy: f64, three_momentum: &[f64]) -> Result<Self> {
        let species: Species = species.parse()?;
        validate_energy(energy)?;
        let [px, py, pz] = first_three(three_momentum)?;

        Ok(Self {
            species,
            charge: species.default_charge(),
            four_momentum: Some(Box::new(FourMomentum::new(energy, px, py, pz))),
        })
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn charge(&self) -> i32 {
        self.charge
    }

    /// Borrows the whole four-momentum.
    pub fn four_momentum(&self) -> Result<&FourMomentum> {
        self.four_momentum
            .as_deref()
            .ok_or(ParticleError::EmptyParticle)
    }

    fn four_momentum_mut(&mut self) -> Result<&mut FourMomentum> {
        self.four_momentum
            .as_deref_mut()
            .ok_or(ParticleError::EmptyParticle)
    }

    /// Reads component `index` of `[E, px, py, pz]`.
    pub fn component(&self, index: usize) -> Result<f64> {
        let p = self.four_momentum()?;
        p.get(index)
            .copied()
            .ok_or(ParticleError::IndexOutOfRange {
                index,
                len: p.len(),
            })
    }

    pub fn energy(&self) -> Result<f64> {
        self.component(ENERGY)
    }

    pub fn px(&self) -> Result<f64> {
        self.component(PX)
    }

    pub fn py(&self) -> Result<f64> {
        self.component(PY)
    }

    pub fn pz(&self) -> Result<f64> {
        self.component(PZ)
    }

    /// The spatial part `[px, py, pz]` of the four-momentum.
    pub fn three_momentum(&self) -> Result<Vector3<f64>> {
        Ok(self.four_momentum()?.fixed_rows::<3>(PX).into_owned())
    }

    /// Returns `true` if the particle no longer owns a four-momentum, i.e. it has been moved
    /// from.
    pub fn is_empty(&self) -> bool {
        self.four_momentum.is_none()
    }

    /// Changes the species without touching the charge.
    ///
    /// # Errors
    ///
    /// Returns [`ParticleError::InvalidSpecies`] unless `species` is one of `"e"`, `"mu"` or
    /// `"tau"`. The ghost marker cannot be assigned.
    pub fn set_species(&mut self, species: &str) -> Result<()> {
        self.species = Species::parse_lepton(species)?;
        Ok(())
    }

    pub fn set_charge(&mut self, charge: i32) {
        self.charge = charge;
    }

    /// Sets the energy, applying the same bound as [`Particle::new`].
    pub fn set_energy(&mut self, energy: f64) -> Result<()> {
        validate_energy(energy)?;
        self.four_momentum_mut()?[ENERGY] = energy;
        Ok(())
    }

    pub fn set_px(&mut self, px: f64) -> Result<()> {
        self.four_momentum_mut()?[PX] = px;
        Ok(())
    }

    pub fn set_py(&mut self, py: f64) -> Result<()> {
        self.four_momentum_mut()?[PY] = py;
        Ok(())
    }

    pub fn set_pz(&mut self, pz: f64) -> Result<()> {
        self.four_momentum_mut()?[PZ] = pz;
        Ok(())
    }

    /// Flips the particle into its antiparticle by negating the charge.
    ///
    /// Returns `self` so that calls can be chained.
    pub fn charge_conjugate(&mut self) -> &mut Self {
        self.charge = -self.charge;
        self
    }

    /// Lorentz-invariant product of this particle's four-momentum with another's.
    pub fn dot_product(&self, other: &Particle) -> Result<f64> {
        kinematics::dot(self, other)
    }

    /// `E^2 - |p|^2` for this particle.
    pub fn invariant_mass_squared(&self) -> Result<f64> {
        kinematics::dot(self, self)
    }

    /// Moves the four-momentum out into a new particle.
    ///
    /// The buffer is handed over without copying its components. Afterwards `self` is empty
    /// and carries the ghost species; its charge is left as it was.
    pub fn take(&mut self) -> Particle {
        trace!("Calling move constructor");
        Particle {
            species: std::mem::take(&mut self.species),
            charge: self.charge,
            four_momentum: self.four_momentum.take(),
        }
    }

    /// Replaces this particle with the contents of `source`, leaving `source` empty.
    ///
    /// The previous four-momentum of `self` is released.
    pub fn assign_from(&mut self, source: &mut Particle) {
        trace!("Calling move assignment operator");
        self.species = std::mem::take(&mut source.species);
        self.four_momentum = source.four_momentum.take();
        self.charge = source.charge;
    }

    /// Renders `<label>: [type,charge,E,px,py,pz] = [...]` with three significant figures for
    /// the four-momentum components.
    ///
    /// # Errors
    ///
    /// Returns [`ParticleError::EmptyParticle`] if the particle has been moved from.
    pub fn describe(&self, label: &str) -> Result<String> {
        let p = self.four_momentum()?;
        Ok(format!(
            "{}: [type,charge,E,px,py,pz] = [{},{},{},{},{},{}]",
            label,
            self.species,
            self.charge,
            format_significant(p[ENERGY], DESCRIBE_PRECISION),
            format_significant(p[PX], DESCRIBE_PRECISION),
            format_significant(p[PY], DESCRIBE_PRECISION),
            format_significant(p[PZ], DESCRIBE_PRECISION),
        ))
    }

    /// Writes [`Particle::describe`] to standard output.
    pub fn print_data(&self, label: &str) -> Result<()> {
        println!("{}", self.describe(label)?);
        Ok(())
    }
}

impl Default for Particle {
    /// A ghost with zero charge and a zeroed four-momentum.
    fn default() -> Self {
        Self {
            species: Species::Ghost,
            charge: 0,
            four_momentum: Some(Box::new(FourMomentum::zeros())),
        }
    }
}

impl Clone for Particle {
    fn clone(&self) -> Self {
        trace!("Calling copy constructor");
        Self {
            species: self.species,
            charge: self.charge,
            four_momentum: self.four_momentum.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        trace!("Calling copy assignment operator");
        self.species = source.species;
        self.four_momentum = source.four_momentum.clone();
        self.charge = source.charge;
    }
}

impl Drop for Particle {
    fn drop(&mut self) {
        trace!("Destroying {}", self.species);
    }
}

fn validate_energy(energy: f64) -> Result<()> {
    // NaN passes, as neither comparison holds for it.
    if energy < 0.0 || energy > LIGHT_SPEED {
        return Err(ParticleError::EnergyOutOfRange { energy });
    }
    Ok(())
}

fn first_three(values: &[f64]) -> Result<[f64; 3]> {
    match values {
        [x, y, z, ..] => Ok([*x, *y, *z]),
        _ => Err(ParticleError::IndexOutOfRange {
            index: values.len(),
            len: values.len(),
        }),
    }
}
