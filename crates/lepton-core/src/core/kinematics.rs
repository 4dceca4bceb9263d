use super::error::Result;
use super::models::particle::Particle;
use nalgebra::Vector4;
use std::ops::Add;

/// Relativistic four-momentum `[E, px, py, pz]` in MeV/c.
pub type FourMomentum = Vector4<f64>;

/// Index of the energy component of a [`FourMomentum`].
pub const ENERGY: usize = 0;
/// Index of the x momentum component of a [`FourMomentum`].
pub const PX: usize = 1;
/// Index of the y momentum component of a [`FourMomentum`].
pub const PY: usize = 2;
/// Index of the z momentum component of a [`FourMomentum`].
pub const PZ: usize = 3;

/// Component-wise sum of the four-momenta of `a` and `b`.
///
/// Neither operand is modified.
///
/// # Errors
///
/// Returns [`ParticleError::EmptyParticle`](super::error::ParticleError::EmptyParticle) if
/// either operand has been moved from.
pub fn sum(a: &Particle, b: &Particle) -> Result<FourMomentum> {
    Ok(a.four_momentum()? + b.four_momentum()?)
}

/// Minkowski inner product of the four-momenta of `a` and `b`, signature `(+, -, -, -)`.
///
/// `E_a * E_b - (px_a * px_b + py_a * py_b + pz_a * pz_b)`. Applied to a particle with itself
/// this is its invariant mass squared.
///
/// # Errors
///
/// Returns [`ParticleError::EmptyParticle`](super::error::ParticleError::EmptyParticle) if
/// either operand has been moved from.
pub fn dot(a: &Particle, b: &Particle) -> Result<f64> {
    let p = a.four_momentum()?;
    let q = b.four_momentum()?;
    Ok(p[ENERGY] * q[ENERGY] - (p[PX] * q[PX] + p[PY] * q[PY] + p[PZ] * q[PZ]))
}

impl Add for &Particle {
    type Output = Result<FourMomentum>;

    fn add(self, rhs: &Particle) -> Self::Output {
        sum(self, rhs)
    }
}
