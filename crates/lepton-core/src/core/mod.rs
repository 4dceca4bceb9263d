//! # Core Module
//!
//! The building blocks of the library: physical constants, the particle data model, the
//! four-momentum arithmetic defined over it, and the text rendering used when a particle is
//! described on the console.
//!
//! ## Architecture
//!
//! - **Constants** ([`constants`]) - The speed of light, lepton rest masses and lepton charge
//! - **Errors** ([`error`]) - The [`ParticleError`](error::ParticleError) type and its coarse [`ErrorKind`](error::ErrorKind)
//! - **Models** ([`models`]) - [`Species`](models::species::Species) and [`Particle`](models::particle::Particle)
//! - **Kinematics** ([`kinematics`]) - Vector sum and Minkowski dot product of two particles
//! - **Formatting** ([`format`]) - Significant-figure rendering of floating-point fields

pub mod constants;
pub mod error;
pub mod format;
pub mod kinematics;
pub mod models;
