//! # Core Models Module
//!
//! Data structures describing a single particle.
//!
//! - [`species`] - The closed set of recognized particle kinds and their symbols
//! - [`particle`] - The particle value type, owning its four-momentum
//!
//! ## Usage
//!
//! ```
//! use leptons::core::models::{particle::Particle, species::Species};
//!
//! let mut muon = Particle::new("mu", 105.66, &[0.0, 1.0, 0.0])?;
//! assert_eq!(muon.species(), Species::Muon);
//!
//! let moved = muon.take();
//! assert!(muon.is_empty());
//! assert_eq!(moved.energy()?, 105.66);
//! # Ok::<(), leptons::ParticleError>(())
//! ```

pub mod particle;
pub mod species;
