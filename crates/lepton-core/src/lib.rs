//! # Leptons Core Library
//!
//! A small library for modelling point-like leptons through their special-relativistic
//! four-momentum `[E, px, py, pz]`, expressed in MeV/c.
//!
//! ## Overview
//!
//! - **[`core::models`]** defines the [`Species`] of a particle and the [`Particle`] value
//!   type itself, which owns its four-momentum buffer and exposes explicit copy
//!   ([`Clone`]) and move ([`Particle::take`], [`Particle::assign_from`]) semantics.
//! - **[`core::kinematics`]** provides the binary operations over pairs of particles: the
//!   component-wise vector [`sum`] and the Lorentz-invariant [`dot`] product with metric
//!   signature `(+, -, -, -)`.
//! - **[`core::format`]** renders numbers to a fixed count of significant figures in the
//!   style of `printf("%g")`, which is the format used by [`Particle::describe`].
//! - **[`core::error`]** holds the single error type, [`ParticleError`].
//!
//! ## Usage
//!
//! ```
//! use leptons::{Particle, dot, sum};
//!
//! let electron = Particle::new("e", 0.51099, &[1.0, 0.0, 0.0])?;
//! let positron = {
//!     let mut p = electron.clone();
//!     p.charge_conjugate();
//!     p
//! };
//!
//! assert_eq!(positron.charge(), 1);
//! assert_eq!(sum(&electron, &positron)?[1], 2.0);
//! assert!(dot(&electron, &electron)? < 0.0);
//! # Ok::<(), leptons::ParticleError>(())
//! ```

pub mod core;

pub use crate::core::constants;
pub use crate::core::error::{ErrorKind, ParticleError, Result};
pub use crate::core::format::format_significant;
pub use crate::core::kinematics::{ENERGY, FourMomentum, PX, PY, PZ, dot, sum};
pub use crate::core::models::particle::Particle;
pub use crate::core::models::species::Species;
