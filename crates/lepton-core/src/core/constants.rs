//! Physical constants used by the particle model.

/// Speed of light (m/s).
///
/// Also used as the upper bound on particle energy (MeV). The units do not agree; the bound
/// is kept at this exact literal.
pub const LIGHT_SPEED: f64 = 2.99792458e8;

/// Electron rest mass (MeV).
pub const ELECTRON_MASS: f64 = 0.51099;

/// Muon rest mass (MeV).
pub const MUON_MASS: f64 = 105.66;

/// Tau rest mass (MeV), known with larger uncertainty than the lighter leptons.
pub const TAU_MASS: f64 = 1776.9;

/// Charge of a charged lepton in units of the elementary charge.
pub const LEPTON_CHARGE: i32 = -1;
