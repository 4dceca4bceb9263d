use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParticleError>;

/// Coarse classification of a [`ParticleError`].
///
/// Callers that only care about which class of contract was violated (a bad argument, a bad
/// index, or use of a particle that no longer owns a four-momentum) can match on this instead
/// of on the individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    IndexOutOfRange,
    EmptyParticleAccess,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParticleError {
    #[error("invalid particle type: '{species}'; must be 'e', 'mu', or 'tau'")]
    InvalidSpecies { species: String },

    #[error(
        "energy out of range: {energy} (must be non-negative and no greater than the speed of light, 3E8)"
    )]
    EnergyOutOfRange { energy: f64 },

    #[error("index {index} out of range for a sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("operated on empty particle")]
    EmptyParticle,
}

impl ParticleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParticleError::InvalidSpecies { .. } | ParticleError::EnergyOutOfRange { .. } => {
                ErrorKind::InvalidArgument
            }
            ParticleError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            ParticleError::EmptyParticle => ErrorKind::EmptyParticleAccess,
        }
    }
}
