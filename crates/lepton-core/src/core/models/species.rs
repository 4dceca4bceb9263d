use crate::core::constants::{ELECTRON_MASS, LEPTON_CHARGE, MUON_MASS, TAU_MASS};
use crate::core::error::ParticleError;
use phf::{Map, phf_map};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

static SPECIES_BY_SYMBOL: Map<&'static str, Species> = phf_map! {
    "e" => Species::Electron,
    "mu" => Species::Muon,
    "tau" => Species::Tau,
    "ghost" => Species::Ghost,
};

/// The kind of particle a [`Particle`](super::particle::Particle) represents.
///
/// Only the three charged leptons are recognized. `Ghost` is the sentinel carried by
/// default-constructed and moved-from particles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Species {
    /// Electron (`"e"`).
    Electron,
    /// Muon (`"mu"`).
    Muon,
    /// Tau (`"tau"`).
    Tau,
    /// Placeholder with no identity (`"ghost"`).
    #[default]
    Ghost,
}

impl Species {
    /// The short symbol used on input and in printed output.
    pub fn symbol(&self) -> &'static str {
        match self {
            Species::Electron => "e",
            Species::Muon => "mu",
            Species::Tau => "tau",
            Species::Ghost => "ghost",
        }
    }

    pub fn is_lepton(&self) -> bool {
        !matches!(self, Species::Ghost)
    }

    /// Charge assigned at construction, in elementary charge units.
    pub fn default_charge(&self) -> i32 {
        if self.is_lepton() { LEPTON_CHARGE } else { 0 }
    }

    /// Nominal rest mass in MeV.
    pub fn rest_mass(&self) -> f64 {
        match self {
            Species::Electron => ELECTRON_MASS,
            Species::Muon => MUON_MASS,
            Species::Tau => TAU_MASS,
            Species::Ghost => 0.0,
        }
    }

    /// Parses a symbol, accepting only the charged leptons.
    ///
    /// # Errors
    ///
    /// Returns [`ParticleError::InvalidSpecies`] for `"ghost"` and for any unknown symbol.
    pub fn parse_lepton(symbol: &str) -> Result<Self, ParticleError> {
        match symbol.parse::<Species>()? {
            Species::Ghost => Err(ParticleError::InvalidSpecies {
                species: symbol.to_string(),
            }),
            lepton => Ok(lepton),
        }
    }
}

impl FromStr for Species {
    type Err = ParticleError;

    /// Parses one of `"e"`, `"mu"`, `"tau"` or `"ghost"`. Matching is exact and
    /// case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SPECIES_BY_SYMBOL
            .get(s)
            .copied()
            .ok_or_else(|| ParticleError::InvalidSpecies {
                species: s.to_string(),
            })
    }
}

impl TryFrom<String> for Species {
    type Error = ParticleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_parses_all_recognized_symbols() {
        assert_eq!(Species::from_str("e"), Ok(Species::Electron));
        assert_eq!(Species::from_str("mu"), Ok(Species::Muon));
        assert_eq!(Species::from_str("tau"), Ok(Species::Tau));
        assert_eq!(Species::from_str("ghost"), Ok(Species::Ghost));
    }

    #[test]
    fn from_str_is_case_sensitive_and_rejects_unknown_symbols() {
        for bad in ["E", "Mu", "Ghost", "proton", "", " e"] {
            let err = Species::from_str(bad).unwrap_err();
            assert_eq!(
                err,
                ParticleError::InvalidSpecies {
                    species: bad.to_string()
                }
            );
        }
    }

    #[test]
    fn symbol_round_trips_through_display() {
        for species in [Species::Electron, Species::Muon, Species::Tau, Species::Ghost] {
            assert_eq!(species.to_string().parse::<Species>(), Ok(species));
        }
    }

    #[test]
    fn leptons_default_to_negative_unit_charge() {
        assert_eq!(Species::Electron.default_charge(), -1);
        assert_eq!(Species::Muon.default_charge(), -1);
        assert_eq!(Species::Tau.default_charge(), -1);
        assert_eq!(Species::Ghost.default_charge(), 0);
    }

    #[test]
    fn default_species_is_ghost() {
        assert_eq!(Species::default(), Species::Ghost);
        assert!(!Species::Ghost.is_lepton());
    }

    #[test]
    fn rest_masses_follow_lepton_ordering() {
        assert_eq!(Species::Ghost.rest_mass(), 0.0);
        assert!(Species::Electron.rest_mass() < Species::Muon.rest_mass());
        assert!(Species::Muon.rest_mass() < Species::Tau.rest_mass());
    }

    #[test]
    fn parse_lepton_rejects_ghost() {
        assert_eq!(Species::parse_lepton("tau"), Ok(Species::Tau));
        assert!(matches!(
            Species::parse_lepton("ghost"),
            Err(ParticleError::InvalidSpecies { .. })
        ));
    }

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        species: Species,
    }

    #[test]
    fn deserialize_validates_symbol() {
        let ok: Wrapper = toml::from_str("species = \"mu\"").unwrap();
        assert_eq!(ok.species, Species::Muon);

        let bad = toml::from_str::<Wrapper>("species = \"pion\"");
        assert!(bad.is_err());
        assert!(bad.unwrap_err().to_string().contains("invalid particle type"));
    }
}
