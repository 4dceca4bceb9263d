use super::defaults::DefaultsConfig;
use super::file::FileDeck;
use super::models::{Deck, PairSpec, ParticleSpec};
use crate::cli::InspectArgs;
use crate::error::{CliError, Result};
use std::collections::HashSet;
use tracing::debug;

pub fn build_deck(args: &InspectArgs) -> Result<Deck> {
    let defaults = DefaultsConfig::default();

    let mut file_deck = FileDeck::from_file(&args.config)?;
    file_deck.apply_set_values(&args.set_values)?;

    if file_deck.particles.is_empty() {
        return Err(CliError::Config(format!(
            "Deck '{}' defines no particles",
            args.config.display()
        )));
    }

    let file_defaults = file_deck.defaults.take().unwrap_or_default();
    let default_momentum = file_defaults
        .momentum
        .unwrap_or_else(|| defaults.momentum.clone());
    let default_conjugate = file_defaults.conjugate.unwrap_or(defaults.conjugate);

    let mut labels = HashSet::new();
    let mut particles = Vec::with_capacity(file_deck.particles.len());
    for entry in file_deck.particles {
        if !labels.insert(entry.label.clone()) {
            return Err(CliError::Config(format!(
                "Duplicate particle label '{}'",
                entry.label
            )));
        }

        // Particles without an explicit energy start at their nominal rest mass.
        let energy = entry.energy.unwrap_or_else(|| entry.species.rest_mass());

        let mut momentum = entry
            .momentum
            .unwrap_or_else(|| default_momentum.clone());
        entry.component_overrides.apply(&mut momentum);

        particles.push(ParticleSpec {
            label: entry.label,
            species: entry.species,
            energy,
            momentum,
            charge: entry.charge,
            conjugate: entry.conjugate.unwrap_or(default_conjugate),
        });
    }

    let pairs = file_deck
        .pairs
        .into_iter()
        .map(|pair| {
            for label in [&pair.left, &pair.right] {
                if !labels.contains(label) {
                    return Err(CliError::Config(format!(
                        "Pair '{} {} {}' references unknown particle label '{}'",
                        pair.operation, pair.left, pair.right, label
                    )));
                }
            }
            Ok(PairSpec {
                left: pair.left,
                right: pair.right,
                operation: pair.operation,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "Resolved deck with {} particle(s) and {} pair(s).",
        particles.len(),
        pairs.len()
    );

    Ok(Deck { particles, pairs })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PairOperation;
    use leptons::{ParticleError, Species};
    use std::path::{Path, PathBuf};

    fn write_deck(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("deck.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    fn args(config: PathBuf, set_values: &[&str]) -> InspectArgs {
        InspectArgs {
            config,
            set_values: set_values.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn file_values_are_merged_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_deck(
            dir.path(),
            r#"
[[particle]]
label = "e1"
species = "e"
energy = 0.51099
momentum = [1.0, 0.0, 0.0]

[[particle]]
label = "tau1"
species = "tau"
"#,
        );

        let deck = build_deck(&args(path, &[])).unwrap();

        assert_eq!(deck.particles[0].energy, 0.51099);
        assert_eq!(deck.particles[0].momentum, vec![1.0, 0.0, 0.0]);
        assert!(!deck.particles[0].conjugate);

        assert_eq!(deck.particles[1].energy, 1776.9);
        assert_eq!(deck.particles[1].momentum, vec![0.0, 0.0, 0.0]);
        assert!(deck.pairs.is_empty());
    }

    #[test]
    fn deck_defaults_override_built_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_deck(
            dir.path(),
            r#"
[defaults]
momentum = [0.0, 2.0, 0.0]
conjugate = true

[[particle]]
label = "mu1"
species = "mu"

[[particle]]
label = "mu2"
species = "mu"
conjugate = false
"#,
        );

        let deck = build_deck(&args(path, &[])).unwrap();

        assert_eq!(deck.particles[0].momentum, vec![0.0, 2.0, 0.0]);
        assert!(deck.particles[0].conjugate);
        assert!(!deck.particles[1].conjugate);
    }

    #[test]
    fn set_values_override_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_deck(
            dir.path(),
            r#"
[[particle]]
label = "e1"
species = "e"
energy = 0.51099
momentum = [1.0, 0.0, 0.0]
"#,
        );

        let deck = build_deck(&args(
            path,
            &["particle.e1.energy=3", "particle.e1.conjugate=true"],
        ))
        .unwrap();

        assert_eq!(deck.particles[0].energy, 3.0);
        assert!(deck.particles[0].conjugate);
        let particle = deck.particles[0].build().unwrap();
        assert_eq!(particle.charge(), 1);
    }

    #[test]
    fn pairs_are_resolved_against_labels() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_deck(
            dir.path(),
            r#"
[[particle]]
label = "a"
species = "e"

[[particle]]
label = "b"
species = "mu"

[[pair]]
left = "a"
right = "b"
operation = "sum"
"#,
        );

        let deck = build_deck(&args(path, &[])).unwrap();
        assert_eq!(
            deck.pairs,
            vec![PairSpec {
                left: "a".to_string(),
                right: "b".to_string(),
                operation: PairOperation::Sum,
            }]
        );
    }

    #[test]
    fn pair_with_unknown_label_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_deck(
            dir.path(),
            r#"
[[particle]]
label = "a"
species = "e"

[[pair]]
left = "a"
right = "ghost-of-b"
operation = "dot"
"#,
        );

        let err = build_deck(&args(path, &[])).unwrap_err();
        assert!(matches!(err, CliError::Config(ref msg) if msg.contains("ghost-of-b")));
    }

    #[test]
    fn duplicate_labels_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_deck(
            dir.path(),
            r#"
[[particle]]
label = "a"
species = "e"

[[particle]]
label = "a"
species = "mu"
"#,
        );

        assert!(matches!(
            build_deck(&args(path, &[])),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn empty_deck_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_deck(dir.path(), "");
        assert!(matches!(
            build_deck(&args(path, &[])),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn component_override_keeps_deck_default_momentum() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_deck(
            dir.path(),
            r#"
[defaults]
momentum = [0.0, 2.0, 3.0]

[[particle]]
label = "mu1"
species = "mu"
"#,
        );

        let deck = build_deck(&args(path, &["particle.mu1.px=5"])).unwrap();

        assert_eq!(deck.particles[0].species, Species::Muon);
        assert_eq!(deck.particles[0].momentum, vec![5.0, 2.0, 3.0]);
    }

    #[test]
    fn component_override_on_file_momentum_replaces_one_component() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_deck(
            dir.path(),
            r#"
[defaults]
momentum = [9.0, 9.0, 9.0]

[[particle]]
label = "e1"
species = "e"
momentum = [1.0, 0.0, 0.0]
"#,
        );

        let deck = build_deck(&args(path, &["particle.e1.pz=-4", "particle.e1.py=0.5"])).unwrap();
        assert_eq!(deck.particles[0].momentum, vec![1.0, 0.5, -4.0]);
    }

    #[test]
    fn component_override_does_not_pad_a_short_momentum() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_deck(
            dir.path(),
            r#"
[[particle]]
label = "e1"
species = "e"
momentum = [1.0]
"#,
        );

        let deck = build_deck(&args(path, &["particle.e1.pz=2"])).unwrap();
        assert_eq!(deck.particles[0].momentum, vec![1.0]);
        assert_eq!(
            deck.particles[0].build().unwrap_err(),
            ParticleError::IndexOutOfRange { index: 1, len: 1 }
        );
    }

    #[test]
    fn unknown_species_is_a_file_parsing_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_deck(
            dir.path(),
            r#"
[[particle]]
label = "p"
species = "proton"
"#,
        );

        let err = build_deck(&args(path, &[])).unwrap_err();
        assert!(matches!(err, CliError::FileParsing { .. }));
        assert!(err.to_string().contains("proton"));
    }
}
