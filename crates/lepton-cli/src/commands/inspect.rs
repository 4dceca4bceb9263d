use crate::cli::InspectArgs;
use crate::config::{self, Deck, PairOperation};
use crate::error::{CliError, Result};
use crate::ui::{SEPARATOR, format_four_vector, format_number};
use leptons::{Particle, dot, sum};
use std::collections::HashMap;
use std::io::Write;
use tracing::{error, info};

pub fn run(args: InspectArgs) -> Result<()> {
    info!("Building particle deck from {:?}", &args.config);
    let deck = config::build_deck(&args)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&deck, &mut out)
}

pub fn write_report<W: Write>(deck: &Deck, out: &mut W) -> Result<()> {
    let mut particles: HashMap<&str, Particle> = HashMap::with_capacity(deck.particles.len());

    for spec in &deck.particles {
        let particle = spec
            .build()
            .inspect_err(|e| error!("Failed to build particle '{}': {}", spec.label, e))?;

        writeln!(out, "{}", particle.describe(&spec.label)?)?;
        let rest_mass = particle.species().rest_mass();
        writeln!(
            out,
            "  invariant mass^2 = {} MeV^2 (nominal {} rest mass^2 = {} MeV^2)",
            format_number(particle.invariant_mass_squared()?),
            particle.species(),
            format_number(rest_mass * rest_mass)
        )?;

        particles.insert(spec.label.as_str(), particle);
    }

    if deck.pairs.is_empty() {
        return Ok(());
    }

    writeln!(out, "{SEPARATOR}")?;
    for pair in &deck.pairs {
        let left = lookup(&particles, &pair.left)?;
        let right = lookup(&particles, &pair.right)?;

        match pair.operation {
            PairOperation::Sum => writeln!(
                out,
                "sum({}, {}) = {}",
                pair.left,
                pair.right,
                format_four_vector(&sum(left, right)?)
            )?,
            PairOperation::Dot => writeln!(
                out,
                "dot({}, {}) = {}",
                pair.left,
                pair.right,
                format_number(dot(left, right)?)
            )?,
        }
    }

    Ok(())
}

fn lookup<'a>(particles: &'a HashMap<&str, Particle>, label: &str) -> Result<&'a Particle> {
    particles
        .get(label)
        .ok_or_else(|| CliError::Config(format!("Unknown particle label '{}'", label)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PairSpec, ParticleSpec};
    use leptons::ParticleError;

    fn spec(label: &str, species: &str, energy: f64, momentum: &[f64]) -> ParticleSpec {
        ParticleSpec {
            label: label.to_string(),
            species: species.parse().unwrap(),
            energy,
            momentum: momentum.to_vec(),
            charge: None,
            conjugate: false,
        }
    }

    fn report(deck: &Deck) -> Result<String> {
        let mut buffer = Vec::new();
        write_report(deck, &mut buffer)?;
        Ok(String::from_utf8(buffer).unwrap())
    }

    #[test]
    fn describes_particles_with_mass_check() {
        let deck = Deck {
            particles: vec![spec("mu1", "mu", 105.66, &[0.0, 0.0, 0.0])],
            pairs: vec![],
        };

        let output = report(&deck).unwrap();
        let mut lines = output.lines();
        assert_eq!(
            lines.next(),
            Some("mu1: [type,charge,E,px,py,pz] = [mu,-1,106,0,0,0]")
        );
        let mass_line =
            "  invariant mass^2 = 1.12e+04 MeV^2 (nominal mu rest mass^2 = 1.12e+04 MeV^2)";
        assert_eq!(lines.next(), Some(mass_line));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn evaluates_sum_and_dot_pairs() {
        let deck = Deck {
            particles: vec![
                spec("e1", "e", 0.51099, &[1.0, 0.0, 0.0]),
                spec("e2", "e", 0.51099, &[1.0, 0.0, 0.0]),
            ],
            pairs: vec![
                PairSpec {
                    left: "e1".to_string(),
                    right: "e2".to_string(),
                    operation: PairOperation::Sum,
                },
                PairSpec {
                    left: "e1".to_string(),
                    right: "e1".to_string(),
                    operation: PairOperation::Dot,
                },
            ],
        };

        let output = report(&deck).unwrap();
        assert!(output.contains(SEPARATOR));
        assert!(output.lines().any(|l| l == "sum(e1, e2) = [1.02, 2, 0, 0]"));
        assert!(output.lines().any(|l| l == "dot(e1, e1) = -0.739"));
    }

    #[test]
    fn charge_override_and_conjugation_are_applied() {
        let mut tau = spec("t", "tau", 1776.9, &[0.0, 0.0, 0.0]);
        tau.charge = Some(2);
        tau.conjugate = true;
        let deck = Deck {
            particles: vec![tau],
            pairs: vec![],
        };

        let output = report(&deck).unwrap();
        assert!(output.starts_with("t: [type,charge,E,px,py,pz] = [tau,-2,"));
    }

    #[test]
    fn invalid_particle_propagates_particle_error() {
        let deck = Deck {
            particles: vec![spec("bad", "e", -1.0, &[0.0, 0.0, 0.0])],
            pairs: vec![],
        };

        assert!(matches!(
            report(&deck),
            Err(CliError::Particle(ParticleError::EnergyOutOfRange { .. }))
        ));
    }

    #[test]
    fn short_momentum_propagates_index_error() {
        let deck = Deck {
            particles: vec![spec("short", "mu", 1.0, &[0.0])],
            pairs: vec![],
        };

        assert!(matches!(
            report(&deck),
            Err(CliError::Particle(ParticleError::IndexOutOfRange { .. }))
        ));
    }

    #[test]
    fn sample_deck_runs_end_to_end() {
        let path =
            std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../decks/leptons.toml");
        let deck = config::build_deck(&InspectArgs {
            config: path,
            set_values: vec!["particle.muon1.conjugate=true".to_string()],
        })
        .unwrap();

        let output = report(&deck).unwrap();
        for expected in [
            "positron1: [type,charge,E,px,py,pz] = [e,1,0.511,-1,0,0]",
            "muon1: [type,charge,E,px,py,pz] = [mu,1,106,0,1,0]",
            "tau-at-rest: [type,charge,E,px,py,pz] = [tau,-1,1.78e+03,0,0,0]",
        ] {
            assert!(output.contains(expected), "missing line: {expected}");
        }
        assert!(
            output
                .lines()
                .any(|l| l == "sum(electron1, positron1) = [1.02, 0, 0, 0]")
        );
        assert!(output.lines().any(|l| l == "dot(muon1, muon1) = 1.12e+04"));
    }

    #[test]
    fn pair_with_missing_label_is_a_config_error() {
        let deck = Deck {
            particles: vec![spec("e1", "e", 0.51099, &[1.0, 0.0, 0.0])],
            pairs: vec![PairSpec {
                left: "e1".to_string(),
                right: "nobody".to_string(),
                operation: PairOperation::Dot,
            }],
        };

        assert!(matches!(report(&deck), Err(CliError::Config(_))));
    }
}
