use crate::error::Result;
use crate::ui::{SEPARATOR, format_four_vector, format_number};
use leptons::Particle;
use leptons::constants::{ELECTRON_MASS, MUON_MASS};
use std::io::Write;
use tracing::{debug, info};

const EMPTY_AFTER_MOVE: &str = "Code has detected original particle is empty after moving";

pub fn run() -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_demo(&mut out)
}

pub fn write_demo<W: Write>(out: &mut W) -> Result<()> {
    info!("Constructing demonstration particles...");

    let three_momentum_electron = [1.0, 0.0, 0.0];
    let electron1 = Particle::new("e", ELECTRON_MASS, &three_momentum_electron)?;
    let electron2 = Particle::new("e", ELECTRON_MASS, &three_momentum_electron)?;

    let three_momentum_muon = [0.0, 1.0, 0.0];
    let muon1 = Particle::new("mu", MUON_MASS, &three_momentum_muon)?;
    let muon2 = Particle::new("mu", MUON_MASS, &three_momentum_muon)?;
    let muon3 = Particle::new("mu", MUON_MASS, &three_momentum_muon)?;
    let muon4 = Particle::new("mu", MUON_MASS, &three_momentum_muon)?;

    let mut antielectron1 = Particle::new("e", ELECTRON_MASS, &three_momentum_electron)?;
    antielectron1.charge_conjugate();

    let mut antimuon1 = Particle::new("mu", MUON_MASS, &three_momentum_muon)?;
    antimuon1.charge_conjugate();

    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "Details of each instantiated particle:")?;
    let particles = [
        &electron1,
        &electron2,
        &muon1,
        &muon2,
        &muon3,
        &muon4,
        &antielectron1,
        &antimuon1,
    ];
    for (i, particle) in particles.iter().enumerate() {
        writeln!(out, "{}", particle.describe(&format!("Particle {}", i + 1))?)?;
    }

    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "4vector sum of the first two electrons:")?;
    let sum_electrons = &electron1 + &electron2;
    writeln!(out, "{}", format_four_vector(&sum_electrons?))?;

    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "4vector dot of the first two muons:")?;
    let dot_product_muons = muon1.dot_product(&muon2)?;
    debug!("Muon dot product (full precision): {}", dot_product_muons);
    writeln!(out, "Dot product: {}", format_number(dot_product_muons))?;

    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "Assignment operator of an electron to a new electron:")?;
    let mut new_electron = Particle::default();
    new_electron.clone_from(&electron1);
    writeln!(out, "{}", new_electron.describe("Copy by assignment new electron")?)?;
    writeln!(out, "{}", electron1.describe("Original Electron")?)?;

    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "Copy constructor of the first muon to a new muon:")?;
    let new_muon = muon1.clone();
    writeln!(out, "{}", new_muon.describe("Copy by construction new Muon")?)?;
    writeln!(out, "{}", muon1.describe("Original Muon")?)?;

    writeln!(out, "{SEPARATOR}")?;
    writeln!(
        out,
        "Move the antielectron into another antielectron using the move constructor:"
    )?;
    writeln!(out, "{}", antielectron1.describe("Old Anti-Electron")?)?;
    let new_antielectron = antielectron1.take();
    writeln!(out, "{}", new_antielectron.describe("New Anti-Electron")?)?;
    if antielectron1.is_empty() {
        writeln!(out, "{EMPTY_AFTER_MOVE}")?;
    }

    writeln!(out, "{SEPARATOR}")?;
    writeln!(
        out,
        "Assign the antimuon to another antimuon using the move assignment:"
    )?;
    writeln!(out, "{}", antimuon1.describe("Old Antimuon")?)?;
    let mut new_antimuon = Particle::default();
    new_antimuon.assign_from(&mut antimuon1);
    writeln!(out, "{}", new_antimuon.describe("New Anti-Muon")?)?;
    if antimuon1.is_empty() {
        writeln!(out, "{EMPTY_AFTER_MOVE}")?;
    }

    writeln!(out, "{SEPARATOR}")?;
    Ok(())
}
