mod builder;
mod defaults;
mod file;
mod models;

pub use builder::build_deck;
pub use models::{Deck, PairOperation, PairSpec, ParticleSpec};
