use leptons::{FourMomentum, format_significant};

pub const SEPARATOR: &str = "=================================================";

/// Significant figures for every number the CLI prints.
pub const DISPLAY_PRECISION: usize = 3;

pub fn format_number(value: f64) -> String {
    format_significant(value, DISPLAY_PRECISION)
}

/// Renders a four-vector as `[E, px, py, pz]`.
pub fn format_four_vector(vector: &FourMomentum) -> String {
    let components: Vec<String> = vector.iter().map(|c| format_number(*c)).collect();
    format!("[{}]", components.join(", "))
}
