pub struct DefaultsConfig {
    pub momentum: Vec<f64>,
    pub conjugate: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            momentum: vec![0.0, 0.0, 0.0],
            conjugate: false,
        }
    }
}
