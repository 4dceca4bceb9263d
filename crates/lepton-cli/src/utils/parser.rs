use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    MissingEquals(String),

    #[error("Unsupported configuration key for --set: '{0}'. Expected 'particle.<label>.<field>'.")]
    UnsupportedKey(String),

    #[error(
        "Unknown particle field '{field}' in '{key}'. Expected one of: energy, px, py, pz, charge, conjugate."
    )]
    UnknownField { field: String, key: String },

    #[error("Component '{component}' cannot be empty in key '{key}'.")]
    EmptyComponent {
        component: &'static str,
        key: String,
    },
}

/// A particle field that can be overridden from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleField {
    Energy,
    Px,
    Py,
    Pz,
    Charge,
    Conjugate,
}

impl FromStr for ParticleField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "energy" => Ok(ParticleField::Energy),
            "px" => Ok(ParticleField::Px),
            "py" => Ok(ParticleField::Py),
            "pz" => Ok(ParticleField::Pz),
            "charge" => Ok(ParticleField::Charge),
            "conjugate" => Ok(ParticleField::Conjugate),
            _ => Err(()),
        }
    }
}

/// One `particle.<label>.<field>=<value>` override. The value is kept as text and
/// converted once the field's type is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetValue {
    pub label: String,
    pub field: ParticleField,
    pub value: String,
}

pub fn parse_set_value(raw: &str) -> Result<SetValue, ParseError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| ParseError::MissingEquals(raw.to_string()))?;
    let key = key.trim();

    let path = key
        .strip_prefix("particle.")
        .ok_or_else(|| ParseError::UnsupportedKey(key.to_string()))?;
    // Labels may themselves contain dots; the field is always the last segment.
    let (label, field) = path
        .rsplit_once('.')
        .ok_or_else(|| ParseError::UnsupportedKey(key.to_string()))?;

    if label.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "label",
            key: key.to_string(),
        });
    }
    if field.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "field",
            key: key.to_string(),
        });
    }

    let field = field.parse().map_err(|_| ParseError::UnknownField {
        field: field.to_string(),
        key: key.to_string(),
    })?;

    Ok(SetValue {
        label: label.to_string(),
        field,
        value: value.trim().to_string(),
    })
}
