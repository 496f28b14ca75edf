use std::str::FromStr;

use anyhow::anyhow;

use crate::format::{human_readable_number, to_string_fully_specified};

/// Which power the scaler steps by, and which prefix table big values use.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum UnitSystem {
    /// Powers of 1000 with SI prefixes (`k`, `M`, ...).
    #[default]
    SI,
    /// Powers of 1024 with IEC prefixes (`Ki`, `Mi`, ...).
    Binary,
}

impl UnitSystem {
    pub const SI_BASE: f64 = 1000.0;
    pub const BINARY_BASE: f64 = 1024.0;

    pub fn base(&self) -> f64 {
        match self {
            Self::SI => Self::SI_BASE,
            Self::Binary => Self::BINARY_BASE,
        }
    }

    pub fn is_iec(&self) -> bool {
        matches!(self, Self::Binary)
    }

    pub fn format(&self, value: f64) -> String {
        human_readable_number(value, *self)
    }

    pub fn format_with_precision(&self, value: f64, precision: i32) -> String {
        to_string_fully_specified(value, precision, *self)
    }
}

impl FromStr for UnitSystem {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "si" | "decimal" | "1000" => Ok(Self::SI),
            "binary" | "bin" | "iec" | "1024" => Ok(Self::Binary),
            _ => Err(anyhow!("Invalid value for UnitSystem: {}", s)),
        }
    }
}
