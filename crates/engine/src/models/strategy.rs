use serde::{Deserialize, Serialize};
use std::convert::Infallible;

/// How the generator picks the numbers that are not fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum Strategy {
    #[default]
    Random,
    EvenOddBalanced,
    QuadrantDistributed,
    FrequencyWeighted,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::EvenOddBalanced => "even-odd-balanced",
            Self::QuadrantDistributed => "quadrant-distributed",
            Self::FrequencyWeighted => "frequency-weighted",
        }
    }

    pub fn all() -> &'static [Strategy] {
        &[
            Self::Random,
            Self::EvenOddBalanced,
            Self::QuadrantDistributed,
            Self::FrequencyWeighted,
        ]
    }

    /// Unknown names fall back to `Random`.
    pub fn from_name(name: &str) -> Self {
        let normalized = name.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "even-odd-balanced" | "even-odd" | "pares-impares" | "poles-impares" => {
                Self::EvenOddBalanced
            }
            "quadrant-distributed" | "quadrants" | "distribuida" => Self::QuadrantDistributed,
            "frequency-weighted" | "frequent" | "mais-sorteados" => Self::FrequencyWeighted,
            _ => Self::Random,
        }
    }
}

impl From<&str> for Strategy {
    fn from(value: &str) -> Self {
        Self::from_name(value)
    }
}

impl From<String> for Strategy {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl std::str::FromStr for Strategy {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
