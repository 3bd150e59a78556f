use std::fmt::{self, Display, Formatter};

use serde_derive::Serialize;

/// A metric value: counts stay integral, means and altitudes are floats. Serialized as a
/// bare number.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl From<usize> for Number {
    fn from(n: usize) -> Self {
        Self::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

/// Floats are printed with at most six decimals, trailing zeros dropped, and always keep one
/// decimal so they read differently from counts.
impl Display for Number {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(formatter, "{i}"),
            Self::Float(f) if !f.is_finite() => write!(formatter, "{f}"),
            Self::Float(f) => {
                let fixed = format!("{f:.6}");
                let trimmed = fixed.trim_end_matches('0');
                let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);

                match trimmed {
                    "-0" => write!(formatter, "0.0"),
                    t if t.contains('.') => write!(formatter, "{t}"),
                    t => write!(formatter, "{t}.0"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Number::from(12usize).to_string(), "12");
        assert_eq!(Number::from(10.0).to_string(), "10.0");
        assert_eq!(Number::from(2.5).to_string(), "2.5");
        assert_eq!(Number::from(1.0 / 3.0).to_string(), "0.333333");
        assert_eq!(Number::from(-4.25).to_string(), "-4.25");
        assert_eq!(Number::from(-0.0000001).to_string(), "0.0");
    }
}
