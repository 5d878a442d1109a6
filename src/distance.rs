use crate::{ExofopError, ExofopResult};

/// Distance to a target, stored in parsecs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distance {
    parsecs: f64,
}

impl Distance {
    /// Placeholder used when the catalog carries no distance measurement.
    ///
    /// One milliparsec keeps downstream coordinate transforms well-defined
    /// (they require a positive distance) while being far closer than any
    /// real stellar target, so it is distinguishable in practice. Positions
    /// projected with this value are not physically meaningful.
    pub const UNKNOWN: Distance = Distance { parsecs: 1e-3 };

    /// Creates a Distance from parsecs.
    ///
    /// # Errors
    /// Returns `ExofopError::Validation` if the value is ≤0, infinite, or NaN.
    pub fn from_parsecs(parsecs: f64) -> ExofopResult<Self> {
        if !parsecs.is_finite() || parsecs <= 0.0 {
            return Err(ExofopError::validation(format!(
                "distance must be positive and finite, got {}",
                parsecs
            )));
        }
        Ok(Self { parsecs })
    }

    pub fn parsecs(self) -> f64 {
        self.parsecs
    }

    pub fn parallax_milliarcsec(self) -> f64 {
        1000.0 / self.parsecs
    }

    /// True when this is the [`Distance::UNKNOWN`] placeholder rather than a
    /// measured value.
    pub fn is_fallback(self) -> bool {
        self == Self::UNKNOWN
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.parsecs < 1000.0 {
            write!(f, "{:.3} pc", self.parsecs)
        } else {
            write!(f, "{:.3} kpc", self.parsecs / 1000.0)
        }
    }
}
