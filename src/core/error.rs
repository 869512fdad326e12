use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InvalidReason {
    NonFiniteInput,
    NonPositiveGravity(f64),
    NegativeSpeed(f64),
    /// vy^2 + 2*g*h went negative, so the projectile never reaches y = 0.
    NegativeDiscriminant(f64),
    NegativeFlightTime(f64),
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFiniteInput => write!(f, "inputs must be finite numbers"),
            Self::NonPositiveGravity(g) => write!(f, "gravity must be positive (got {g})"),
            Self::NegativeSpeed(v) => write!(f, "velocity cannot be negative (got {v})"),
            Self::NegativeDiscriminant(d) => {
                write!(f, "no real landing time: vy^2 + 2*g*h is negative ({d})")
            }
            Self::NegativeFlightTime(t) => {
                write!(f, "landing time computed as negative ({t})")
            }
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SimError {
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: InvalidReason },

    #[error("plot export failed: {0}")]
    Export(String),
}

impl SimError {
    pub fn invalid(reason: InvalidReason) -> Self {
        Self::InvalidConfiguration { reason }
    }

    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }
}
