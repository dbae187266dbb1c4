//! Boundary conditions of a surface.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use wavefield_core::ArgumentError;

/// How the edges of a surface treat outgoing waves.
///
/// ```
/// use wavefield_surface::BoundaryCondition;
///
/// let bc: BoundaryCondition = "3".parse().unwrap();
/// assert_eq!(bc, BoundaryCondition::ReflectionDepth(3));
/// assert_eq!("free".parse::<BoundaryCondition>().unwrap().reflection_depth(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoundaryCondition {
    /// Waves leave the domain; no image sources.
    #[default]
    Transparent,
    /// One generation of in-phase reflections.
    Free,
    /// The given number of reflection generations.
    ReflectionDepth(u32),
}

impl BoundaryCondition {
    /// Number of image-source generations to expand.
    pub fn reflection_depth(self) -> u32 {
        match self {
            Self::Transparent => 0,
            Self::Free => 1,
            Self::ReflectionDepth(n) => n,
        }
    }
}

impl FromStr for BoundaryCondition {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "transparent" => Ok(Self::Transparent),
            "free" => Ok(Self::Free),
            _ => trimmed
                .parse::<u32>()
                .map(Self::ReflectionDepth)
                .map_err(|_| ArgumentError::UnknownBoundaryCondition {
                    input: s.to_string(),
                }),
        }
    }
}

impl fmt::Display for BoundaryCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transparent => f.write_str("transparent"),
            Self::Free => f.write_str("free"),
            Self::ReflectionDepth(n) => write!(f, "{n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_form() {
        assert_eq!(
            " Transparent ".parse::<BoundaryCondition>().unwrap(),
            BoundaryCondition::Transparent
        );
        assert_eq!(
            "0".parse::<BoundaryCondition>().unwrap(),
            BoundaryCondition::ReflectionDepth(0)
        );
        assert!(matches!(
            "-1".parse::<BoundaryCondition>(),
            Err(ArgumentError::UnknownBoundaryCondition { .. })
        ));
        assert!("rigid".parse::<BoundaryCondition>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for bc in [
            BoundaryCondition::Transparent,
            BoundaryCondition::Free,
            BoundaryCondition::ReflectionDepth(4),
        ] {
            assert_eq!(bc.to_string().parse::<BoundaryCondition>().unwrap(), bc);
        }
    }

    #[test]
    fn default_is_transparent() {
        assert_eq!(BoundaryCondition::default().reflection_depth(), 0);
    }
}
