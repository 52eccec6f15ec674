//! Project metadata - the coarse inputs a schedule is computed from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{UnknownVariant, ValidationError};

/// Kind of video production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// Corporate / company profile video
    Corporate,
    /// Advertising and campaign content
    Marketing,
    /// Lectures and training material
    Education,
    /// Drama, music video and other entertainment content
    Entertainment,
}

impl ProjectType {
    /// All project types, in table order.
    pub const ALL: [ProjectType; 4] = [
        ProjectType::Corporate,
        ProjectType::Marketing,
        ProjectType::Education,
        ProjectType::Entertainment,
    ];

    /// Wire name of this project type.
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::Corporate => "corporate",
            ProjectType::Marketing => "marketing",
            ProjectType::Education => "education",
            ProjectType::Entertainment => "entertainment",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "corporate" => Ok(ProjectType::Corporate),
            "marketing" => Ok(ProjectType::Marketing),
            "education" => Ok(ProjectType::Education),
            "entertainment" => Ok(ProjectType::Entertainment),
            other => Err(UnknownVariant::new(
                "project type",
                other,
                "corporate, marketing, education, entertainment",
            )),
        }
    }
}

/// Declared complexity of a production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    /// Few locations, simple edit
    Simple,
    /// The baseline
    #[default]
    Medium,
    /// Many locations, heavy post-production
    Complex,
}

impl Complexity {
    /// Wire name of this complexity.
    pub fn as_str(self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Medium => "medium",
            Complexity::Complex => "complex",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Complexity {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(Complexity::Simple),
            "medium" => Ok(Complexity::Medium),
            "complex" => Ok(Complexity::Complex),
            other => Err(UnknownVariant::new(
                "complexity",
                other,
                "simple, medium, complex",
            )),
        }
    }
}

/// Number of people on the production team, always within `[1, 50]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TeamSize(u8);

impl TeamSize {
    /// Smallest accepted team.
    pub const MIN: u32 = 1;
    /// Largest accepted team.
    pub const MAX: u32 = 50;

    /// Create a team size, rejecting values outside `[1, 50]`.
    pub fn new(size: u32) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&size) {
            Ok(Self(size as u8))
        } else {
            Err(ValidationError::new(
                "teamSize",
                format!(
                    "teamSize must be between {} and {}, got {}",
                    Self::MIN,
                    Self::MAX,
                    size
                ),
            ))
        }
    }

    /// The number of people.
    pub fn get(self) -> u32 {
        u32::from(self.0)
    }
}

impl Default for TeamSize {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<u32> for TeamSize {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TeamSize> for u32 {
    fn from(size: TeamSize) -> Self {
        size.get()
    }
}

impl fmt::Display for TeamSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TeamSize {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let size: u32 = s.trim().parse().map_err(|_| {
            ValidationError::new("teamSize", format!("teamSize must be an integer, got '{s}'"))
        })?;
        Self::new(size)
    }
}
