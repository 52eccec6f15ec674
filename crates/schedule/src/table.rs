//! Per-project-type base durations.
//!
//! Any phase of any project type can be overridden from a TOML file. Phases
//! left out keep their built-in ranges:
//!
//! ```toml
//! [marketing.shooting]
//! min = 1
//! max = 6
//! default = 4
//! ```
//!
//! Built-in minimums sit at or below the shortest duration the multipliers
//! can produce, so `min` bounds the table itself rather than the result.

use std::path::Path;

use serde::{Deserialize, Serialize};
use vridge_core::{PhaseKind, ProjectType};

/// Errors loading a duration table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// File could not be read
    #[error("failed to read duration table {path}: {source}")]
    Io {
        /// File that failed
        path: String,
        /// Underlying error
        source: std::io::Error,
    },

    /// File is not valid TOML for a table
    #[error("failed to parse duration table: {0}")]
    Parse(#[from] toml::de::Error),

    /// A range is inconsistent
    #[error("invalid duration range for {project_type}.{phase}: {reason}")]
    InvalidRange {
        /// Project type of the bad entry
        project_type: ProjectType,
        /// Phase of the bad entry
        phase: PhaseKind,
        /// What is wrong
        reason: String,
    },
}

/// Bounds and default for one phase, in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationRange {
    /// Lower bound
    pub min: u32,
    /// Upper bound unless the caller supplies a cap
    pub max: u32,
    /// Base value before multipliers
    pub default: u32,
}

impl DurationRange {
    /// Create a range.
    pub const fn new(min: u32, max: u32, default: u32) -> Self {
        Self { min, max, default }
    }

    fn check(&self) -> Result<(), String> {
        if self.min == 0 {
            return Err("min must be at least 1".into());
        }
        if self.min > self.max {
            return Err(format!("min {} exceeds max {}", self.min, self.max));
        }
        if !(self.min..=self.max).contains(&self.default) {
            return Err(format!(
                "default {} outside [{}, {}]",
                self.default, self.min, self.max
            ));
        }
        Ok(())
    }
}

/// Ranges for the three phases of one project type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseDurations {
    /// Pre-production
    pub planning: DurationRange,
    /// Camera days
    pub shooting: DurationRange,
    /// Post-production
    pub editing: DurationRange,
}

impl PhaseDurations {
    /// Range for one phase.
    pub fn get(&self, phase: PhaseKind) -> DurationRange {
        match phase {
            PhaseKind::Planning => self.planning,
            PhaseKind::Shooting => self.shooting,
            PhaseKind::Editing => self.editing,
        }
    }
}

/// Phases overridden for one project type.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PhaseOverrides {
    planning: Option<DurationRange>,
    shooting: Option<DurationRange>,
    editing: Option<DurationRange>,
}

impl PhaseOverrides {
    fn apply(self, base: PhaseDurations) -> PhaseDurations {
        PhaseDurations {
            planning: self.planning.unwrap_or(base.planning),
            shooting: self.shooting.unwrap_or(base.shooting),
            editing: self.editing.unwrap_or(base.editing),
        }
    }
}

/// Shape of a TOML override file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableOverrides {
    #[serde(default)]
    corporate: PhaseOverrides,
    #[serde(default)]
    marketing: PhaseOverrides,
    #[serde(default)]
    education: PhaseOverrides,
    #[serde(default)]
    entertainment: PhaseOverrides,
}

impl TableOverrides {
    fn apply(self, base: DurationTable) -> DurationTable {
        DurationTable {
            corporate: self.corporate.apply(base.corporate),
            marketing: self.marketing.apply(base.marketing),
            education: self.education.apply(base.education),
            entertainment: self.entertainment.apply(base.entertainment),
        }
    }
}

const CORPORATE: PhaseDurations = PhaseDurations {
    planning: DurationRange::new(2, 7, 5),
    shooting: DurationRange::new(1, 3, 2),
    editing: DurationRange::new(3, 14, 7),
};

const MARKETING: PhaseDurations = PhaseDurations {
    planning: DurationRange::new(3, 10, 7),
    shooting: DurationRange::new(1, 5, 3),
    editing: DurationRange::new(4, 21, 10),
};

const EDUCATION: PhaseDurations = PhaseDurations {
    planning: DurationRange::new(2, 10, 5),
    shooting: DurationRange::new(2, 7, 3),
    editing: DurationRange::new(5, 21, 14),
};

const ENTERTAINMENT: PhaseDurations = PhaseDurations {
    planning: DurationRange::new(5, 21, 14),
    shooting: DurationRange::new(3, 14, 7),
    editing: DurationRange::new(9, 42, 21),
};

/// Base durations for every project type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DurationTable {
    /// Corporate videos
    pub corporate: PhaseDurations,
    /// Marketing content
    pub marketing: PhaseDurations,
    /// Education content
    pub education: PhaseDurations,
    /// Entertainment content
    pub entertainment: PhaseDurations,
}

impl Default for DurationTable {
    fn default() -> Self {
        Self {
            corporate: CORPORATE,
            marketing: MARKETING,
            education: EDUCATION,
            entertainment: ENTERTAINMENT,
        }
    }
}

impl DurationTable {
    /// Ranges for one project type.
    pub fn for_type(&self, project_type: ProjectType) -> &PhaseDurations {
        match project_type {
            ProjectType::Corporate => &self.corporate,
            ProjectType::Marketing => &self.marketing,
            ProjectType::Education => &self.education,
            ProjectType::Entertainment => &self.entertainment,
        }
    }

    /// Range for one project type and phase.
    pub fn range(&self, project_type: ProjectType, phase: PhaseKind) -> DurationRange {
        self.for_type(project_type).get(phase)
    }

    /// Parse overrides from TOML on top of the built-in table.
    pub fn from_toml_str(input: &str) -> Result<Self, TableError> {
        let overrides: TableOverrides = toml::from_str(input)?;
        let table = overrides.apply(Self::default());
        table.validate()?;
        Ok(table)
    }

    /// Load a table from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Check every range is consistent.
    pub fn validate(&self) -> Result<(), TableError> {
        for project_type in ProjectType::ALL {
            for phase in PhaseKind::ALL {
                self.range(project_type, phase)
                    .check()
                    .map_err(|reason| TableError::InvalidRange {
                        project_type,
                        phase,
                        reason,
                    })?;
            }
        }
        Ok(())
    }
}
