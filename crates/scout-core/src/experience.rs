//! Experience-level classification.
//!
//! One lookup table maps seniority labels to years-of-experience ranges.
//! Both label validation and search filtering go through this table, so
//! the two can never drift apart.

use std::fmt;

/// A half-open years range: `min_exclusive < years <= max_inclusive`.
///
/// Unbounded ends are represented with infinities, so `contains` is a
/// plain two-sided comparison for every level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearsRange {
    /// Exclusive lower bound.
    pub min_exclusive: f64,
    /// Inclusive upper bound.
    pub max_inclusive: f64,
}

impl YearsRange {
    /// Whether `years` falls inside this range.
    #[must_use]
    pub fn contains(&self, years: f64) -> bool {
        years > self.min_exclusive && years <= self.max_inclusive
    }
}

/// Seniority classification used by talent search filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperienceLevel {
    /// Up to and including 2 years.
    EntryLevel,
    /// More than 2, up to 5 years.
    MidLevel,
    /// More than 5, up to 10 years.
    Senior,
    /// More than 10 years.
    Expert,
}

impl ExperienceLevel {
    /// All levels, ordered from junior to senior.
    pub const ALL: [Self; 4] = [Self::EntryLevel, Self::MidLevel, Self::Senior, Self::Expert];

    /// Resolve a wire label. Unknown labels resolve to `None`; callers
    /// decide whether that means "reject" or "matches nothing".
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Entry Level" => Some(Self::EntryLevel),
            "Mid Level" => Some(Self::MidLevel),
            "Senior" => Some(Self::Senior),
            "Expert" => Some(Self::Expert),
            _ => None,
        }
    }

    /// The wire label for this level.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::EntryLevel => "Entry Level",
            Self::MidLevel => "Mid Level",
            Self::Senior => "Senior",
            Self::Expert => "Expert",
        }
    }

    /// The years-of-experience range this level covers.
    #[must_use]
    pub fn years(self) -> YearsRange {
        match self {
            Self::EntryLevel => YearsRange {
                min_exclusive: f64::NEG_INFINITY,
                max_inclusive: 2.0,
            },
            Self::MidLevel => YearsRange {
                min_exclusive: 2.0,
                max_inclusive: 5.0,
            },
            Self::Senior => YearsRange {
                min_exclusive: 5.0,
                max_inclusive: 10.0,
            },
            Self::Expert => YearsRange {
                min_exclusive: 10.0,
                max_inclusive: f64::INFINITY,
            },
        }
    }

    /// Classify a years-of-experience value.
    #[must_use]
    pub fn classify(years: f64) -> Self {
        Self::ALL
            .into_iter()
            .find(|level| level.years().contains(years))
            .unwrap_or(Self::EntryLevel)
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for level in ExperienceLevel::ALL {
            assert_eq!(ExperienceLevel::from_label(level.label()), Some(level));
        }
        assert_eq!(ExperienceLevel::from_label("Wizard"), None);
    }

    #[test]
    fn ranges_tile_the_axis_without_overlap() {
        // Boundary years land in exactly one level.
        assert_eq!(ExperienceLevel::classify(2.0), ExperienceLevel::EntryLevel);
        assert_eq!(ExperienceLevel::classify(2.5), ExperienceLevel::MidLevel);
        assert_eq!(ExperienceLevel::classify(5.0), ExperienceLevel::MidLevel);
        assert_eq!(ExperienceLevel::classify(10.0), ExperienceLevel::Senior);
        assert_eq!(ExperienceLevel::classify(10.5), ExperienceLevel::Expert);
    }

    #[test]
    fn entry_covers_zero_and_expert_is_unbounded() {
        assert!(ExperienceLevel::EntryLevel.years().contains(0.0));
        assert!(ExperienceLevel::Expert.years().contains(40.0));
        assert!(!ExperienceLevel::Expert.years().contains(10.0));
    }
}
