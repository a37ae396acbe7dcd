use std::fmt;

use crate::ModelError;

/// A year-prefixed sequential registration number, e.g. `20250001`.
///
/// The leading segment is the base year of the academic year the student
/// registered in; the trailing digits are a zero-padded sequence scoped to
/// that year.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct RegNo(String);

impl RegNo {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidRegNo(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A General Register (admission) number, globally sequential across years.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct GrNo(String);

impl GrNo {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidGrNo(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GrNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An academic year such as `2025-2026`.
///
/// The segment before the first `-` scopes registration-number sequences;
/// a plain `2025` is accepted and scopes the same way.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct AcademicYear(String);

impl AcademicYear {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.starts_with('-') {
            return Err(ModelError::InvalidAcademicYear(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The year segment that prefixes registration numbers.
    pub fn base_year(&self) -> &str {
        match self.0.split_once('-') {
            Some((base, _)) => base,
            None => &self.0,
        }
    }
}

impl fmt::Display for AcademicYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_year_takes_first_segment() {
        let year = AcademicYear::new("2025-2026").expect("valid year");
        assert_eq!(year.base_year(), "2025");
    }

    #[test]
    fn base_year_of_plain_year_is_whole_string() {
        let year = AcademicYear::new("2025").expect("valid year");
        assert_eq!(year.base_year(), "2025");
    }

    #[test]
    fn empty_identifiers_are_rejected() {
        assert!(RegNo::new("  ").is_err());
        assert!(GrNo::new("").is_err());
        assert!(AcademicYear::new("").is_err());
    }
}
