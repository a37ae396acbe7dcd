//! Sequential identifier allocation.
//!
//! Registration and GR numbers are not stored as counters; the next value
//! is derived on demand from the maximum identifier already persisted in
//! the corresponding collection. Allocation is a plain read followed by a
//! later insert — callers are single-threaded console commands, and no
//! lock is taken between the two steps.

use registry_model::{AcademicYear, GrNo, RegNo};

use crate::db::RegistryDb;
use crate::error::{Result, StoreError};

/// Seed for the General Register when no student has been admitted yet.
const FIRST_GR_NO: u64 = 1000;

/// Allocates the next registration number for an academic year.
///
/// Numbers are scoped by the year's leading segment: the first
/// registration of `2025-2026` is `20250001`, the next `20250002`, and a
/// different year starts its own sequence. A stored number whose suffix is
/// not numeric fails the allocation outright rather than guessing.
pub async fn next_registration_number(
    db: &RegistryDb,
    academic_year: &AcademicYear,
) -> Result<RegNo> {
    let base_year = academic_year.base_year();
    let next = match db.max_reg_no_with_prefix(base_year).await? {
        Some(current) => parse_suffix(&current, base_year.len())? + 1,
        None => 1,
    };
    // Zero-padded to four digits; larger values widen naturally.
    Ok(RegNo::new(format!("{base_year}{next:04}"))?)
}

/// Allocates the next General Register number.
///
/// The sequence is global across years and seeds at 1000 when the school
/// has no admitted students yet. As with registration numbers, a stored
/// value that is not numeric is a fatal allocation error.
pub async fn next_admission_number(db: &RegistryDb) -> Result<GrNo> {
    let next = match db.max_gr_no().await? {
        Some(current) => {
            current
                .trim()
                .parse::<u64>()
                .map_err(|_| StoreError::CorruptSequence {
                    value: current.clone(),
                })?
                + 1
        }
        None => FIRST_GR_NO,
    };
    Ok(GrNo::new(format!("{next:04}"))?)
}

fn parse_suffix(stored: &str, prefix_len: usize) -> Result<u64> {
    stored
        .get(prefix_len..)
        .and_then(|suffix| suffix.parse::<u64>().ok())
        .ok_or_else(|| StoreError::CorruptSequence {
            value: stored.to_string(),
        })
}
