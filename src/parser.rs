//! Field coercion and the `name,age,grade1,grade2,grade3` line layout.

use crate::error::InputError;
use crate::record::{GRADE_COUNT, StudentRecord};

/// Number of comma-separated fields in a stored line.
pub const FIELD_COUNT: usize = 2 + GRADE_COUNT;

/// Parses an age, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns [`InputError::InvalidAge`] if the text is not a whole number.
pub fn parse_age(raw: &str) -> Result<i64, InputError> {
    raw.trim()
        .parse()
        .map_err(|_| InputError::InvalidAge(raw.trim().to_string()))
}

/// Parses a grade, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns [`InputError::InvalidGrade`] if the text is not a number.
pub fn parse_grade(raw: &str) -> Result<f64, InputError> {
    raw.trim()
        .parse()
        .map_err(|_| InputError::InvalidGrade(raw.trim().to_string()))
}

/// Builds a record from the fields of one stored line.
///
/// Returns `Ok(None)` when the line does not have exactly [`FIELD_COUNT`]
/// fields; such lines are not records and are skipped by the store.
///
/// # Errors
///
/// Returns an [`InputError`] when the arity is right but the age or a grade
/// does not coerce.
pub fn parse_fields(fields: &[&str]) -> Result<Option<StudentRecord>, InputError> {
    let [name, age, g1, g2, g3] = fields else {
        return Ok(None);
    };

    let age = parse_age(age)?;
    let grades = [parse_grade(g1)?, parse_grade(g2)?, parse_grade(g3)?];

    Ok(Some(StudentRecord::new(name, age, grades)))
}
