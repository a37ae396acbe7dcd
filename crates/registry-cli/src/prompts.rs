//! Interactive entry of the registration form.

use std::io::{self, BufRead, Write};

use registry_model::{FieldKind, registration_form};
use registry_normalize::{normalize_date_of_birth, normalize_national_id, normalize_phone};

/// Prompts for every registration form field on stdin, applying the form
/// schema's normalizer to each answer.
///
/// Returns `None` when the operator cancels (`esc`) or stdin closes.
pub fn collect_registration_form() -> io::Result<Option<Vec<String>>> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut values = Vec::with_capacity(registration_form().len());
    for field in registration_form() {
        print!("Enter {} (or 'esc' to cancel): ", field.label);
        io::stdout().flush()?;
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let raw = line.trim();
        if raw.eq_ignore_ascii_case("esc") {
            return Ok(None);
        }
        values.push(normalize_answer(field.kind, raw));
    }
    Ok(Some(values))
}

fn normalize_answer(kind: FieldKind, raw: &str) -> String {
    let normalized = match kind {
        FieldKind::Text => return raw.to_string(),
        FieldKind::DateOfBirth => normalize_date_of_birth(raw),
        FieldKind::NationalId => normalize_national_id(raw),
        FieldKind::Phone => normalize_phone(raw),
    };
    if !normalized.is_canonical() && !normalized.value().is_empty() {
        println!("  (stored as entered)");
    }
    normalized.into_value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_are_normalized_by_kind() {
        assert_eq!(
            normalize_answer(FieldKind::DateOfBirth, "02-01-2019"),
            "2019-01-02"
        );
        assert_eq!(
            normalize_answer(FieldKind::NationalId, "42101-1234567-1"),
            "4210112345671"
        );
        assert_eq!(
            normalize_answer(FieldKind::Phone, "0300-1234567"),
            "+92-3001234567"
        );
        assert_eq!(normalize_answer(FieldKind::Text, "as typed"), "as typed");
    }
}
