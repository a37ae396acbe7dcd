//! Console tables for list views and import summaries.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use registry_ingest::RowFailure;
use registry_model::{
    Admission, ClassPolicy, FieldKind, RegistrationSummary, Teacher, registration_form,
};

pub fn print_registrations(registrations: &[RegistrationSummary]) {
    if registrations.is_empty() {
        println!("No registered students found.");
        return;
    }
    let mut table = new_table(vec![
        "RegNo",
        "Child",
        "Gender",
        "DOB",
        "Father",
        "Father CNIC",
        "Father Mobile",
        "Active",
    ]);
    align_column(&mut table, 7, CellAlignment::Center);
    for summary in registrations {
        table.add_row(vec![
            Cell::new(&summary.reg_no).add_attribute(Attribute::Bold),
            Cell::new(&summary.child_name),
            Cell::new(&summary.gender),
            Cell::new(&summary.child_dob),
            Cell::new(&summary.father_name),
            Cell::new(&summary.father_cnic),
            Cell::new(&summary.father_mobile),
            flag_cell(summary.is_active),
        ]);
    }
    println!("{table}");
}

pub fn print_admissions(admissions: &[Admission]) {
    if admissions.is_empty() {
        println!("No admitted students found.");
        return;
    }
    let mut table = new_table(vec![
        "GR No",
        "RegNo",
        "Child",
        "Class",
        "Academic Year",
        "Admitted On",
    ]);
    align_column(&mut table, 0, CellAlignment::Right);
    for admission in admissions {
        table.add_row(vec![
            Cell::new(admission.gr_no.as_str()).add_attribute(Attribute::Bold),
            Cell::new(admission.reg_no.as_str()),
            Cell::new(&admission.child_name),
            Cell::new(&admission.class_applied_for),
            Cell::new(admission.academic_year.as_str()),
            Cell::new(&admission.admitted_on),
        ]);
    }
    println!("{table}");
}

pub fn print_teachers(teachers: &[Teacher]) {
    if teachers.is_empty() {
        println!("No teachers found.");
        return;
    }
    let mut table = new_table(vec!["ID", "Name", "CNIC", "Class Teacher", "Subjects"]);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for teacher in teachers {
        table.add_row(teacher_row(teacher));
    }
    println!("{table}");
}

pub fn print_teachers_with_classes(rows: &[(Teacher, String, String)]) {
    if rows.is_empty() {
        println!("No teachers found.");
        return;
    }
    let mut table = new_table(vec![
        "ID",
        "Name",
        "CNIC",
        "Class Teacher",
        "Subjects",
        "Class",
        "Section",
    ]);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for (teacher, class_name, section) in rows {
        let mut row = teacher_row(teacher);
        row.push(Cell::new(class_name));
        row.push(Cell::new(section));
        table.add_row(row);
    }
    println!("{table}");
}

/// Prints the outcome of a bulk import: counts, then the per-row success
/// and failure lists.
pub fn print_import_summary(
    what: &str,
    successes: &[(usize, String, String)],
    failures: &[RowFailure],
) {
    println!(
        "{what} import complete. Rows read: {}",
        successes.len() + failures.len()
    );
    println!("Successfully inserted: {}", successes.len());
    println!("Failed: {}", failures.len());

    if !successes.is_empty() {
        let mut table = new_table(vec!["Row", "Name", "Number"]);
        align_column(&mut table, 0, CellAlignment::Right);
        for (row_number, name, number) in successes {
            table.add_row(vec![
                Cell::new(row_number),
                Cell::new(name),
                Cell::new(number).fg(Color::Green),
            ]);
        }
        println!("{table}");
    }

    if !failures.is_empty() {
        let mut table = new_table(vec!["Row", "Name", "Reason"]);
        align_column(&mut table, 0, CellAlignment::Right);
        for failure in failures {
            table.add_row(vec![
                Cell::new(failure.row_number),
                Cell::new(&failure.name),
                Cell::new(&failure.reason).fg(Color::Red),
            ]);
        }
        println!("{table}");
    }
}

pub fn print_class_policies(policies: &[ClassPolicy]) {
    let mut table = new_table(vec![
        "Class",
        "Monthly Fee",
        "Annual Charges",
        "Other Charges",
        "Computer Lab",
        "Lab",
    ]);
    for policy in policies {
        table.add_row(vec![
            Cell::new(&policy.class_name).add_attribute(Attribute::Bold),
            Cell::new(&policy.monthly_fee),
            Cell::new(&policy.annual_charges),
            Cell::new(&policy.other_charges),
            Cell::new(&policy.computer_lab_charges),
            Cell::new(&policy.lab_charges),
        ]);
    }
    println!("{table}");
}

pub fn print_form_fields() {
    let mut table = new_table(vec!["#", "Column", "Label", "Normalization"]);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, field) in registration_form().iter().enumerate() {
        let kind = match field.kind {
            FieldKind::Text => dim_cell("as entered"),
            FieldKind::DateOfBirth => Cell::new("date of birth").fg(Color::Blue),
            FieldKind::NationalId => Cell::new("national id").fg(Color::Blue),
            FieldKind::Phone => Cell::new("phone").fg(Color::Blue),
        };
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(field.name),
            Cell::new(field.label),
            kind,
        ]);
    }
    println!("{table}");
}

fn teacher_row(teacher: &Teacher) -> Vec<Cell> {
    vec![
        match teacher.id {
            Some(id) => Cell::new(id),
            None => dim_cell("-"),
        },
        Cell::new(&teacher.name),
        Cell::new(&teacher.cnic),
        flag_cell(teacher.is_class_teacher),
        Cell::new(&teacher.subjects),
    ]
}

fn new_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    table.set_header(headers.into_iter().map(header_cell).collect::<Vec<_>>());
    table
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn flag_cell(flag: bool) -> Cell {
    if flag {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
