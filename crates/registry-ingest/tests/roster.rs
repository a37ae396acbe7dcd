use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use registry_ingest::read_teacher_roster;

fn write_csv(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("teachers.csv");
    fs::write(&path, contents).expect("write csv");
    path
}

#[test]
fn valid_rows_become_teachers() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(
        &dir,
        "Name,CNIC,IsClassTeacher,Subjects\n\
         Ali Khan,42101-1234567-1,Y,\"Math,English\"\n\
         Sana Tariq,4210198765432,n,Urdu\n",
    );

    let import = read_teacher_roster(&path).expect("read roster");
    assert!(import.failures.is_empty());
    assert_eq!(import.teachers.len(), 2);

    let (row, ali) = &import.teachers[0];
    assert_eq!(*row, 2);
    assert_eq!(ali.name, "Ali Khan");
    assert_eq!(ali.cnic, "4210112345671");
    assert!(ali.is_class_teacher);
    assert_eq!(ali.subjects, "Math,English");

    let (_, sana) = &import.teachers[1];
    assert!(!sana.is_class_teacher);
}

#[test]
fn bad_rows_fail_without_aborting() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(
        &dir,
        "Name,CNIC,IsClassTeacher,Subjects\n\
         ,4210112345671,Y,Math\n\
         Ali Khan,12345,Y,Math\n\
         Sana Tariq,4210112345672,maybe,Urdu\n\
         short,row\n\
         Usman Raza,4210112345673,N,Science\n",
    );

    let import = read_teacher_roster(&path).expect("read roster");
    assert_eq!(import.total_rows(), 5);
    assert_eq!(import.teachers.len(), 1);
    assert_eq!(import.teachers[0].1.name, "Usman Raza");

    assert_eq!(import.failures.len(), 4);
    assert!(import.failures[0].reason.contains("teacher name is empty"));
    assert!(import.failures[1].reason.contains("invalid CNIC"));
    assert!(import.failures[2].reason.contains("must be Y or N"));
    assert!(import.failures[3].reason.contains("not enough columns"));
}
