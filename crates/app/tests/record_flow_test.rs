//! End-to-end flow through the record service and the file store

use anyhow::Result;
use gradebook::adapters::persistence::FileRecordStore;
use gradebook::services::record_service::{LoadOrigin, RecordService};
use gradebook_core::app::Command;
use gradebook_core::ports::RecordStore;
use gradebook_core::{CourseField, Grade};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn set(term: usize, course: usize, field: CourseField) -> Command {
    Command::SetCourseField {
        term,
        course,
        field,
    }
}

#[test]
fn test_edits_survive_restart() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("record.toml");

    {
        let mut service = RecordService::open(Arc::new(FileRecordStore::with_path(&path)));
        assert_eq!(service.origin(), LoadOrigin::FirstRun);

        service.handle_command(set(0, 0, CourseField::Name("Math".to_string())))?;
        service.handle_command(set(0, 0, CourseField::Grade(Grade::A)))?;
        service.handle_command(set(0, 0, CourseField::Credits(3.0)))?;
        service.handle_command(set(0, 1, CourseField::Name("History".to_string())))?;
        service.handle_command(set(0, 1, CourseField::Grade(Grade::BPlus)))?;
        service.handle_command(set(0, 1, CourseField::Credits(4.0)))?;
        service.handle_command(set(0, 2, CourseField::Name("Lab".to_string())))?;
        service.handle_command(set(0, 2, CourseField::Grade(Grade::W)))?;
        service.handle_command(set(0, 2, CourseField::Credits(1.0)))?;
        service.handle_command(Command::AddTerm)?;

        let gpa = service.compute_overall_gpa()?;
        assert!((gpa - 3.6).abs() < 1e-9);
    }

    // Restart: load once from disk
    let mut service = RecordService::open(Arc::new(FileRecordStore::with_path(&path)));
    assert_eq!(service.origin(), LoadOrigin::Stored);

    let summary = service.summary();
    assert_eq!(summary.terms.len(), 2);
    assert_eq!(summary.terms[0].total_credits, 8.0);
    assert_eq!(summary.terms[0].earned_credits, 7.0);
    assert_eq!(summary.terms[0].courses[0].name(), "Math");
    assert_eq!(summary.terms[1].courses.len(), 10);
    // Snapshot is transient
    assert!(summary.overall_gpa.is_none());

    service.handle_command(Command::RemoveCourse { term: 0, course: 0 })?;
    let reloaded = FileRecordStore::with_path(&path)
        .load()?
        .expect("record on disk");
    assert_eq!(reloaded.term(0)?.len(), 9);
    assert_eq!(reloaded.term(0)?.course(0)?.name(), "History");
    assert_eq!(reloaded.term(0)?.total_credits(), 5.0);

    Ok(())
}

#[test]
fn test_corrupt_record_fails_closed() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("record.toml");
    fs::write(&path, "[[terms]]\ncourses = \"oops\"\n")?;

    let service = RecordService::open(Arc::new(FileRecordStore::with_path(&path)));

    assert_eq!(service.origin(), LoadOrigin::Recovered);
    assert_eq!(service.record().terms().len(), 1);
    assert_eq!(service.record().terms()[0].len(), 10);
    Ok(())
}

#[test]
fn test_stale_totals_on_disk_are_recomputed() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("record.toml");
    fs::write(
        &path,
        r#"
[[terms]]
total_credits = 0.0
earned_credits = 0.0

[[terms.courses]]
name = "Math"
grade = "B"
credits = 3.0

[[terms.courses]]
name = "Physics"
grade = "F"
credits = 4.0
"#,
    )?;

    let service = RecordService::open(Arc::new(FileRecordStore::with_path(&path)));
    assert_eq!(service.origin(), LoadOrigin::Stored);

    let term = service.record().term(0)?;
    assert_eq!(term.total_credits(), 7.0);
    assert_eq!(term.earned_credits(), 3.0);
    assert_eq!(term.gpa(), 3.0);
    Ok(())
}

#[test]
fn test_index_errors_leave_disk_untouched() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("record.toml");

    let mut service = RecordService::open(Arc::new(FileRecordStore::with_path(&path)));
    assert!(service
        .handle_command(set(0, 99, CourseField::Credits(3.0)))
        .is_err());
    assert!(service
        .handle_command(Command::RemoveCourse { term: 3, course: 0 })
        .is_err());

    assert!(!path.exists(), "nothing should have been saved");
    Ok(())
}

#[test]
fn test_empty_record_file_starts_fresh() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("record.toml");
    fs::write(&path, "")?;

    let service = RecordService::open(Arc::new(FileRecordStore::with_path(&path)));

    assert_eq!(service.origin(), LoadOrigin::FirstRun);
    assert_eq!(service.record().terms().len(), 1);
    assert_eq!(service.record().terms()[0].len(), 10);
    Ok(())
}

#[test]
fn test_truncated_record_file_fails_closed() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("record.toml");
    // Cut off before the terms array was written
    fs::write(&path, "# gradebook record\n")?;

    let service = RecordService::open(Arc::new(FileRecordStore::with_path(&path)));

    assert_eq!(service.origin(), LoadOrigin::Recovered);
    assert_eq!(service.record().terms().len(), 1);
    assert_eq!(service.record().terms()[0].len(), 10);
    Ok(())
}

#[test]
fn test_oversized_credits_rejected_and_not_saved() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("record.toml");

    let mut service = RecordService::open(Arc::new(FileRecordStore::with_path(&path)));
    service.handle_command(set(0, 0, CourseField::Grade(Grade::A)))?;
    assert!(service
        .handle_command(set(0, 0, CourseField::Credits(1e308)))
        .is_err());

    let term = service.record().term(0)?;
    assert_eq!(term.total_credits(), 0.0);
    assert_eq!(term.gpa(), 0.0);

    let saved = FileRecordStore::with_path(&path).load()?.expect("record on disk");
    assert_eq!(saved.term(0)?.total_credits(), 0.0);
    Ok(())
}
