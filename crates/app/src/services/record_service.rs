use anyhow::{Context, Result};
use gradebook_core::app::{Command, RecordSummary};
use gradebook_core::ports::RecordStore;
use gradebook_core::AcademicRecord;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Where the in-memory record came from when the service opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    /// Read from the store
    Stored,
    /// Nothing stored yet; fresh default record
    FirstRun,
    /// Stored record unreadable; fresh default record
    Recovered,
}

/// Owns the academic record and applies commands to it
///
/// The record is loaded once when the service opens and written back after
/// every mutating command that succeeds. Commands run one at a time.
pub struct RecordService {
    store: Arc<dyn RecordStore>,
    record: AcademicRecord,
    origin: LoadOrigin,
}

impl RecordService {
    /// Load the record from `store`, falling back to a default record if
    /// nothing is stored or the stored document can't be read
    pub fn open(store: Arc<dyn RecordStore>) -> Self {
        let (record, origin) = match store.load() {
            Ok(Some(record)) => {
                info!("Loaded record with {} terms", record.terms().len());
                (record, LoadOrigin::Stored)
            }
            Ok(None) => {
                info!("No stored record, starting with a blank term");
                (AcademicRecord::new(), LoadOrigin::FirstRun)
            }
            Err(e) => {
                warn!("Failed to load stored record, starting fresh: {:#}", e);
                (AcademicRecord::new(), LoadOrigin::Recovered)
            }
        };

        Self {
            store,
            record,
            origin,
        }
    }

    pub fn origin(&self) -> LoadOrigin {
        self.origin
    }

    pub fn record(&self) -> &AcademicRecord {
        &self.record
    }

    /// Read projection for display
    pub fn summary(&self) -> RecordSummary {
        RecordSummary::from_record(&self.record)
    }

    /// Apply a command, persisting the record if it changed
    pub fn handle_command(&mut self, cmd: Command) -> Result<()> {
        let mutating = cmd.is_mutating();
        match cmd {
            Command::SetCourseField {
                term,
                course,
                field,
            } => {
                info!("Setting {} on term {} course {}", field.name(), term, course);
                self.record.set_course_field(term, course, field)?;
            }
            Command::RemoveCourse { term, course } => {
                info!("Removing term {} course {}", term, course);
                self.record.remove_course(term, course)?;
            }
            Command::AddTerm => {
                let index = self.record.add_term();
                info!("Added term {}", index);
            }
            Command::ComputeOverallGpa => {
                let gpa = self.record.compute_overall_gpa();
                debug!("Overall GPA computed: {}", gpa);
            }
        }

        if mutating {
            self.save()?;
        }
        Ok(())
    }

    /// Compute and return the overall GPA snapshot
    pub fn compute_overall_gpa(&mut self) -> Result<f64> {
        self.handle_command(Command::ComputeOverallGpa)?;
        self.record
            .overall_gpa()
            .context("Overall GPA missing after computation")
    }

    fn save(&self) -> Result<()> {
        self.store
            .save(&self.record)
            .context("Failed to save academic record")
    }
}
