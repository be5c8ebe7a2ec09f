use chrono::{DateTime, Utc};

use crate::catalog::CourseLevel;
use crate::forms::EnrollmentRecord;

/// One appended spreadsheet row mirroring a validated enrollment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentRow {
    pub name: String,
    pub email: String,
    pub country: String,
    pub phone_number: String,
    pub experience_level: CourseLevel,
    pub course_interest: String,
    pub submitted_at: DateTime<Utc>,
}

impl From<&EnrollmentRecord> for EnrollmentRow {
    fn from(record: &EnrollmentRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            country: record.country.clone(),
            phone_number: record.phone_number.clone(),
            experience_level: record.experience_level,
            course_interest: record.course_interest.clone(),
            submitted_at: record.submission_time,
        }
    }
}

/// Outbound spreadsheet sync capability. Enrollment must succeed whether or
/// not a real integration is wired in, so failures are reported but never
/// propagated to the caller.
pub trait SheetPublisher: Send + Sync {
    fn publish(&self, row: EnrollmentRow) -> Result<(), SheetError>;

    /// Label surfaced as `integration_status` in the health report.
    fn status_label(&self) -> &'static str;
}

#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("sheet transport unavailable: {0}")]
    Transport(String),
}

/// Default publisher; the third-party spreadsheet integration ships disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSheetPublisher;

impl SheetPublisher for NoopSheetPublisher {
    fn publish(&self, _row: EnrollmentRow) -> Result<(), SheetError> {
        Ok(())
    }

    fn status_label(&self) -> &'static str {
        "disabled"
    }
}
