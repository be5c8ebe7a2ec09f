pub mod router;
pub mod service;
pub mod sheets;
pub mod storage;

pub use router::submission_router;
pub use service::{HealthReport, SubmissionError, SubmissionService, STATUS_CHECK_LIMIT};
pub use sheets::{EnrollmentRow, NoopSheetPublisher, SheetError, SheetPublisher};
pub use storage::{DocumentStore, StorageError, CONTACTS, ENROLLMENTS, STATUS_CHECKS};
