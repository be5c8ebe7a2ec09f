pub mod domain;
pub mod validation;

pub use domain::{
    ContactForm, ContactRecord, EnrollmentForm, EnrollmentRecord, StatusCheck, StatusCheckCreate,
    ValidContact, ValidEnrollment,
};
pub use validation::FieldError;
