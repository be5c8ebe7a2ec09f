use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{
    validate_client_name, validate_contact_name, validate_country, validate_email,
    validate_experience_level, validate_message, validate_name, validate_phone_number, FieldError,
};
use crate::catalog::CourseLevel;

/// Raw enrollment form exactly as posted by the marketing site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentForm {
    pub name: String,
    pub email: String,
    pub country: String,
    pub phone_number: String,
    pub experience_level: String,
    pub course_interest: String,
}

/// Normalized enrollment fields, produced only by [`EnrollmentForm::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEnrollment {
    pub name: String,
    pub email: String,
    pub country: String,
    pub phone_number: String,
    pub experience_level: CourseLevel,
    pub course_interest: String,
}

impl EnrollmentForm {
    /// Run every field rule and report all failures together.
    pub fn validate(&self) -> Result<ValidEnrollment, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = collect(validate_name(&self.name), &mut errors);
        let email = collect(validate_email(&self.email), &mut errors);
        let country = collect(validate_country(&self.country), &mut errors);
        let phone_number = collect(validate_phone_number(&self.phone_number), &mut errors);
        let experience_level = collect(validate_experience_level(&self.experience_level), &mut errors);

        match (name, email, country, phone_number, experience_level) {
            (Some(name), Some(email), Some(country), Some(phone_number), Some(experience_level))
                if errors.is_empty() =>
            {
                Ok(ValidEnrollment {
                    name,
                    email,
                    country,
                    phone_number,
                    experience_level,
                    course_interest: self.course_interest.trim().to_string(),
                })
            }
            _ => Err(errors),
        }
    }
}

/// Persisted enrollment with server-assigned identity and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub country: String,
    pub phone_number: String,
    pub experience_level: CourseLevel,
    pub course_interest: String,
    pub submission_time: DateTime<Utc>,
}

impl EnrollmentRecord {
    pub fn accept(fields: ValidEnrollment) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: fields.name,
            email: fields.email,
            country: fields.country,
            phone_number: fields.phone_number,
            experience_level: fields.experience_level,
            course_interest: fields.course_interest,
            submission_time: Utc::now(),
        }
    }
}

/// Raw contact form body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ValidContact, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = collect(validate_contact_name(&self.name), &mut errors);
        let email = collect(validate_email(&self.email), &mut errors);
        let message = collect(validate_message(&self.message), &mut errors);

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) if errors.is_empty() => Ok(ValidContact {
                name,
                email,
                message,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub submission_time: DateTime<Utc>,
}

impl ContactRecord {
    pub fn accept(fields: ValidContact) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: fields.name,
            email: fields.email,
            message: fields.message,
            submission_time: Utc::now(),
        }
    }
}

/// Body for `POST /api/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

impl StatusCheckCreate {
    pub fn validate(&self) -> Result<String, Vec<FieldError>> {
        validate_client_name(&self.client_name).map_err(|err| vec![err])
    }
}

/// Liveness/diagnostic artifact echoed back to the probing client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: Uuid,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    pub fn record(client_name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_name,
            timestamp: Utc::now(),
        }
    }
}

fn collect<T>(result: Result<T, FieldError>, errors: &mut Vec<FieldError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            errors.push(err);
            None
        }
    }
}
