//! Presence validation for submissions.

use crate::error::AppError;
use crate::model::{NewApplication, ValidApplication};

pub struct RequestValidator;

impl RequestValidator {
    /// All required fields must be present and non-empty. Reports every missing field at once.
    pub fn validate(body: NewApplication) -> Result<ValidApplication, AppError> {
        let required = [
            ("name", &body.name),
            ("email", &body.email),
            ("phone", &body.phone),
            ("city", &body.city),
            ("motivation", &body.motivation),
            ("contribution", &body.contribution),
            ("availability", &body.availability),
            ("membershipType", &body.membership_type),
        ];
        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, v)| v.as_deref().map_or(true, str::is_empty))
            .map(|(k, _)| *k)
            .collect();
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        Ok(ValidApplication {
            name: body.name.unwrap_or_default(),
            email: body.email.unwrap_or_default(),
            phone: body.phone.unwrap_or_default(),
            city: body.city.unwrap_or_default(),
            motivation: body.motivation.unwrap_or_default(),
            contribution: body.contribution.unwrap_or_default(),
            availability: body.availability.unwrap_or_default(),
            skills: body.skills.map(|s| s.into_list()).unwrap_or_default(),
            other_details: body.other_details.filter(|s| !s.is_empty()),
            membership_type: body.membership_type.unwrap_or_default(),
            newsletter_opt_in: body.newsletter_opt_in.unwrap_or(false),
        })
    }
}
