//! Submission body as JSON or as an urlencoded form post.

use crate::error::AppError;
use crate::model::{NewApplication, SkillsInput};
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    http::header,
    Form, Json,
};
use serde::Deserialize;

/// Decoded submission. Form bodies are picked by content type; anything else is read as JSON.
#[derive(Clone, Debug)]
pub struct Submission(pub NewApplication);

/// Form fields arrive as strings; a checkbox posts `on` when ticked.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub motivation: Option<String>,
    pub contribution: Option<String>,
    pub availability: Option<String>,
    pub skills: Option<String>,
    pub other_details: Option<String>,
    pub membership_type: Option<String>,
    pub newsletter_opt_in: Option<String>,
}

impl From<FormSubmission> for NewApplication {
    fn from(form: FormSubmission) -> Self {
        NewApplication {
            name: form.name,
            email: form.email,
            phone: form.phone,
            city: form.city,
            motivation: form.motivation,
            contribution: form.contribution,
            availability: form.availability,
            skills: form.skills.map(SkillsInput::Text),
            other_details: form.other_details,
            membership_type: form.membership_type,
            newsletter_opt_in: form.newsletter_opt_in.map(|v| is_checked(&v)),
        }
    }
}

fn is_checked(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "on" | "true" | "1" | "yes"
    )
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.trim_start().starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}

#[async_trait]
impl<S> FromRequest<S> for Submission
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(form) = Form::<FormSubmission>::from_request(req, state).await?;
            Ok(Submission(form.into()))
        } else {
            let Json(body) = Json::<NewApplication>::from_request(req, state).await?;
            Ok(Submission(body))
        }
    }
}
