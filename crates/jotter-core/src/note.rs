use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::form::FormErrors;

/// Maximum accepted title length, in characters.
pub const TITLE_MAX_LEN: usize = 200;

/// Maximum accepted body length, in characters.
pub const BODY_MAX_LEN: usize = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// A note as submitted through the create form, before validation.
///
/// Missing form fields deserialize to empty strings so a bare POST
/// still reaches validation instead of failing extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl NoteDraft {
    /// Check the draft against the note schema.
    ///
    /// Returns a trimmed draft ready for insertion, or the per-field
    /// messages the form should be re-rendered with.
    pub fn validate(&self) -> Result<NoteDraft, FormErrors> {
        let title = self.title.trim();
        let body = self.body.trim_end();

        let mut errors = FormErrors::default();
        if title.is_empty() {
            errors.title = Some("This field is required.".to_string());
        } else if title.chars().count() > TITLE_MAX_LEN {
            errors.title = Some(format!(
                "Ensure this value has at most {TITLE_MAX_LEN} characters."
            ));
        }
        if body.chars().count() > BODY_MAX_LEN {
            errors.body = Some(format!(
                "Ensure this value has at most {BODY_MAX_LEN} characters."
            ));
        }

        if errors.is_empty() {
            Ok(NoteDraft {
                title: title.to_string(),
                body: body.to_string(),
            })
        } else {
            Err(errors)
        }
    }
}
