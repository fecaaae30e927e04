use thiserror::Error;

/// Per-field messages from validating a [`crate::NoteDraft`].
///
/// At most one message per field; the create form renders each message
/// inline next to the field it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("invalid note form")]
pub struct FormErrors {
    pub title: Option<String>,
    pub body: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_errors() {
        assert!(FormErrors::default().is_empty());
    }

    #[test]
    fn any_field_message_is_nonempty() {
        let errors = FormErrors {
            title: Some("This field is required.".into()),
            body: None,
        };
        assert!(!errors.is_empty());
    }
}
