//! Note requirements for exempt entries.
//!
//! Claimed emails are checked before contributors, and the first offending
//! entry in input order is reported.

use consent_common::{ResponseDocument, ValidationError};

/// A document whose exempt entries all carry explanatory notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDocument(ResponseDocument);

impl std::ops::Deref for ValidatedDocument {
    type Target = ResponseDocument;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Validate `doc`, returning it wrapped on success.
pub fn validate(doc: ResponseDocument) -> Result<ValidatedDocument, ValidationError> {
    if let Some(email) = doc.claimed_emails().iter().find(|e| e.is_missing_note()) {
        return Err(ValidationError::MissingEmailNote {
            email: email.unassociated_committer_email.clone(),
        });
    }

    if let Some(contributor) = doc.contributors().iter().find(|c| c.is_missing_note()) {
        return Err(ValidationError::MissingContributorNote {
            login: contributor.github_login.clone(),
        });
    }

    Ok(ValidatedDocument(doc))
}
