//! Schema types for the consent response document.
//!
//! Field names follow the camelCase keys of the JSON file. Unknown keys are
//! ignored.
//!
//! `comment` and `notes` only matter by their presence, so a key written as
//! `null` still counts as present: the outer `Option` records the key, the
//! inner one its value. For `consent` and `consentNeeded` a `null` reads as a
//! missing key.

use serde::{Deserialize, Deserializer};

/// A text field whose presence is significant even when its value is `null`.
pub type PresentText = Option<Option<String>>;

/// Map any present key, `null` included, to `Some`. Missing keys fall back to
/// `#[serde(default)]`.
fn present<'de, D>(deserializer: D) -> Result<PresentText, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Response recorded for a commit email that is not linked to a GitHub account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimedEmailResponse {
    pub unassociated_committer_email: String,
    /// Present once a GitHub user has claimed the email.
    #[serde(default, deserialize_with = "present")]
    pub comment: PresentText,
    #[serde(default)]
    pub consent_needed: Option<bool>,
    #[serde(default, deserialize_with = "present")]
    pub notes: PresentText,
}

impl ClaimedEmailResponse {
    /// Whether a GitHub user has claimed this email.
    pub fn is_claimed(&self) -> bool {
        self.comment.is_some()
    }

    /// Exempt entries must explain themselves in `notes`.
    pub fn is_missing_note(&self) -> bool {
        self.consent_needed == Some(false) && self.notes.is_none()
    }
}

/// Consent response of a GitHub contributor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributorResponse {
    #[serde(rename = "gitHubLogin")]
    pub github_login: String,
    #[serde(default)]
    pub consent: Option<bool>,
    #[serde(default)]
    pub consent_needed: Option<bool>,
    #[serde(default, deserialize_with = "present")]
    pub notes: PresentText,
}

impl ContributorResponse {
    /// Classify this response into exactly one consent status.
    pub fn status(&self) -> ConsentStatus {
        match (self.consent, self.consent_needed) {
            (Some(true), _) => ConsentStatus::Consenting,
            (Some(false), _) => ConsentStatus::Denying,
            (None, Some(false)) => ConsentStatus::ConsentNotNeeded,
            (None, _) => ConsentStatus::NoResponse,
        }
    }

    /// A contributor exempted from consent must explain why in `notes`.
    pub fn is_missing_note(&self) -> bool {
        self.status() == ConsentStatus::ConsentNotNeeded && self.notes.is_none()
    }
}

/// Consent status buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsentStatus {
    /// `consent == true`.
    Consenting,
    /// `consent == false`.
    Denying,
    /// No `consent` and `consentNeeded == false`.
    ConsentNotNeeded,
    /// No `consent`, and consent is needed or unspecified.
    NoResponse,
}

impl ConsentStatus {
    pub const ALL: [ConsentStatus; 4] = [
        ConsentStatus::Consenting,
        ConsentStatus::ConsentNotNeeded,
        ConsentStatus::Denying,
        ConsentStatus::NoResponse,
    ];
}

/// Wrapper object holding a `responses` array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResponseSet<T> {
    pub responses: Vec<T>,
}

impl<T> Default for ResponseSet<T> {
    fn default() -> Self {
        Self {
            responses: Vec::new(),
        }
    }
}

/// The full `dual-license-responses.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDocument {
    pub claimed_emails: ResponseSet<ClaimedEmailResponse>,
    pub git_hub_user_contributors: ResponseSet<ContributorResponse>,
}

impl ResponseDocument {
    pub fn claimed_emails(&self) -> &[ClaimedEmailResponse] {
        &self.claimed_emails.responses
    }

    pub fn contributors(&self) -> &[ContributorResponse] {
        &self.git_hub_user_contributors.responses
    }
}
