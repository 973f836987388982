//! Tallies produced by classification.

use crate::model::ConsentStatus;

/// Contributor logins bucketed by consent status, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConsentTally {
    pub consenting: Vec<String>,
    pub denying: Vec<String>,
    pub no_response: Vec<String>,
    pub consent_not_needed: Vec<String>,
}

impl ConsentTally {
    /// Append a login to the bucket for `status`.
    pub fn push(&mut self, status: ConsentStatus, login: impl Into<String>) {
        self.bucket_mut(status).push(login.into());
    }

    /// Logins recorded under `status`.
    pub fn bucket(&self, status: ConsentStatus) -> &[String] {
        match status {
            ConsentStatus::Consenting => &self.consenting,
            ConsentStatus::Denying => &self.denying,
            ConsentStatus::ConsentNotNeeded => &self.consent_not_needed,
            ConsentStatus::NoResponse => &self.no_response,
        }
    }

    fn bucket_mut(&mut self, status: ConsentStatus) -> &mut Vec<String> {
        match status {
            ConsentStatus::Consenting => &mut self.consenting,
            ConsentStatus::Denying => &mut self.denying,
            ConsentStatus::ConsentNotNeeded => &mut self.consent_not_needed,
            ConsentStatus::NoResponse => &mut self.no_response,
        }
    }

    /// Number of contributors across all four buckets.
    pub fn total(&self) -> usize {
        ConsentStatus::ALL
            .iter()
            .map(|status| self.bucket(*status).len())
            .sum()
    }
}

/// Claimed versus unclaimed counts for unassociated committer emails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmailClaims {
    pub claimed: usize,
    pub not_claimed: usize,
}

impl EmailClaims {
    pub fn total(&self) -> usize {
        self.claimed + self.not_claimed
    }
}
