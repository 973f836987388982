//! Bucketing contributors and counting email claims.

use crate::validate::ValidatedDocument;
use consent_common::{ClaimedEmailResponse, ConsentTally, ContributorResponse, EmailClaims};

/// Bucket contributors by consent status, preserving input order.
pub fn classify_contributors(responses: &[ContributorResponse]) -> ConsentTally {
    responses
        .iter()
        .fold(ConsentTally::default(), |mut tally, response| {
            tally.push(response.status(), response.github_login.as_str());
            tally
        })
}

/// Count claimed and unclaimed emails.
pub fn count_claims(responses: &[ClaimedEmailResponse]) -> EmailClaims {
    let not_claimed = responses.iter().filter(|r| !r.is_claimed()).count();
    EmailClaims {
        claimed: responses.len() - not_claimed,
        not_claimed,
    }
}

/// Classify a validated document.
pub fn classify(doc: &ValidatedDocument) -> (ConsentTally, EmailClaims) {
    (
        classify_contributors(doc.contributors()),
        count_claims(doc.claimed_emails()),
    )
}
