//! Markdown rendering of `status.md`.

use crate::config::ReportConfig;
use crate::join_logins;
use consent_common::{ConsentTally, EmailClaims};
use std::fmt::Write;

/// Render the full status document.
///
/// Output depends only on its inputs, so unchanged data regenerates a
/// byte-identical file.
pub fn render_status(tally: &ConsentTally, claims: &EmailClaims, config: &ReportConfig) -> String {
    let mut md = String::new();
    // Writing to a String cannot fail.
    let _ = write_status(&mut md, tally, claims, config);
    md
}

fn write_status(
    md: &mut String,
    tally: &ConsentTally,
    claims: &EmailClaims,
    config: &ReportConfig,
) -> std::fmt::Result {
    let source = format!("[`dual-license-responses.json`]({})", config.source_link);

    writeln!(md, "# Current Status")?;
    writeln!(md)?;
    writeln!(
        md,
        "The contents of this file are generated by [the `consent-status` tool]({})",
        config.tool_link
    )?;
    writeln!(md, "from the {source} file.")?;
    writeln!(md)?;

    writeln!(md, "## Unassociated Emails")?;
    writeln!(md)?;
    writeln!(md, "| Unassociated Email... | Number |")?;
    writeln!(md, "| --- | --- |")?;
    writeln!(md, "| Has Been Claimed By a GitHub User | {} |", claims.claimed)?;
    writeln!(md, "| Remains Unclaimed | {} |", claims.not_claimed)?;
    writeln!(md)?;

    writeln!(md, "## Consent to Dual-License")?;
    writeln!(md)?;
    writeln!(md, "| Contributor Has | Number |")?;
    writeln!(md, "| --- | --- |")?;
    writeln!(md, "| Consented | {} |", tally.consenting.len())?;
    writeln!(md, "| Denied Consent | {} |", tally.denying.len())?;
    writeln!(md, "| No Response | {} |", tally.no_response.len())?;
    writeln!(md)?;

    writeln!(md, "### Users Who Have Consented")?;
    writeln!(md, "{}", join_logins(&tally.consenting))?;
    writeln!(md)?;
    writeln!(
        md,
        "### Usernames We Do Not Need Consent From (check \"notes\" in {source})"
    )?;
    writeln!(md, "{}", join_logins(&tally.consent_not_needed))?;
    writeln!(md)?;
    writeln!(md, "### Users Who Have Denied Consent")?;
    writeln!(md, "{}", join_logins(&tally.denying))?;
    writeln!(md)?;
    writeln!(md, "### Users Who Have Not Responded Yet")?;
    writeln!(md, "{}", join_logins(&tally.no_response))?;
    Ok(())
}
