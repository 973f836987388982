//! Console rendering: colored bucket listings and count tables.

use crate::join_logins;
use crate::table::CountTable;
use consent_common::{ConsentStatus, ConsentTally, EmailClaims};
use console::Style;

const RULE: &str = "*********";

/// Banner heading printed above a bucket's login list.
pub fn banner_label(status: ConsentStatus) -> &'static str {
    match status {
        ConsentStatus::Consenting => "Consenting users:",
        ConsentStatus::ConsentNotNeeded => "Usernames we do not need consent from:",
        ConsentStatus::Denying => "NON consenting users:",
        ConsentStatus::NoResponse => "Users who have not responded:",
    }
}

/// Black-on-color highlight for a bucket: green for settled buckets, red for
/// denials, yellow for outstanding responses.
pub fn banner_style(status: ConsentStatus, color: bool) -> Style {
    let style = Style::new().black();
    let style = match status {
        ConsentStatus::Consenting | ConsentStatus::ConsentNotNeeded => style.on_green(),
        ConsentStatus::Denying => style.on_red(),
        ConsentStatus::NoResponse => style.on_yellow(),
    };
    style.force_styling(color)
}

/// Black-on-red highlight used for fatal data-quality messages.
pub fn error_style(color: bool) -> Style {
    Style::new().black().on_red().force_styling(color)
}

/// Render every bucket as a highlighted banner followed by its logins.
pub fn render_buckets(tally: &ConsentTally, color: bool) -> String {
    let blocks: Vec<String> = ConsentStatus::ALL
        .iter()
        .map(|status| {
            format!(
                "\n{}\n{}\n",
                banner_style(*status, color).apply_to(banner_label(*status)),
                join_logins(tally.bucket(*status))
            )
        })
        .collect();
    blocks.join(format!("\n{RULE}\n\n").as_str())
}

/// Consent counts table. Exempt contributors are listed but not counted.
pub fn consent_table(tally: &ConsentTally) -> CountTable {
    CountTable::new()
        .row("consenting", tally.consenting.len())
        .row("denying consent", tally.denying.len())
        .row("no response", tally.no_response.len())
}

/// Claimed versus unclaimed email counts table.
pub fn claims_table(claims: &EmailClaims) -> CountTable {
    CountTable::new()
        .row("email has been claimed by GitHub user", claims.claimed)
        .row("email remains unclaimed", claims.not_claimed)
}

/// Render both count tables under their captions.
pub fn render_tables(tally: &ConsentTally, claims: &EmailClaims) -> String {
    format!(
        "\nConsent Responses\n{}\nUnassociated emails\n{}",
        consent_table(tally).render(),
        claims_table(claims).render()
    )
}
