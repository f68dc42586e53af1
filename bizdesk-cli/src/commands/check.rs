use super::capabilities_for;
use anyhow::Result;
use bizdesk_core::ability::{Action, Subject};
use bizdesk_core::session::SessionUser;

/// Strictly parsed: an unknown action or subject is an error, not a denial
pub fn run(user: &SessionUser, action: &str, subject: &str) -> Result<bool> {
    let action: Action = action.parse()?;
    let subject: Subject = subject.parse()?;

    let allowed = capabilities_for(user).can(action, subject);
    log::debug!("check {} {} -> {}", action, subject, allowed);
    Ok(allowed)
}
