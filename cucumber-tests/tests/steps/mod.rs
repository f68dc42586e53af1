pub mod ability_steps;
pub mod guard_steps;
pub mod routing_steps;

use bizdesk_core::ability::{Action, Subject};

/// Strict parse so a typo in a scenario fails loudly instead of denying
pub(crate) fn parse_pair(action: &str, subject: &str) -> (Action, Subject) {
    let action =
        action.parse::<Action>().unwrap_or_else(|e| panic!("bad action in scenario: {}", e));
    let subject =
        subject.parse::<Subject>().unwrap_or_else(|e| panic!("bad subject in scenario: {}", e));
    (action, subject)
}
