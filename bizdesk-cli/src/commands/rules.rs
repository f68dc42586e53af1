use super::capabilities_for;
use bizdesk_core::session::SessionUser;
use std::fmt::Write;

/// One rule per line, in evaluation order
pub fn run(user: &SessionUser) -> String {
    let caps = capabilities_for(user);
    let rules = caps.rules_debug();

    let mut out = String::new();
    if rules.is_empty() {
        out.push_str("(no rules: everything is denied)\n");
    }
    for (i, rule) in rules.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}", i + 1, rule);
    }
    out
}
