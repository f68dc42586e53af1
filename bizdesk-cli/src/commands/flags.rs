use super::capabilities_for;
use anyhow::Result;
use bizdesk_core::guard::{PageVisibility, VisibilityFlag};
use bizdesk_core::session::SessionUser;
use std::fmt::Write;

pub fn run(user: &SessionUser, json: bool) -> Result<String> {
    let flags = PageVisibility::from_capabilities(&capabilities_for(user));

    if json {
        let map: serde_json::Map<String, serde_json::Value> = VisibilityFlag::ALL
            .iter()
            .map(|&flag| (flag.as_str().to_string(), flags.flag(flag).into()))
            .collect();
        return Ok(format!("{}\n", serde_json::to_string_pretty(&map)?));
    }

    let mut out = String::new();
    for flag in VisibilityFlag::ALL {
        writeln!(out, "{:<22}{}", flag.as_str(), if flags.flag(flag) { "yes" } else { "no" })?;
    }
    Ok(out)
}
