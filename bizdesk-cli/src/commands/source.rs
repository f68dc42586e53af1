use anyhow::{Context, Result};
use bizdesk_core::session::SessionUser;
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the user profile comes from; exactly one is required
#[derive(Args, Debug, Clone, Default)]
#[group(required = true, multiple = false)]
pub struct ProfileSource {
    /// Comma-separated permission strings
    #[arg(long, value_delimiter = ',')]
    pub permissions: Option<Vec<String>>,

    /// Legacy role name (super_admin, admin, user)
    #[arg(long)]
    pub role: Option<String>,

    /// JSON user profile as returned by the backend
    #[arg(long)]
    pub profile: Option<PathBuf>,
}

impl ProfileSource {
    pub fn load(&self) -> Result<SessionUser> {
        if let Some(path) = &self.profile {
            return load_profile(path);
        }

        let mut user = SessionUser::new("cli");
        if let Some(permissions) = &self.permissions {
            user = user.with_permissions(permissions.iter().map(|p| p.trim().to_string()));
        }
        if let Some(role) = &self.role {
            user = user.with_role(role.as_str());
        }
        Ok(user)
    }
}

fn load_profile(path: &Path) -> Result<SessionUser> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read profile {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("invalid profile JSON in {}", path.display()))
}
