use anyhow::{Context, Result};

use originai::store::SettingsStore;

/// Demo-only credential pair carried over from the service's placeholder
/// login page. This is not an authentication mechanism; real auth is a
/// separate concern and does not extend this check.
const DEMO_USER: &str = "admin";
const DEMO_PASSWORD: &str = "admin123";

pub fn run(user_id: &str, password: &str, store: &SettingsStore) -> Result<()> {
    if user_id.is_empty() || password.is_empty() {
        anyhow::bail!("Please enter User ID and Password.");
    }

    if user_id == DEMO_USER && password == DEMO_PASSWORD {
        store
            .set_username(user_id)
            .context("failed to persist login")?;
        println!("Logged in as {user_id}.");
        Ok(())
    } else {
        anyhow::bail!("Invalid credentials.");
    }
}
