use anyhow::Result;

use originai::store::SettingsStore;

pub fn run(store: &SettingsStore) -> Result<()> {
    println!("Logged in as: {}", store.username_or_guest());
    println!();
    println!("Model:          Hybrid ML + Stylometry");
    println!("Explainability: SHAP");
    println!("Backend:        FastAPI");
    println!("Client:         originai {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
