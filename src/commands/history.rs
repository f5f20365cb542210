use anyhow::Result;

use originai::{ApiClient, Dispatcher};

use crate::output;

/// Print past analyses. A fetch failure degrades to the empty state; unlike
/// analysis itself, history never surfaces an error.
pub async fn run(server: &str) -> Result<()> {
    let dispatcher = Dispatcher::new(ApiClient::new(server));
    let entries = dispatcher.history_or_empty().await;
    print!("{}", output::format_history(&entries));
    Ok(())
}
