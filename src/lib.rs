//! Client-side workflow for the OriginAI text-origin classification service.
//!
//! The service decides whether a piece of writing is human, AI-generated, or
//! LLM-rewritten; this crate owns everything on the near side of that call:
//! the mutually-exclusive input selection, the dispatch across the three
//! submission shapes (text, single file, first-of-batch), normalization of
//! the partially-optional result payload, and the numeric contracts the
//! rendered output has to honor (attribution-bar scaling, two-decimal
//! percentages, stylometry formatting).

pub mod client;
pub mod dispatch;
pub mod error;
pub mod input;
pub mod render;
pub mod report;
pub mod store;

pub use client::ApiClient;
pub use dispatch::{Dispatcher, Outcome};
pub use error::AnalysisError;
pub use input::{InputSelector, InputState, UploadFile};
pub use report::{AnalysisResult, HistoryEntry, ShapToken};

/// Analyze a block of text against the service at `base_url`.
///
/// Convenience wrapper over the full selector/dispatcher workflow for
/// callers that only ever submit text.
pub async fn analyze_text(base_url: &str, text: &str) -> Result<AnalysisResult, AnalysisError> {
    let dispatcher = Dispatcher::new(ApiClient::new(base_url));
    let mut selector = InputSelector::new();
    selector.set_text(text);
    Ok(dispatcher.analyze(selector.state()).await?.into_result())
}
