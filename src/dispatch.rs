use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::client::ApiClient;
use crate::error::AnalysisError;
use crate::input::{InputState, UploadFile};
use crate::report::{AnalysisResult, HistoryEntry};

/// Which request shape a submission resolves to.
#[derive(Debug, PartialEq)]
pub enum Strategy<'a> {
    /// JSON body to the text endpoint.
    Text(&'a str),
    /// Multipart upload to the file endpoint.
    File(&'a UploadFile),
}

/// Pick the submission strategy for the current input, in fixed priority
/// order: text, then single file, then the first file of a batch.
///
/// The selector already makes the variants exclusive; the priority order is
/// re-checked here so hand-built states get the same contract. A batch is
/// reduced to its first file only (see DESIGN.md for why that stands).
pub fn select_strategy(state: &InputState) -> Result<Strategy<'_>, AnalysisError> {
    match state {
        InputState::Text(text) if !text.trim().is_empty() => Ok(Strategy::Text(text)),
        InputState::SingleFile(file) => Ok(Strategy::File(file)),
        InputState::FileBatch(files) => match files.first() {
            Some(first) => Ok(Strategy::File(first)),
            None => Err(AnalysisError::NoInput),
        },
        _ => Err(AnalysisError::NoInput),
    }
}

/// What happened to a submission once the service answered.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// The result became the current one.
    Applied(AnalysisResult),
    /// A later submission already resolved; this result was discarded.
    Stale(AnalysisResult),
}

impl Outcome {
    /// The service's result, whether or not it was applied.
    pub fn into_result(self) -> AnalysisResult {
        match self {
            Outcome::Applied(result) | Outcome::Stale(result) => result,
        }
    }
}

/// The shared "current result" slot, with stale-response suppression.
///
/// Every submission reserves a ticket before its request goes out. A
/// resolution is stored only while its ticket is the highest committed so
/// far, so an older call resolving after a newer one can never clobber the
/// fresher result. Failures never commit, so they suppress nothing.
#[derive(Debug, Default)]
pub struct ResultSlot {
    next: AtomicU64,
    latest: Mutex<Latest>,
}

#[derive(Debug, Default)]
struct Latest {
    ticket: u64,
    result: Option<AnalysisResult>,
}

impl ResultSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a submission ticket. Tickets start at 1; ticket 0 means
    /// nothing has been applied yet.
    pub fn begin(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Store `result` unless a later submission already resolved. Returns
    /// whether the result was applied.
    pub fn commit(&self, ticket: u64, result: AnalysisResult) -> bool {
        let mut latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
        if ticket < latest.ticket {
            return false;
        }
        latest.ticket = ticket;
        latest.result = Some(result);
        true
    }

    /// Snapshot of the most recently applied result.
    pub fn current(&self) -> Option<AnalysisResult> {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .result
            .clone()
    }
}

/// Issues analysis submissions and funnels resolutions through a
/// [`ResultSlot`].
///
/// The dispatcher itself is stateless and reentrant; it does not serialize
/// callers or deduplicate concurrent submissions. The slot is what keeps
/// overlapping calls from applying out of order.
#[derive(Debug, Default)]
pub struct Dispatcher {
    client: ApiClient,
    slot: ResultSlot,
}

impl Dispatcher {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            slot: ResultSlot::new(),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// The most recently applied result, if any submission has resolved.
    pub fn current_result(&self) -> Option<AnalysisResult> {
        self.slot.current()
    }

    /// Submit the current selection. Fails with [`AnalysisError::NoInput`]
    /// before any network traffic when nothing usable is selected; otherwise
    /// issues exactly one request and commits the resolution through the
    /// result slot.
    pub async fn analyze(&self, state: &InputState) -> Result<Outcome, AnalysisError> {
        let strategy = select_strategy(state)?;
        let ticket = self.slot.begin();
        tracing::debug!(ticket, "submitting analysis");

        let result = match strategy {
            Strategy::Text(text) => self.client.predict_text(text).await?,
            Strategy::File(file) => self.client.predict_file(file).await?,
        };

        if self.slot.commit(ticket, result.clone()) {
            Ok(Outcome::Applied(result))
        } else {
            tracing::debug!(ticket, "discarding stale analysis response");
            Ok(Outcome::Stale(result))
        }
    }

    /// Fetch the history feed, degrading to an empty list on any failure.
    ///
    /// This asymmetry with [`analyze`](Self::analyze) is deliberate: a broken
    /// history feed should never block the main workflow, so the error is
    /// logged and swallowed.
    pub async fn history_or_empty(&self) -> Vec<HistoryEntry> {
        match self.client.history().await {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!("history fetch failed: {err}");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputSelector;

    fn file(name: &str) -> UploadFile {
        UploadFile::new(name, b"content".to_vec())
    }

    fn result(label: &str) -> AnalysisResult {
        AnalysisResult {
            label: label.into(),
            confidence: 0.9,
            shap: None,
            stylometry: None,
        }
    }

    #[test]
    fn empty_state_selects_nothing() {
        assert!(matches!(
            select_strategy(&InputState::Empty),
            Err(AnalysisError::NoInput)
        ));
    }

    #[test]
    fn whitespace_text_selects_nothing() {
        assert!(matches!(
            select_strategy(&InputState::Text("  \n ".into())),
            Err(AnalysisError::NoInput)
        ));
    }

    #[test]
    fn empty_batch_selects_nothing() {
        assert!(matches!(
            select_strategy(&InputState::FileBatch(vec![])),
            Err(AnalysisError::NoInput)
        ));
    }

    #[test]
    fn text_wins_over_everything() {
        let state = InputState::Text("some prose".into());
        assert_eq!(select_strategy(&state).unwrap(), Strategy::Text("some prose"));
    }

    #[test]
    fn single_file_goes_to_the_file_endpoint() {
        let essay = file("essay.txt");
        let state = InputState::SingleFile(essay.clone());
        assert_eq!(select_strategy(&state).unwrap(), Strategy::File(&essay));
    }

    #[test]
    fn batch_reduces_to_its_first_file() {
        let first = file("first.txt");
        let state = InputState::FileBatch(vec![first.clone(), file("second.txt"), file("third.txt")]);
        assert_eq!(select_strategy(&state).unwrap(), Strategy::File(&first));
    }

    #[test]
    fn selector_output_always_selects_its_latest_mode() {
        let mut selector = InputSelector::new();
        selector.set_file_batch(vec![file("a.txt")]);
        selector.set_text("typed after choosing files");
        assert_eq!(
            select_strategy(selector.state()).unwrap(),
            Strategy::Text("typed after choosing files")
        );
    }

    #[test]
    fn later_ticket_wins_regardless_of_commit_order() {
        let slot = ResultSlot::new();
        let a = slot.begin();
        let b = slot.begin();
        assert!(a < b);

        // B resolves first, then A straggles in.
        assert!(slot.commit(b, result("B")));
        assert!(!slot.commit(a, result("A")));
        assert_eq!(slot.current().unwrap().label, "B");
    }

    #[test]
    fn in_order_resolutions_both_apply() {
        let slot = ResultSlot::new();
        let a = slot.begin();
        let b = slot.begin();
        assert!(slot.commit(a, result("A")));
        assert!(slot.commit(b, result("B")));
        assert_eq!(slot.current().unwrap().label, "B");
    }

    #[test]
    fn slot_starts_empty() {
        assert_eq!(ResultSlot::new().current(), None);
    }

    #[test]
    fn outcome_unwraps_either_way() {
        assert_eq!(Outcome::Applied(result("X")).into_result().label, "X");
        assert_eq!(Outcome::Stale(result("Y")).into_result().label, "Y");
    }
}
