use std::io;
use std::path::Path;

/// A file selected for upload: the original filename plus its raw content.
///
/// No format or size check happens here; the service decides what it can
/// extract text from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read a file from disk, keeping its file name for the upload.
    pub fn read(path: &Path) -> io::Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let bytes = std::fs::read(path)?;
        Ok(Self { name, bytes })
    }
}

/// The current input mode. The variants are mutually exclusive by
/// construction: holding text and a file at the same time is simply not
/// representable.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    #[default]
    Empty,
    Text(String),
    SingleFile(UploadFile),
    FileBatch(Vec<UploadFile>),
}

/// Holds what the user has selected for analysis.
///
/// Each setter replaces the whole state, so picking one mode always drops
/// whatever the other two held before.
#[derive(Debug, Default)]
pub struct InputSelector {
    state: InputState,
}

impl InputSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.state = InputState::Text(text.into());
    }

    pub fn set_single_file(&mut self, file: UploadFile) {
        self.state = InputState::SingleFile(file);
    }

    pub fn set_file_batch(&mut self, files: Vec<UploadFile>) {
        self.state = InputState::FileBatch(files);
    }

    pub fn clear(&mut self) {
        self.state = InputState::Empty;
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Whether there is anything worth submitting: non-whitespace text, a
    /// selected file, or a non-empty batch.
    pub fn is_ready(&self) -> bool {
        match &self.state {
            InputState::Empty => false,
            InputState::Text(text) => !text.trim().is_empty(),
            InputState::SingleFile(_) => true,
            InputState::FileBatch(files) => !files.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> UploadFile {
        UploadFile::new(name, b"content".to_vec())
    }

    #[test]
    fn starts_empty_and_not_ready() {
        let selector = InputSelector::new();
        assert_eq!(selector.state(), &InputState::Empty);
        assert!(!selector.is_ready());
    }

    #[test]
    fn setting_text_clears_file_selection() {
        let mut selector = InputSelector::new();
        selector.set_single_file(file("essay.txt"));
        selector.set_text("pasted text");
        assert_eq!(selector.state(), &InputState::Text("pasted text".into()));
    }

    #[test]
    fn setting_file_clears_text_and_batch() {
        let mut selector = InputSelector::new();
        selector.set_text("pasted text");
        selector.set_file_batch(vec![file("a.txt"), file("b.txt")]);
        selector.set_single_file(file("essay.txt"));
        assert_eq!(selector.state(), &InputState::SingleFile(file("essay.txt")));
    }

    #[test]
    fn setting_batch_clears_text_and_file() {
        let mut selector = InputSelector::new();
        selector.set_single_file(file("essay.txt"));
        selector.set_file_batch(vec![file("a.txt")]);
        assert_eq!(selector.state(), &InputState::FileBatch(vec![file("a.txt")]));
    }

    #[test]
    fn exactly_one_variant_survives_any_setter_sequence() {
        let mut selector = InputSelector::new();
        selector.set_text("one");
        selector.set_file_batch(vec![file("a.txt")]);
        selector.set_text("two");
        selector.set_single_file(file("b.txt"));
        selector.set_text("three");
        assert_eq!(selector.state(), &InputState::Text("three".into()));
    }

    #[test]
    fn whitespace_text_is_not_ready() {
        let mut selector = InputSelector::new();
        selector.set_text("   \n\t  ");
        assert!(!selector.is_ready());
        selector.set_text("  real words  ");
        assert!(selector.is_ready());
    }

    #[test]
    fn empty_batch_is_not_ready() {
        let mut selector = InputSelector::new();
        selector.set_file_batch(vec![]);
        assert!(!selector.is_ready());
        selector.set_file_batch(vec![file("a.txt")]);
        assert!(selector.is_ready());
    }

    #[test]
    fn clear_resets_to_empty() {
        let mut selector = InputSelector::new();
        selector.set_text("something");
        selector.clear();
        assert!(!selector.is_ready());
        assert_eq!(selector.state(), &InputState::Empty);
    }
}
