use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use originai::render::OutputFormat;
use originai::report::AnalysisResult;
use originai::{ApiClient, Dispatcher, InputSelector, UploadFile};

use crate::output;

pub fn parse_format(s: &str) -> Result<OutputFormat> {
    match s {
        "pretty" => Ok(OutputFormat::Pretty),
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => anyhow::bail!("unknown format: {other} (expected pretty, text, or json)"),
    }
}

/// Collect every regular file under `path`, sorted by path so "first file of
/// the folder" is deterministic across platforms.
pub fn collect_folder(path: &Path) -> Result<Vec<UploadFile>> {
    let mut paths: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().to_path_buf())
        .collect();
    paths.sort();

    paths
        .iter()
        .map(|p| UploadFile::read(p).with_context(|| format!("failed to read {}", p.display())))
        .collect()
}

fn format_result(result: &AnalysisResult, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => output::format_json(result),
        OutputFormat::Text => output::format_text(result),
        OutputFormat::Pretty => output::format_pretty(result),
    }
}

pub async fn run(
    text: Option<String>,
    file: Option<PathBuf>,
    folder: Option<PathBuf>,
    format: &str,
    server: &str,
) -> Result<()> {
    let fmt = parse_format(format)?;

    let mut selector = InputSelector::new();
    if let Some(text) = text {
        selector.set_text(text);
    } else if let Some(path) = file {
        let upload =
            UploadFile::read(&path).with_context(|| format!("failed to read {}", path.display()))?;
        selector.set_single_file(upload);
    } else if let Some(dir) = folder {
        let files = collect_folder(&dir)?;
        if files.is_empty() {
            anyhow::bail!("no files found in {}", dir.display());
        }
        if files.len() > 1 {
            eprintln!(
                "note: {} files selected; only {} is submitted",
                files.len(),
                files[0].name
            );
        }
        selector.set_file_batch(files);
    }

    let dispatcher = Dispatcher::new(ApiClient::new(server));
    let result = dispatcher
        .analyze(selector.state())
        .await
        .map_err(|e| anyhow::anyhow!("{}", e.user_message()))?
        .into_result();

    println!("{}", format_result(&result, fmt));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_format_accepts_the_three_formats() {
        assert_eq!(parse_format("pretty").unwrap(), OutputFormat::Pretty);
        assert_eq!(parse_format("text").unwrap(), OutputFormat::Text);
        assert_eq!(parse_format("json").unwrap(), OutputFormat::Json);
        assert!(parse_format("yaml").is_err());
    }

    #[test]
    fn collect_folder_sorts_by_path() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("b.txt"), "second").unwrap();
        std::fs::write(dir.path().join("a.txt"), "first").unwrap();
        let files = collect_folder(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].name, "a.txt");
        assert_eq!(files[0].bytes, b"first");
    }
}
