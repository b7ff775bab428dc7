//! Debug sink: persists the normalized page content as JSON.
//!
//! Best-effort by contract. The pipeline logs and continues when the write
//! fails; only the reader side (used for inspection and tests) is strict.

use crate::error::Result;
use crate::types::PageContent;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Write page content as pretty JSON, overwriting any existing file.
pub fn write_snapshot(path: &Path, content: &PageContent) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, content)?;
    Ok(())
}

/// Read page content back from a snapshot file.
pub fn read_snapshot(path: &Path) -> Result<PageContent> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContentBlock;

    fn sample_content() -> PageContent {
        PageContent {
            url: "https://example.com/article".into(),
            title: "Title".into(),
            blocks: vec![
                ContentBlock::heading("Title"),
                ContentBlock::paragraph("A"),
                ContentBlock::image("https://example.com/i.png", Some("pic".into())),
            ],
        }
    }

    #[test]
    fn test_round_trip_is_lossless() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let content = sample_content();

        write_snapshot(&path, &content).unwrap();
        let back = read_snapshot(&path).unwrap();

        assert_eq!(back, content);
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");

        let mut first = sample_content();
        write_snapshot(&path, &first).unwrap();

        first.blocks.truncate(1);
        write_snapshot(&path, &first).unwrap();

        let back = read_snapshot(&path).unwrap();
        assert_eq!(back.blocks.len(), 1);
    }

    #[test]
    fn test_write_to_bad_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("data.json");

        assert!(write_snapshot(&path, &sample_content()).is_err());
    }
}
