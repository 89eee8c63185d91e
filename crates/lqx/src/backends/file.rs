//! 📂 File source: a rate list on disk, JSON, maybe gzipped.
//!
//! The file didn't exist. The JSON had a trailing comma. Someone gzipped it
//! and kept the `.json` name. This module has seen it all, and it says so in
//! the error message.
//!
//! 📄 `*.json`    → read, parse
//! 🫁 `*.json.gz` → read, gunzip, parse

use std::io::Read;

use anyhow::{Context, Result};
use async_trait::async_trait;
use flate2::read::GzDecoder;
use serde::Deserialize;
use tracing::trace;

use crate::backends::Source;
use crate::common::SourceDocument;

// KNOWLEDGE GRAPH: config lives co-located with the backend that uses it.
#[derive(Debug, Deserialize, Clone)]
pub struct FileSourceConfig {
    pub file_name: String,
}

impl FileSourceConfig {
    fn is_gzipped(&self) -> bool {
        self.file_name.ends_with(".gz")
    }
}

#[derive(Debug)]
pub(crate) struct FileSource {
    source_config: FileSourceConfig,
}

impl FileSource {
    pub(crate) fn new(source_config: FileSourceConfig) -> Self {
        Self { source_config }
    }
}

#[async_trait]
impl Source for FileSource {
    async fn load_document(&mut self) -> Result<SourceDocument> {
        let file_name = &self.source_config.file_name;

        let bytes = tokio::fs::read(file_name).await.context(format!(
            "💀 The rate list at '{}' would not open. It may not exist, or the path is \
             relative to a directory you are not standing in.",
            file_name
        ))?;
        trace!("📖 read {} bytes from '{}'", bytes.len(), file_name);

        let json = if self.source_config.is_gzipped() {
            // 🫁 whole document is already in memory, a blocking decoder is fine here
            let mut inflated = String::with_capacity(bytes.len() * 4);
            GzDecoder::new(bytes.as_slice())
                .read_to_string(&mut inflated)
                .context(format!(
                    "💀 '{}' ends in .gz but did not gunzip into UTF-8 text",
                    file_name
                ))?;
            inflated
        } else {
            String::from_utf8(bytes)
                .context(format!("💀 '{}' is not valid UTF-8", file_name))?
        };

        serde_json::from_str(&json).context(format!(
            "💀 '{}' is not a rate list. Expected {{ document, manufacturers: [...] }}.",
            file_name
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    const A_TINY_RATE_LIST: &str = r#"{
        "document": { "state": "Jharkhand", "authority": "JSBCL", "financial_year": "2025-26" },
        "manufacturers": [
            { "name": "United Spirits", "products": [
                { "label_name": "Royal Stag", "category": "Whisky", "pack_size": "750ML",
                  "mrp": 640, "effective_date": "01.04.2025" }
            ]}
        ]
    }"#;

    #[tokio::test]
    async fn the_one_where_a_plain_json_file_loads() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("jharkhand.json");
        std::fs::write(&path, A_TINY_RATE_LIST)?;

        let mut source = FileSource::new(FileSourceConfig {
            file_name: path.display().to_string(),
        });
        let doc = source.load_document().await?;

        assert_eq!(doc.document.authority.as_deref(), Some("JSBCL"));
        assert_eq!(doc.product_count(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn the_one_where_a_gzipped_file_gets_inflated_first() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("jharkhand.json.gz");
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(A_TINY_RATE_LIST.as_bytes())?;
        std::fs::write(&path, encoder.finish()?)?;

        let mut source = FileSource::new(FileSourceConfig {
            file_name: path.display().to_string(),
        });
        let doc = source.load_document().await?;

        assert_eq!(doc.manufacturers[0].products[0].label_name, "Royal Stag");
        Ok(())
    }

    #[tokio::test]
    async fn the_one_where_the_file_is_missing_and_we_say_which_one() {
        let mut source = FileSource::new(FileSourceConfig {
            file_name: "/definitely/not/here.json".into(),
        });
        let err = source
            .load_document()
            .await
            .expect_err("💀 a missing file should not load");

        assert!(format!("{err}").contains("/definitely/not/here.json"));
    }

    #[tokio::test]
    async fn the_one_where_garbage_json_is_rejected_with_context() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("broken.json");
        std::fs::write(&path, r#"{ "document": { "state": "#)?;

        let mut source = FileSource::new(FileSourceConfig {
            file_name: path.display().to_string(),
        });
        let err = source.load_document().await.expect_err("💀 broken JSON loaded?!");

        assert!(format!("{err}").contains("is not a rate list"));
        Ok(())
    }
}
