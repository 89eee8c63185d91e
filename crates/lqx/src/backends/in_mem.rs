//! 🧠 In-memory source: the document lives right inside the config.
//!
//! ✅ No disk. No network. No heartbeat. Great for tests, great for a demo
//! config you can paste into a bug report.

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::trace;

use crate::backends::Source;
use crate::common::SourceDocument;

#[derive(Debug, Deserialize, Clone)]
pub struct InMemorySourceConfig {
    pub document: SourceDocument,
}

#[derive(Debug)]
pub(crate) struct InMemorySource {
    source_config: InMemorySourceConfig,
}

impl InMemorySource {
    pub(crate) fn new(source_config: InMemorySourceConfig) -> Self {
        Self { source_config }
    }
}

#[async_trait]
impl Source for InMemorySource {
    async fn load_document(&mut self) -> Result<SourceDocument> {
        trace!(
            "🧠 handing over an inline document for '{}'",
            self.source_config.document.document.state
        );
        Ok(self.source_config.document.clone())
    }
}
