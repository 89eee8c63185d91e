//! 🔌 Backends — where the bundled rate lists come from.
//!
//! 🚰 A `Source` hands over one [`SourceDocument`]. That's the whole job.
//! Files on disk (optionally gzipped) for the real thing, an inline document
//! for tests and demos. After startup nobody touches a backend again; the
//! catalog is resident in memory for the rest of the process.
//!
//! 🦆 The duck is here because every file must have one. Do not question the duck.

use anyhow::Result;
use async_trait::async_trait;

use crate::app_config::SourceConfig;
use crate::common::SourceDocument;

pub(crate) mod file;
pub(crate) mod in_mem;

// 🎯 configs are co-located with their backend, re-exported here for callers
pub use file::FileSourceConfig;
pub use in_mem::InMemorySourceConfig;

/// 🚰 Something that can produce a state's source document.
///
/// # Contract
/// - `load_document` parses and returns the whole document. No streaming, no paging.
/// - Failures carry enough context to find the broken file without a debugger.
#[async_trait]
pub(crate) trait Source: std::fmt::Debug {
    async fn load_document(&mut self) -> Result<SourceDocument>;
}

/// 🎭 The many faces of a Source. Dispatches via match, so callers never care
/// whether the document came from disk or from the config itself.
#[derive(Debug)]
pub(crate) enum SourceBackend {
    File(file::FileSource),
    InMemory(in_mem::InMemorySource),
}

impl SourceBackend {
    /// 🔧 Resolve the backend from its config.
    pub(crate) fn from_config(config: &SourceConfig) -> Self {
        match config {
            SourceConfig::File(file_config) => {
                SourceBackend::File(file::FileSource::new(file_config.clone()))
            }
            SourceConfig::InMemory(in_mem_config) => {
                SourceBackend::InMemory(in_mem::InMemorySource::new(in_mem_config.clone()))
            }
        }
    }
}

#[async_trait]
impl Source for SourceBackend {
    async fn load_document(&mut self) -> Result<SourceDocument> {
        match self {
            SourceBackend::File(f) => f.load_document().await,
            SourceBackend::InMemory(i) => i.load_document().await,
        }
    }
}
