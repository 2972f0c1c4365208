use std::sync::Arc;

use anyhow::{Context, Result};

use crate::io::ReadAt;
use crate::meta::VrmMeta;

use super::parser::{MIN_PREFIX, extract_meta};
use super::scanner::Scan;
use super::structures::{ChunkHeader, GlbHeader, RawMeta};

/// High-level metadata reader over any random-access source.
///
/// A VRM file is mostly mesh and texture data; the metadata lives in the
/// JSON chunk right behind the 12-byte header. This reader fetches only
/// that prefix - for an HTTP source that means two small Range requests
/// instead of downloading the whole model.
pub struct MetaExtractor<R: ReadAt> {
    reader: Arc<R>,
}

impl<R: ReadAt> MetaExtractor<R> {
    pub fn new(reader: Arc<R>) -> Self {
        Self { reader }
    }

    /// Read the container prefix: fixed header, JSON chunk, and the BIN
    /// chunk header behind it (when the source is large enough to hold one).
    async fn load_prefix(&self) -> Result<Vec<u8>> {
        let size = self.reader.size();

        // First read: enough to learn the declared JSON chunk length.
        let head_len = (MIN_PREFIX as u64).min(size) as usize;
        let mut head = vec![0u8; head_len];
        self.reader.read_at(0, &mut head).await?;

        let mut prefix_len = head_len as u64;
        if head_len == MIN_PREFIX {
            // Chunk length sits right behind the 12-byte header. Whether the
            // chunk really is the JSON chunk is the extractor's call; here it
            // only sizes the second read.
            let mut scan = Scan::new(&head);
            scan.advance(GlbHeader::SIZE);
            if let Some(chunk_len) = scan.read_u32_le() {
                prefix_len =
                    (MIN_PREFIX as u64 + chunk_len as u64 + ChunkHeader::SIZE as u64).min(size);
            }
        }

        let mut buf = vec![0u8; prefix_len as usize];
        buf[..head_len].copy_from_slice(&head);
        if prefix_len as usize > head_len {
            self.reader
                .read_at(head_len as u64, &mut buf[head_len..])
                .await?;
        }

        Ok(buf)
    }

    /// Extract the raw metadata strings, with any soft-validation warnings.
    pub async fn read_raw(&self) -> Result<RawMeta> {
        let prefix = self.load_prefix().await?;
        let raw = extract_meta(&prefix)?;
        Ok(raw)
    }

    /// Extract and deserialize the metadata into a structured [`VrmMeta`].
    ///
    /// Warnings are dropped here; use [`read_raw`](Self::read_raw) plus
    /// [`VrmMeta::from_raw`] to surface them.
    pub async fn read_meta(&self) -> Result<VrmMeta> {
        let raw = self.read_raw().await?;
        let meta = VrmMeta::from_raw(&raw).context("meta fragment is not valid JSON")?;
        Ok(meta)
    }
}
