mod http;
mod local;

pub use http::HttpRangeReader;
pub use local::LocalFileReader;

use anyhow::Result;
use async_trait::async_trait;

/// Trait for random access reading from a data source.
///
/// Metadata extraction only ever touches the front of a VRM file, so a
/// source that can serve arbitrary ranges (a local file, or a server that
/// honors Range requests) never has to produce the whole asset.
#[async_trait]
pub trait ReadAt: Send + Sync {
    /// Read data at the specified offset into the buffer
    async fn read_at(&self, offset: u64, buf: &mut [u8]) -> Result<usize>;

    /// Get the total size of the data source
    fn size(&self) -> u64;
}
