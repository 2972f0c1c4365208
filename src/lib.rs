//! # vrmeta
//!
//! A fast VRM metadata reader with HTTP Range request support.
//!
//! This library extracts the metadata of VRM models (GLB/binary-glTF
//! containers) without parsing the scene JSON and without reading the mesh
//! and texture payload. The two fields it needs - the exporter version
//! string and the `meta` object - are located by exact literal byte match
//! inside the JSON chunk, in a single pass over a prefix of the file.
//!
//! For remote files it uses HTTP Range requests, so inspecting a
//! multi-megabyte model costs two requests totalling a few kilobytes.
//!
//! ## Features
//!
//! - Zero-copy extraction core ([`extract_meta`]) over any byte buffer
//! - Local filesystem and HTTP/HTTPS sources via the [`ReadAt`] trait
//! - Structured [`VrmMeta`] deserialization of the extracted fragment
//! - Soft-validation warnings (version mismatch, missing BIN chunk)
//!   returned as values, never logged by the core
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use vrmeta::{HttpRangeReader, MetaExtractor};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Create a reader for a remote VRM file
//!     let reader = Arc::new(HttpRangeReader::new("https://example.com/model.vrm".to_string()).await?);
//!
//!     // Fetch only the metadata prefix and extract
//!     let extractor = MetaExtractor::new(reader);
//!     let meta = extractor.read_meta().await?;
//!     println!("{} by {}", meta.title, meta.author);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod glb;
pub mod io;
pub mod meta;

pub use cli::Cli;
pub use glb::{ExtractError, MetaExtractor, RawMeta, Warning, extract_meta};
pub use io::{HttpRangeReader, LocalFileReader, ReadAt};
pub use meta::VrmMeta;
