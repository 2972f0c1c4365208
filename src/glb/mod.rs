//! GLB container parsing and metadata extraction.
//!
//! This module reads VRM metadata out of GLB (binary glTF) containers in a
//! single pass over raw bytes, without running a general JSON parser.
//!
//! ## Architecture
//!
//! The module is organized into four components:
//!
//! - [`structures`]: GLB format elements (fixed header, chunk headers) and
//!   the [`RawMeta`] output value
//! - [`scanner`]: a bounds-checked cursor with literal byte-pattern search
//! - [`parser`]: the container walk and field extraction ([`extract_meta`])
//! - [`extractor`]: prefix loading over a [`ReadAt`](crate::io::ReadAt)
//!   source plus structured deserialization
//!
//! ## GLB Format Overview
//!
//! A GLB file consists of:
//! 1. A 12-byte header: `glTF` magic, version, total length
//! 2. A length-prefixed JSON chunk holding the scene and extension data
//! 3. A length-prefixed BIN chunk holding mesh/texture payload
//!
//! The VRM metadata is a small nested object inside the JSON chunk, so this
//! implementation reads only the header and JSON chunk and locates the two
//! fields it needs (`exporterVersion` and `meta`) by exact literal byte
//! match. Megabytes of binary payload are never read - perfect for HTTP
//! Range requests.
//!
//! ## Limitations
//!
//! - Only the first JSON/BIN chunk pair is considered
//! - Key literals must appear with their exact canonical spelling; no
//!   whitespace between key, colon, and value
//! - No escaped-delimiter handling inside the scanned spans; the `meta`
//!   fragment ends at the first `}`, so nested objects truncate it

mod error;
mod extractor;
mod parser;
mod scanner;
mod structures;

pub use error::{ExtractError, Warning};
pub use extractor::MetaExtractor;
pub use parser::{MIN_PREFIX, extract_meta};
pub use scanner::Scan;
pub use structures::{ChunkHeader, GlbHeader, RawMeta};
