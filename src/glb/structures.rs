use byteorder::{ByteOrder, LittleEndian};

use super::error::{ExtractError, Warning};

/// GLB fixed header - 12 bytes
pub struct GlbHeader {
    pub version: u32,
    pub total_length: u32,
}

impl GlbHeader {
    pub const MAGIC: &'static [u8] = b"glTF";
    pub const SIZE: usize = 12;
    pub const VERSION: u32 = 2;

    pub fn from_bytes(data: &[u8]) -> Result<Self, ExtractError> {
        if data.len() < Self::MAGIC.len() {
            return Err(ExtractError::Truncated("GLB header"));
        }

        // Verify magic before anything else; a wrong tag beats a short read
        if &data[0..4] != Self::MAGIC {
            return Err(ExtractError::BadMagic);
        }

        if data.len() < Self::SIZE {
            return Err(ExtractError::Truncated("GLB header"));
        }

        Ok(Self {
            version: LittleEndian::read_u32(&data[4..8]),
            total_length: LittleEndian::read_u32(&data[8..12]),
        })
    }
}

/// Chunk header - 8 bytes (length followed by a 4-byte type tag)
pub struct ChunkHeader {
    pub length: u32,
    pub chunk_type: [u8; 4],
}

impl ChunkHeader {
    pub const SIZE: usize = 8;
    pub const TYPE_JSON: [u8; 4] = *b"JSON";
    pub const TYPE_BIN: [u8; 4] = *b"BIN\0";

    pub fn from_bytes(data: &[u8]) -> Result<Self, ExtractError> {
        if data.len() < Self::SIZE {
            return Err(ExtractError::Truncated("chunk header"));
        }

        // The type tag is compared as raw bytes, never decoded as text
        let mut chunk_type = [0u8; 4];
        chunk_type.copy_from_slice(&data[4..8]);

        Ok(Self {
            length: LittleEndian::read_u32(&data[0..4]),
            chunk_type,
        })
    }

    pub fn is_json(&self) -> bool {
        self.chunk_type == Self::TYPE_JSON
    }

    pub fn is_bin(&self) -> bool {
        self.chunk_type == Self::TYPE_BIN
    }
}

/// Raw extraction output: the two substrings pulled out of the JSON chunk,
/// owned and independent of the source buffer, plus any soft-validation
/// diagnostics collected along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMeta {
    /// Value of the flat `exporterVersion` field (closing quote excluded).
    pub exporter_version: String,
    /// The `meta` object fragment, closing brace included, suitable for
    /// standalone JSON deserialization.
    pub meta_json: String,
    /// Non-fatal findings (version mismatch, absent or mistyped BIN chunk).
    pub warnings: Vec<Warning>,
}
