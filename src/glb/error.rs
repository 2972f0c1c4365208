use thiserror::Error;

/// Fatal extraction failures. Nothing partial is produced when one of these
/// is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// Caller contract violation: an empty buffer was passed in.
    #[error("input buffer is empty")]
    EmptyInput,

    /// The buffer ends before a required fixed-size field.
    #[error("buffer too short for {0}")]
    Truncated(&'static str),

    /// The first four bytes are not the `glTF` magic.
    #[error("magic bytes are not 'glTF'")]
    BadMagic,

    /// The first chunk is not the JSON chunk.
    #[error("unexpected first chunk type '{}', expected 'JSON'", .tag.escape_ascii())]
    UnexpectedChunkType { tag: [u8; 4] },

    /// The `"VRM":{` anchor does not occur in the JSON chunk.
    #[error("VRM extension anchor not found in JSON chunk")]
    AnchorNotFound,

    /// A required field's key literal does not occur after the anchor.
    #[error("'{0}' field not found")]
    FieldNotFound(&'static str),

    /// A field key was found but its terminating delimiter was not.
    #[error("'{0}' field value is unterminated")]
    UnterminatedField(&'static str),
}

/// Soft-validation findings. These never abort extraction; they are returned
/// alongside the result for the caller to report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Warning {
    #[error("unknown GLB version {found}, continuing anyway")]
    VersionMismatch { found: u32 },

    #[error("no BIN chunk follows the JSON chunk")]
    MissingBinChunk,

    #[error("unknown second chunk type '{}', expected 'BIN'", .tag.escape_ascii())]
    UnknownChunkType { tag: [u8; 4] },
}
