//! Single-pass metadata extraction from a GLB buffer.
//!
//! The walk validates the fixed header, confirms the first chunk is the
//! JSON chunk, best-effort probes the BIN chunk that follows it, then
//! locates the VRM extension anchor and pulls out exactly two fields by
//! literal byte match. Nothing is allocated until the matched byte ranges
//! are materialized into the output strings.

use super::error::{ExtractError, Warning};
use super::scanner::Scan;
use super::structures::{ChunkHeader, GlbHeader, RawMeta};

/// Bytes needed before the declared JSON chunk length is known:
/// GLB header plus the first chunk header.
pub const MIN_PREFIX: usize = GlbHeader::SIZE + ChunkHeader::SIZE;

/// `"VRM":{` - start of the named VRM extension object.
const ANCHOR: &[u8] = b"\"VRM\":{";
/// `"exporterVersion":"` - key literal up to and including the opening quote.
const KEY_EXPORTER_VERSION: &[u8] = b"\"exporterVersion\":\"";
/// `"meta":` - key literal up to and including the colon.
const KEY_META: &[u8] = b"\"meta\":";

/// Extract the exporter-version string and the `meta` object fragment from
/// a GLB (binary glTF) buffer.
///
/// The buffer only has to hold the container prefix: fixed header, JSON
/// chunk, and ideally the BIN chunk header behind it. Trailing mesh and
/// texture bytes are never touched, so callers reading from slow sources
/// can supply just that prefix (see [`MetaExtractor`](super::MetaExtractor)).
///
/// An empty buffer is caller misuse and reported as
/// [`ExtractError::EmptyInput`]; every other failure is a structural
/// problem with the container. On failure nothing partial is produced.
pub fn extract_meta(buffer: &[u8]) -> Result<RawMeta, ExtractError> {
    if buffer.is_empty() {
        return Err(ExtractError::EmptyInput);
    }

    let mut warnings = Vec::new();

    // Fixed header: magic is load-bearing, version is advisory, the total
    // length is consumed but unused.
    let header = GlbHeader::from_bytes(buffer)?;
    if header.version != GlbHeader::VERSION {
        warnings.push(Warning::VersionMismatch {
            found: header.version,
        });
    }

    let mut cursor = Scan::new(buffer);
    cursor.advance(GlbHeader::SIZE);

    // First chunk must be the JSON chunk
    let chunk = ChunkHeader::from_bytes(cursor.rest())?;
    if !chunk.is_json() {
        return Err(ExtractError::UnexpectedChunkType {
            tag: chunk.chunk_type,
        });
    }
    cursor.advance(ChunkHeader::SIZE);

    probe_bin_chunk(cursor, chunk.length as usize, &mut warnings);

    // Confine field scans to the declared JSON chunk length so they cannot
    // wander into the binary payload.
    let mut json = cursor;
    json.truncate(chunk.length as usize);

    if !json.find(ANCHOR) {
        return Err(ExtractError::AnchorNotFound);
    }
    json.advance(ANCHOR.len());

    // Both fields are siblings inside the anchored object; each scan starts
    // from its own copy of the post-anchor cursor, so their order in the
    // source JSON does not matter.
    let exporter_version = read_string_field(json, KEY_EXPORTER_VERSION, "exporterVersion")?;
    let meta_json = read_object_field(json, KEY_META, "meta")?;

    Ok(RawMeta {
        exporter_version: String::from_utf8_lossy(exporter_version).into_owned(),
        meta_json: String::from_utf8_lossy(meta_json).into_owned(),
        warnings,
    })
}

/// Probe the chunk that follows the JSON chunk. Its values are unused by
/// metadata extraction, so a short buffer or an unexpected type tag is a
/// warning rather than a failure.
fn probe_bin_chunk(cursor: Scan<'_>, json_len: usize, warnings: &mut Vec<Warning>) {
    let mut bin = cursor;
    if !bin.advance(json_len) {
        warnings.push(Warning::MissingBinChunk);
        return;
    }
    match ChunkHeader::from_bytes(bin.rest()) {
        Ok(chunk) if chunk.is_bin() => {}
        Ok(chunk) => warnings.push(Warning::UnknownChunkType {
            tag: chunk.chunk_type,
        }),
        Err(_) => warnings.push(Warning::MissingBinChunk),
    }
}

/// Locate `key` (which ends with the value's opening quote), then delimit
/// the value at the next `"`. The returned bytes exclude both quotes.
fn read_string_field<'a>(
    mut cursor: Scan<'a>,
    key: &[u8],
    name: &'static str,
) -> Result<&'a [u8], ExtractError> {
    if !cursor.find(key) {
        return Err(ExtractError::FieldNotFound(name));
    }
    cursor.advance(key.len());

    let value = cursor;
    if !cursor.find_byte(b'"') {
        return Err(ExtractError::UnterminatedField(name));
    }
    Ok(&value.rest()[..cursor.distance_from(&value)])
}

/// Locate `key` (which ends with the colon), then delimit the value at the
/// next `}`. The brace is included so the fragment parses as a standalone
/// JSON object.
///
/// There is no nested-brace counting: the first `}` wins. A `meta` object
/// containing nested objects or arrays is truncated at the inner brace,
/// producing an unparseable fragment. Accepted limitation for
/// producer-controlled input; a regression test pins this behavior.
fn read_object_field<'a>(
    mut cursor: Scan<'a>,
    key: &[u8],
    name: &'static str,
) -> Result<&'a [u8], ExtractError> {
    if !cursor.find(key) {
        return Err(ExtractError::FieldNotFound(name));
    }
    cursor.advance(key.len());

    let value = cursor;
    if !cursor.find_byte(b'}') {
        return Err(ExtractError::UnterminatedField(name));
    }
    Ok(&value.rest()[..cursor.distance_from(&value) + 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_field_excludes_the_quotes() {
        let json = br#"{"exporterVersion":"UniVRM-0.99","meta":{}}"#;
        let value = read_string_field(Scan::new(json), KEY_EXPORTER_VERSION, "exporterVersion")
            .expect("field present");
        assert_eq!(value, b"UniVRM-0.99");
    }

    #[test]
    fn string_field_may_be_empty() {
        let json = br#"{"exporterVersion":""}"#;
        let value = read_string_field(Scan::new(json), KEY_EXPORTER_VERSION, "exporterVersion")
            .expect("field present");
        assert_eq!(value, b"");
    }

    #[test]
    fn object_field_includes_the_closing_brace() {
        let json = br#"{"meta":{"title":"A"},"other":1}"#;
        let value = read_object_field(Scan::new(json), KEY_META, "meta").expect("field present");
        assert_eq!(value, br#"{"title":"A"}"#);
    }

    #[test]
    fn object_field_truncates_at_first_closing_brace() {
        // Known limitation: no nested-brace counting. The fragment stops at
        // the inner object's brace and is therefore not valid JSON.
        let json = br#"{"meta":{"title":"A","nested":{"x":1}}}"#;
        let value = read_object_field(Scan::new(json), KEY_META, "meta").expect("field present");
        assert_eq!(value, br#"{"title":"A","nested":{"x":1}"#);
    }

    #[test]
    fn missing_key_is_reported_by_name() {
        let json = br#"{"somethingElse":true}"#;
        assert_eq!(
            read_object_field(Scan::new(json), KEY_META, "meta"),
            Err(ExtractError::FieldNotFound("meta"))
        );
    }

    #[test]
    fn unterminated_value_is_reported_by_name() {
        let json = br#"{"exporterVersion":"never-ends"#;
        assert_eq!(
            read_string_field(Scan::new(json), KEY_EXPORTER_VERSION, "exporterVersion"),
            Err(ExtractError::UnterminatedField("exporterVersion"))
        );
    }

    #[test]
    fn whitespace_between_key_and_value_is_not_tolerated() {
        // The literal match includes the colon and opening quote; producers
        // that emit a space after the colon are not supported.
        let json = br#"{"exporterVersion": "UniVRM-0.99"}"#;
        assert_eq!(
            read_string_field(Scan::new(json), KEY_EXPORTER_VERSION, "exporterVersion"),
            Err(ExtractError::FieldNotFound("exporterVersion"))
        );
    }
}
