//! Save-data codecs.
//!
//! The text codec is the portable interchange format: pretty-printed JSON
//! mirroring the record tree, with enum values and roster keys written as
//! symbolic names. Decoding is defensive; only unparseable text is an error.
//!
//! The binary codec captures the exact in-memory object graph (bincode,
//! zlib-compressed). It is not human-readable, not portable across releases,
//! and must not be fed untrusted input.

use std::io::{Read, Write};

use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;

use crate::error::{SaveError, SaveErrorCode};
use crate::model::SaveData;

/// Encode to the textual save format.
pub fn encode_json(data: &SaveData) -> String {
    let value = data.to_json();
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}

/// Decode the textual save format.
///
/// The text must parse as JSON; beyond that, every field is read with
/// get-with-default semantics and unknown keys are skipped.
pub fn decode_json(text: &str) -> Result<SaveData, SaveError> {
    let value: serde_json::Value = serde_json::from_str(text).map_err(|e| {
        SaveError::new(SaveErrorCode::Corrupt, format!("malformed save text: {e}"))
    })?;
    Ok(SaveData::from_json(&value))
}

/// Encode to the opaque binary format.
pub fn encode_binary(data: &SaveData) -> Result<Vec<u8>, SaveError> {
    let raw = bincode::serialize(data).map_err(|e| {
        SaveError::new(
            SaveErrorCode::Corrupt,
            format!("failed to encode save graph: {e}"),
        )
    })?;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&raw).map_err(|e| {
        SaveError::new(
            SaveErrorCode::Io,
            format!("failed to compress save graph: {e}"),
        )
    })?;
    encoder.finish().map_err(|e| {
        SaveError::new(
            SaveErrorCode::Io,
            format!("failed to compress save graph: {e}"),
        )
    })
}

/// Decode the opaque binary format.
pub fn decode_binary(bytes: &[u8]) -> Result<SaveData, SaveError> {
    let mut decoder = ZlibDecoder::new(bytes);
    let mut raw = Vec::new();
    decoder.read_to_end(&mut raw).map_err(|e| {
        SaveError::new(
            SaveErrorCode::Corrupt,
            format!("malformed binary save: {e}"),
        )
    })?;

    bincode::deserialize(&raw).map_err(|e| {
        SaveError::new(
            SaveErrorCode::Corrupt,
            format!("malformed binary save: {e}"),
        )
    })
}
