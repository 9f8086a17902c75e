//! `.phy` file codec.
//!
//! Container layout, little-endian:
//! ```text
//! [0..4)    magic  b"PHYW"
//! [4..8)    schema version (u32 LE)
//! [8..40)   SHA-256 of the payload bytes
//! [40..]    payload = zstd-compressed CBOR encoding of the World
//! ```

use phykit_world::World;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::io::{Read, Write};
use std::path::Path;

/// Magic bytes at the start of every `.phy` file.
const MAGIC: [u8; 4] = *b"PHYW";

/// Current schema version.
const SCHEMA_VERSION: u32 = 1;

/// Total header length: magic + version + payload hash.
const HEADER_LEN: usize = 4 + 4 + 32;

/// Errors from `.phy` load/save operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("not a .phy file: bad magic")]
    BadMagic,
    #[error("file truncated: only {len} bytes, shorter than the container header")]
    Truncated { len: usize },
    #[error("schema version mismatch: file has v{file_version}, expected v{expected_version}")]
    SchemaMismatch {
        file_version: u32,
        expected_version: u32,
    },
    #[error("integrity check failed: expected {expected}, got {actual}")]
    IntegrityMismatch { expected: String, actual: String },
    #[error("CBOR serialization error: {0}")]
    CborEncode(String),
    #[error("CBOR deserialization error: {0}")]
    CborDecode(String),
}

/// Load a world from a `.phy` file.
///
/// Verifies magic, schema version, and the payload hash before decoding.
pub fn load_world(path: impl AsRef<Path>) -> Result<World, StoreError> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    if data.len() < HEADER_LEN {
        return Err(StoreError::Truncated { len: data.len() });
    }
    if data[0..4] != MAGIC {
        return Err(StoreError::BadMagic);
    }
    let file_version = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);
    if file_version != SCHEMA_VERSION {
        return Err(StoreError::SchemaMismatch {
            file_version,
            expected_version: SCHEMA_VERSION,
        });
    }

    let payload = &data[HEADER_LEN..];
    let stored_hash = &data[8..HEADER_LEN];
    let actual_hash = Sha256::digest(payload);
    if stored_hash != actual_hash.as_slice() {
        return Err(StoreError::IntegrityMismatch {
            expected: hex(stored_hash),
            actual: hex(&actual_hash),
        });
    }

    let cbor_bytes = zstd_decompress(payload)?;
    let world: World = cbor_deserialize(&cbor_bytes)?;
    tracing::debug!(
        path = %path.display(),
        bodies = world.body_count(),
        "loaded world"
    );
    Ok(world)
}

/// Save a world to a `.phy` file, creating or replacing it.
pub fn save_world(world: &World, path: impl AsRef<Path>) -> Result<(), StoreError> {
    let path = path.as_ref();
    let cbor_bytes = cbor_serialize(world)?;
    let payload = zstd_compress(&cbor_bytes)?;

    let mut data = Vec::with_capacity(HEADER_LEN + payload.len());
    data.extend_from_slice(&MAGIC);
    data.extend_from_slice(&SCHEMA_VERSION.to_le_bytes());
    data.extend_from_slice(&Sha256::digest(&payload));
    data.extend_from_slice(&payload);

    std::fs::write(path, &data)?;
    tracing::debug!(
        path = %path.display(),
        bodies = world.body_count(),
        bytes = data.len(),
        "saved world"
    );
    Ok(())
}

fn cbor_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::new();
    ciborium::into_writer(value, &mut buf).map_err(|e| StoreError::CborEncode(e.to_string()))?;
    Ok(buf)
}

fn cbor_deserialize<T: for<'de> Deserialize<'de>>(data: &[u8]) -> Result<T, StoreError> {
    ciborium::from_reader(data).map_err(|e| StoreError::CborDecode(e.to_string()))
}

fn zstd_compress(data: &[u8]) -> Result<Vec<u8>, StoreError> {
    let mut encoder = zstd::Encoder::new(Vec::new(), 3)?;
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

fn zstd_decompress(data: &[u8]) -> Result<Vec<u8>, StoreError> {
    let mut decoder = zstd::Decoder::new(data)?;
    let mut buf = Vec::new();
    decoder.read_to_end(&mut buf)?;
    Ok(buf)
}

fn hex(data: &[u8]) -> String {
    data.iter().map(|b| format!("{b:02x}")).collect()
}
