use heapless::String as HeaplessString;
use serde::Serialize;
use std::hash::Hasher;
use std::str::FromStr;
use twox_hash::XxHash64;

/// Hashes serializable data into an i64 using CBOR serialization and XxHash64.
///
/// The result is stable across runs and machines, which lets index keys be
/// computed ahead of time for the seeded tables.
pub fn hash_as_i64<T: Serialize>(data: &T) -> Result<i64, String> {
    let mut hasher = XxHash64::with_seed(0);
    let mut cbor = Vec::new();
    ciborium::ser::into_writer(data, &mut cbor)
        .map_err(|e| format!("Failed to serialize data for hashing: {e}"))?;
    hasher.write(&cbor);
    Ok(hasher.finish() as i64)
}

/// Copies `value` into a bounded string.
pub fn heapless_string<const N: usize>(value: &str) -> Result<HeaplessString<N>, String> {
    HeaplessString::from_str(value)
        .map_err(|_| format!("Value '{value}' is too long (max {N} chars)"))
}

/// Canonical form of a user-entered tracking number: trimmed and upper-cased.
pub fn normalize_tracking_number(input: &str) -> String {
    input.trim().to_uppercase()
}
