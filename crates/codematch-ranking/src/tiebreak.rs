//! Deterministic tie-breaker from a candidate's stable attributes.

use codematch_core::models::CodeType;

/// Value in [0.0, 1.0] derived from the blake3 hash of `TYPE:code`.
/// Identical for identical inputs across runs and platforms.
pub fn tie_breaker(code_type: CodeType, code: &str) -> f64 {
    let key = format!("{}:{}", code_type.name(), code);
    let hash = blake3::hash(key.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(prefix) as f64 / u64::MAX as f64
}
