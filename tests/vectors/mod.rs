//! Test vector types for encryption configuration tests.
//!
//! Vectors are JSON files in this directory. Passwords are hex encoded so
//! that empty and non-UTF-8 passwords can be expressed.

// Some fields are only read by a subset of tests
#![allow(dead_code)]

use serde::Deserialize;

/// A test vector suite (top-level JSON structure).
#[derive(Debug, Deserialize)]
pub struct TestVectorSuite<T> {
    pub name: String,
    pub tests: Vec<T>,
}

/// Test vector for building an encryption descriptor.
#[derive(Debug, Deserialize)]
pub struct EncryptionTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// `best-available` or `builder`.
    pub construction: String,
    /// Private format label, for `builder` vectors.
    #[serde(default)]
    pub format: Option<String>,
    /// Successive `kdf_rounds` calls applied to the builder.
    #[serde(rename = "kdf-rounds", default)]
    pub kdf_rounds: Vec<u32>,
    /// Hex-encoded password bytes.
    pub password: String,
    /// Expected error message for fail tests.
    #[serde(default)]
    pub error: Option<String>,
    /// Expected error kind (`InvalidArgument` / `InvalidState`) for fail tests.
    #[serde(rename = "error-kind", default)]
    pub error_kind: Option<String>,
}

/// Test vector for an enumeration label lookup.
#[derive(Debug, Deserialize)]
pub struct LabelTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    /// `Encoding`, `PrivateFormat`, `PublicFormat` or `ParameterFormat`.
    pub kind: String,
    pub label: String,
    /// Expected variant name (as in serde output) for success tests.
    #[serde(default)]
    pub variant: Option<String>,
}

/// Decode hex string to bytes.
pub fn hex_decode(s: &str) -> Option<Vec<u8>> {
    hex::decode(s).ok()
}

/// Load a test vector suite from a JSON file.
pub fn load_vectors<T: serde::de::DeserializeOwned>(path: &str) -> TestVectorSuite<T> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read test vector file {path}: {e}"));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse test vector file {path}: {e}"))
}
