//! Backward-compatibility key construction.
//!
//! Every imported record carries a `backward_compatibility` string naming
//! its origin: `<schema>:<table>:<pk1>[:<pk2>...]`, lower-cased. The
//! tracker and the target tables both key on this value, so the format
//! must stay stable across importers.

/// Build a backward-compatibility key from a legacy schema, table, and
/// primary-key values.
pub fn backward_compatibility(schema: &str, table: &str, pk_values: &[&str]) -> String {
    let mut parts = Vec::with_capacity(2 + pk_values.len());
    parts.push(schema);
    parts.push(table);
    parts.extend_from_slice(pk_values);
    parts.join(":").to_lowercase()
}
