/// Identifiers minted by the target system are UUID strings; reference
/// data (languages, countries) uses ISO codes as primary keys.
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
