/// Backend entity identifiers are opaque strings (the API never promises
/// a numeric or UUID shape).
pub type EntityId = String;
