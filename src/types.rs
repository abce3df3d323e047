/// Backend entity identifiers are plain integers on the wire, though some
/// endpoints stringify them; see the flexible id deserializers in
/// `api::models`.
pub type EntityId = i64;
