/// All content rows are keyed by a backend-generated UUID.
pub type RowId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Position of a row inside an ordered collection (`display_order`).
pub type Rank = i32;

/// An identifier no row can ever carry. Deleting with `id <> NIL_ROW_ID`
/// clears a whole table through a filtered delete.
pub const NIL_ROW_ID: RowId = uuid::Uuid::nil();
