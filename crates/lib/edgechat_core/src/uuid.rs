// Helper for generating UUIDv7 (timestamp-sortable UUIDs)
//
// Chat message ids are generated app-side so the in-memory store and any
// durable replacement agree on the id format, and ids sort in creation order.

use uuid::Uuid;

/// Generate a new UUIDv7 (timestamp-sortable).
pub fn uuidv7() -> Uuid {
    Uuid::now_v7()
}
