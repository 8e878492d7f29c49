use serde::{Deserialize, Serialize};

/// A single to-do entry.
///
/// `created_date` and `created_time` are stamped once at construction and
/// never rewritten. `completed` only ever moves `false -> true`; there is
/// no reopen command. `id` is drawn from a bounded random range and is NOT
/// guaranteed unique within a collection (see `ident::RandomIds`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub text: String,
    pub completed: bool,
    pub created_date: String,
    pub created_time: String,
}
