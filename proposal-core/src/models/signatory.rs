use serde::{Deserialize, Serialize};

use super::EntityId;

/// One authorized approver listed at the end of the proposal. No format
/// validation is enforced on either field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signatory {
    pub id: EntityId,
    pub name: String,
    pub email: String,
}

impl Signatory {
    pub(crate) fn new(id: EntityId) -> Self {
        Self {
            id,
            name: String::new(),
            email: String::new(),
        }
    }
}
