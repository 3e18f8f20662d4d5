use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identity token for list entities (material lines, discovery rows,
/// signatories).
///
/// Ids are issued by the owning [`ProposalDocument`]'s monotonic counter,
/// are stable for the lifetime of an editing session, and are never reused
/// or recomputed.
///
/// [`ProposalDocument`]: super::ProposalDocument
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntityId(u64);

impl EntityId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for EntityId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
