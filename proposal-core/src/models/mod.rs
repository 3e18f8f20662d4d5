mod discovery_row;
mod entity_id;
mod material_line;
mod proposal;
mod signatory;

pub use discovery_row::{DEFAULT_FLOOR, DiscoveryRow, default_pipe_density};
pub use entity_id::EntityId;
pub use material_line::{DEFAULT_UNIT, MaterialLine};
pub use proposal::{
    DEFAULT_PAGE1_TITLE, DEFAULT_PAGE2_TITLE, ProposalDocument, STANDARD_NOTES,
};
pub use signatory::Signatory;
