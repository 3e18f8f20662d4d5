use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::EntityId;
use crate::calculations::survey;

/// Floor label assigned to a freshly added survey row ("ZEMİN KAT" =
/// ground floor).
pub const DEFAULT_FLOOR: &str = "ZEMİN KAT";

/// Pipe density assigned to a freshly added survey row, in meters of pipe
/// per m² of floor area. 6.6 m/m² corresponds to the standard 15 cm laying
/// interval.
pub fn default_pipe_density() -> Decimal {
    Decimal::new(66, 1)
}

/// One surveyed room/zone describing the floor-heating layout for a site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryRow {
    pub id: EntityId,
    pub floor: String,
    pub room_name: String,
    /// Heated floor area in m².
    pub area: Decimal,
    /// Meters of pipe per m² of floor area.
    pub pipe_density: Decimal,
    /// Derived: `round(area * pipe_density)` to a whole meter. Recomputed on
    /// every edit of `area` or `pipe_density`; not independently editable.
    pub pipe_length: Decimal,
    pub circuits: u32,
    pub thermostat_count: u32,
    /// Collector/manifold identifier, free text.
    pub collector: String,
}

impl DiscoveryRow {
    /// A blank row with the default floor label and pipe density; the pipe
    /// length derives from area = 0, i.e. 0.
    pub(crate) fn new(id: EntityId) -> Self {
        Self {
            id,
            floor: DEFAULT_FLOOR.to_string(),
            room_name: String::new(),
            area: Decimal::ZERO,
            pipe_density: default_pipe_density(),
            pipe_length: Decimal::ZERO,
            circuits: 0,
            thermostat_count: 0,
            collector: String::new(),
        }
    }

    /// Re-derives `pipe_length` from the current `area` and `pipe_density`,
    /// overwriting any prior value.
    pub(crate) fn recompute_pipe_length(&mut self) {
        self.pipe_length = survey::pipe_length(self.area, self.pipe_density);
        debug!(row = %self.id, pipe_length = %self.pipe_length, "pipe length recomputed");
    }
}
