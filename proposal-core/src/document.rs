//! Mutation operations on the proposal document.
//!
//! Every operation is a total, synchronous transition on the single owned
//! [`ProposalDocument`]: no operation can fail, removals of unknown ids are
//! no-ops, and the only cross-field dependency is the pipe-length
//! recomputation on the survey list. Field updates are expressed as typed
//! single-field replacements rather than stringly `(field, value)` pairs.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::totals;
use crate::models::{DiscoveryRow, EntityId, MaterialLine, ProposalDocument, Signatory};

/// A single-field replacement on a [`MaterialLine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterialLineUpdate {
    ProductCode(String),
    Description(String),
    Dimensions(String),
    RequestQty(Decimal),
    ShipQty(Decimal),
    Unit(String),
    UnitPrice(Decimal),
    /// `Some` sets the line-total override; `None` clears it, reverting the
    /// effective total to the computed `request_qty * unit_price`.
    ManualTotal(Option<Decimal>),
}

/// A single-field replacement on a [`DiscoveryRow`].
///
/// There is deliberately no `PipeLength` variant: the pipe length is derived
/// and overwritten whenever `Area` or `PipeDensity` is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryRowUpdate {
    Floor(String),
    RoomName(String),
    Area(Decimal),
    PipeDensity(Decimal),
    Circuits(u32),
    ThermostatCount(u32),
    Collector(String),
}

/// A single-field replacement on a [`Signatory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatoryUpdate {
    Name(String),
    Email(String),
}

/// Removes the entity with `id`, preserving the order of the rest. Returns
/// `false` (and leaves the list untouched) when no entity matches.
fn remove_by_id<T>(
    items: &mut Vec<T>,
    id: EntityId,
    key: impl Fn(&T) -> EntityId,
) -> bool {
    match items.iter().position(|item| key(item) == id) {
        Some(index) => {
            items.remove(index);
            true
        }
        None => {
            debug!(%id, "remove ignored: no entity with this id");
            false
        }
    }
}

impl ProposalDocument {
    // ─── Materials ───────────────────────────────────────────────────────

    /// Appends a blank material line and returns its fresh id.
    pub fn add_material_line(&mut self) -> EntityId {
        let id = self.fresh_id();
        self.materials.push(MaterialLine::new(id));
        id
    }

    /// Removes the material line with `id`; no-op if absent.
    pub fn remove_material_line(
        &mut self,
        id: EntityId,
    ) -> bool {
        remove_by_id(&mut self.materials, id, |line| line.id)
    }

    /// Replaces one field on the material line with `id`. Returns `false`
    /// when no line matches.
    pub fn update_material_line(
        &mut self,
        id: EntityId,
        update: MaterialLineUpdate,
    ) -> bool {
        let Some(line) = self.materials.iter_mut().find(|line| line.id == id) else {
            return false;
        };
        match update {
            MaterialLineUpdate::ProductCode(value) => line.product_code = value,
            MaterialLineUpdate::Description(value) => line.description = value,
            MaterialLineUpdate::Dimensions(value) => line.dimensions = value,
            MaterialLineUpdate::RequestQty(value) => line.request_qty = value,
            MaterialLineUpdate::ShipQty(value) => line.ship_qty = value,
            MaterialLineUpdate::Unit(value) => line.unit = value,
            MaterialLineUpdate::UnitPrice(value) => line.unit_price = value,
            MaterialLineUpdate::ManualTotal(value) => line.manual_total = value,
        }
        true
    }

    // ─── Discovery ───────────────────────────────────────────────────────

    /// Appends a blank survey row and returns its fresh id.
    pub fn add_discovery_row(&mut self) -> EntityId {
        let id = self.fresh_id();
        self.discovery.push(DiscoveryRow::new(id));
        id
    }

    /// Removes the survey row with `id`; no-op if absent.
    pub fn remove_discovery_row(
        &mut self,
        id: EntityId,
    ) -> bool {
        remove_by_id(&mut self.discovery, id, |row| row.id)
    }

    /// Replaces one field on the survey row with `id`. Applying `Area` or
    /// `PipeDensity` recomputes the row's pipe length from the post-update
    /// values. Returns `false` when no row matches.
    pub fn update_discovery_row(
        &mut self,
        id: EntityId,
        update: DiscoveryRowUpdate,
    ) -> bool {
        let Some(row) = self.discovery.iter_mut().find(|row| row.id == id) else {
            return false;
        };
        match update {
            DiscoveryRowUpdate::Floor(value) => row.floor = value,
            DiscoveryRowUpdate::RoomName(value) => row.room_name = value,
            DiscoveryRowUpdate::Area(value) => {
                row.area = value;
                row.recompute_pipe_length();
            }
            DiscoveryRowUpdate::PipeDensity(value) => {
                row.pipe_density = value;
                row.recompute_pipe_length();
            }
            DiscoveryRowUpdate::Circuits(value) => row.circuits = value,
            DiscoveryRowUpdate::ThermostatCount(value) => row.thermostat_count = value,
            DiscoveryRowUpdate::Collector(value) => row.collector = value,
        }
        true
    }

    // ─── Signatories ─────────────────────────────────────────────────────

    /// Appends a blank signatory and returns its fresh id.
    pub fn add_signatory(&mut self) -> EntityId {
        let id = self.fresh_id();
        self.signatories.push(Signatory::new(id));
        id
    }

    /// Removes the signatory with `id`; no-op if absent.
    pub fn remove_signatory(
        &mut self,
        id: EntityId,
    ) -> bool {
        remove_by_id(&mut self.signatories, id, |sig| sig.id)
    }

    /// Replaces one field on the signatory with `id`. Returns `false` when
    /// no signatory matches.
    pub fn update_signatory(
        &mut self,
        id: EntityId,
        update: SignatoryUpdate,
    ) -> bool {
        let Some(sig) = self.signatories.iter_mut().find(|sig| sig.id == id) else {
            return false;
        };
        match update {
            SignatoryUpdate::Name(value) => sig.name = value,
            SignatoryUpdate::Email(value) => sig.email = value,
        }
        true
    }

    // ─── Notes ───────────────────────────────────────────────────────────

    /// Appends an empty note.
    pub fn add_note(&mut self) {
        self.notes.push(String::new());
    }

    /// Removes the note at `index`; no-op when out of range.
    pub fn remove_note(
        &mut self,
        index: usize,
    ) -> bool {
        if index < self.notes.len() {
            self.notes.remove(index);
            true
        } else {
            debug!(index, "remove ignored: note index out of range");
            false
        }
    }

    /// Replaces the note at `index`; no-op when out of range.
    pub fn update_note(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> bool {
        match self.notes.get_mut(index) {
            Some(note) => {
                *note = value.into();
                true
            }
            None => false,
        }
    }

    // ─── Derived totals ──────────────────────────────────────────────────

    /// Sum of the effective totals of all material lines. Exact; not rounded
    /// until display.
    pub fn calculated_total(&self) -> Decimal {
        totals::calculated_total(&self.materials)
    }

    /// The authoritative grand total handed to export: the manual override
    /// when set and positive, otherwise [`ProposalDocument::calculated_total`].
    pub fn display_total(&self) -> Decimal {
        totals::display_total(self.manual_total, self.calculated_total())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{DEFAULT_FLOOR, DEFAULT_UNIT, default_pipe_density};

    fn empty_doc() -> ProposalDocument {
        ProposalDocument::new(NaiveDate::from_ymd_opt(2025, 11, 3).unwrap())
    }

    // =========================================================================
    // Material line tests
    // =========================================================================

    #[test]
    fn add_material_line_appends_blank_line_with_defaults() {
        let mut doc = empty_doc();

        let id = doc.add_material_line();

        assert_eq!(doc.materials.len(), 1);
        let line = &doc.materials[0];
        assert_eq!(line.id, id);
        assert_eq!(line.product_code, "");
        assert_eq!(line.request_qty, dec!(0));
        assert_eq!(line.ship_qty, dec!(0));
        assert_eq!(line.unit, DEFAULT_UNIT);
        assert_eq!(line.unit_price, dec!(0));
        assert_eq!(line.manual_total, None);
    }

    #[test]
    fn add_material_line_issues_fresh_unique_ids() {
        let mut doc = empty_doc();

        let first = doc.add_material_line();
        let second = doc.add_material_line();
        let third = doc.add_material_line();

        assert!(first != second && second != third && first != third);
    }

    #[test]
    fn ids_stay_unique_after_removal() {
        let mut doc = empty_doc();
        let first = doc.add_material_line();
        doc.remove_material_line(first);

        let second = doc.add_material_line();

        // The freed id is never reused.
        assert!(second != first);
    }

    #[test]
    fn remove_material_line_removes_exactly_the_match_preserving_order() {
        let mut doc = empty_doc();
        let first = doc.add_material_line();
        let second = doc.add_material_line();
        let third = doc.add_material_line();

        let removed = doc.remove_material_line(second);

        assert!(removed);
        assert_eq!(
            doc.materials.iter().map(|m| m.id).collect::<Vec<_>>(),
            vec![first, third]
        );
    }

    #[test]
    fn remove_material_line_with_unknown_id_is_noop() {
        let mut doc = empty_doc();
        let id = doc.add_material_line();
        doc.remove_material_line(id);

        let removed = doc.remove_material_line(id);

        assert!(!removed);
        assert!(doc.materials.is_empty());
    }

    #[test]
    fn update_material_line_replaces_named_field_only() {
        let mut doc = empty_doc();
        let id = doc.add_material_line();

        doc.update_material_line(id, MaterialLineUpdate::Description("PE-Xa Boru".into()));
        doc.update_material_line(id, MaterialLineUpdate::Unit("m".into()));

        let line = &doc.materials[0];
        assert_eq!(line.description, "PE-Xa Boru");
        assert_eq!(line.unit, "m");
        assert_eq!(line.product_code, "");
    }

    #[test]
    fn update_material_line_with_unknown_id_returns_false() {
        let mut doc = empty_doc();
        let id = doc.add_material_line();
        doc.remove_material_line(id);

        let updated = doc.update_material_line(id, MaterialLineUpdate::Unit("m".into()));

        assert!(!updated);
    }

    #[test]
    fn line_total_override_set_and_cleared_scenario() {
        let mut doc = empty_doc();
        let id = doc.add_material_line();
        doc.update_material_line(id, MaterialLineUpdate::RequestQty(dec!(238)));
        doc.update_material_line(id, MaterialLineUpdate::UnitPrice(dec!(1.20)));

        assert_eq!(doc.calculated_total(), dec!(285.60));

        doc.update_material_line(id, MaterialLineUpdate::ManualTotal(Some(dec!(300))));
        assert_eq!(doc.calculated_total(), dec!(300));

        // Clearing reverts to the computed product, not zero.
        doc.update_material_line(id, MaterialLineUpdate::ManualTotal(None));
        assert_eq!(doc.calculated_total(), dec!(285.60));
    }

    // =========================================================================
    // Discovery row tests
    // =========================================================================

    #[test]
    fn add_discovery_row_uses_documented_defaults() {
        let mut doc = empty_doc();

        doc.add_discovery_row();

        let row = &doc.discovery[0];
        assert_eq!(row.floor, DEFAULT_FLOOR);
        assert_eq!(row.pipe_density, default_pipe_density());
        assert!(row.pipe_density > dec!(0));
        assert_eq!(row.area, dec!(0));
        assert_eq!(row.pipe_length, dec!(0));
    }

    #[test]
    fn updating_area_recomputes_pipe_length() {
        let mut doc = empty_doc();
        let id = doc.add_discovery_row();
        doc.update_discovery_row(id, DiscoveryRowUpdate::PipeDensity(dec!(10)));

        doc.update_discovery_row(id, DiscoveryRowUpdate::Area(dec!(23.75)));

        assert_eq!(doc.discovery[0].pipe_length, dec!(238));
    }

    #[test]
    fn updating_density_recomputes_pipe_length() {
        let mut doc = empty_doc();
        let id = doc.add_discovery_row();
        doc.update_discovery_row(id, DiscoveryRowUpdate::Area(dec!(24)));

        doc.update_discovery_row(id, DiscoveryRowUpdate::PipeDensity(dec!(6.6)));

        // 24 * 6.6 = 158.4 -> 158
        assert_eq!(doc.discovery[0].pipe_length, dec!(158));
    }

    #[test]
    fn non_derivation_updates_leave_pipe_length_unchanged() {
        let mut doc = empty_doc();
        let id = doc.add_discovery_row();
        doc.update_discovery_row(id, DiscoveryRowUpdate::Area(dec!(23.75)));
        doc.update_discovery_row(id, DiscoveryRowUpdate::PipeDensity(dec!(10)));
        let before = doc.discovery[0].pipe_length;

        doc.update_discovery_row(id, DiscoveryRowUpdate::RoomName("Kafeterya".into()));
        doc.update_discovery_row(id, DiscoveryRowUpdate::Circuits(3));
        doc.update_discovery_row(id, DiscoveryRowUpdate::ThermostatCount(1));
        doc.update_discovery_row(id, DiscoveryRowUpdate::Collector("4".into()));
        doc.update_discovery_row(id, DiscoveryRowUpdate::Floor("1. KAT".into()));

        assert_eq!(doc.discovery[0].pipe_length, before);
        assert_eq!(doc.discovery[0].pipe_length, dec!(238));
    }

    #[test]
    fn remove_discovery_row_by_id() {
        let mut doc = empty_doc();
        let first = doc.add_discovery_row();
        let second = doc.add_discovery_row();

        assert!(doc.remove_discovery_row(first));
        assert!(!doc.remove_discovery_row(first));
        assert_eq!(doc.discovery.len(), 1);
        assert_eq!(doc.discovery[0].id, second);
    }

    // =========================================================================
    // Signatory tests
    // =========================================================================

    #[test]
    fn signatory_add_update_remove_roundtrip() {
        let mut doc = empty_doc();
        let id = doc.add_signatory();

        doc.update_signatory(id, SignatoryUpdate::Name("Olcay GÜLSOY".into()));
        doc.update_signatory(id, SignatoryUpdate::Email("olcay@fankur.com".into()));

        assert_eq!(doc.signatories[0].name, "Olcay GÜLSOY");
        assert_eq!(doc.signatories[0].email, "olcay@fankur.com");

        assert!(doc.remove_signatory(id));
        assert!(doc.signatories.is_empty());
        assert!(!doc.remove_signatory(id));
    }

    // =========================================================================
    // Notes tests
    // =========================================================================

    #[test]
    fn add_note_appends_empty_string() {
        let mut doc = empty_doc();

        doc.add_note();

        assert_eq!(doc.notes, vec![String::new()]);
    }

    #[test]
    fn notes_are_addressed_by_position() {
        let mut doc = empty_doc();
        doc.add_note();
        doc.add_note();
        doc.add_note();
        doc.update_note(0, "first");
        doc.update_note(1, "second");
        doc.update_note(2, "third");

        assert!(doc.remove_note(1));

        assert_eq!(doc.notes, vec!["first".to_string(), "third".to_string()]);
    }

    #[test]
    fn note_operations_out_of_range_are_noops() {
        let mut doc = empty_doc();
        doc.add_note();

        assert!(!doc.remove_note(5));
        assert!(!doc.update_note(5, "nope"));
        assert_eq!(doc.notes.len(), 1);
    }

    // =========================================================================
    // Grand total tests
    // =========================================================================

    fn doc_with_three_lines() -> ProposalDocument {
        let mut doc = empty_doc();
        for (qty, price) in [(dec!(238), dec!(1.20)), (dec!(24), dec!(5.50)), (dec!(26), dec!(0.85))]
        {
            let id = doc.add_material_line();
            doc.update_material_line(id, MaterialLineUpdate::RequestQty(qty));
            doc.update_material_line(id, MaterialLineUpdate::UnitPrice(price));
        }
        doc
    }

    #[test]
    fn display_total_without_override_is_line_sum() {
        let doc = doc_with_three_lines();

        assert_eq!(doc.display_total(), dec!(439.70));
    }

    #[test]
    fn display_total_override_scenario() {
        let mut doc = doc_with_three_lines();

        doc.manual_total = Some(dec!(500));
        assert_eq!(doc.display_total(), dec!(500));

        // Zero and unset are equivalent "no override" signals.
        doc.manual_total = Some(dec!(0));
        assert_eq!(doc.display_total(), dec!(439.70));

        doc.manual_total = None;
        assert_eq!(doc.display_total(), dec!(439.70));
    }

    // =========================================================================
    // Id scoping tests
    // =========================================================================

    #[test]
    fn ids_are_unique_across_all_lists() {
        let mut doc = empty_doc();

        let a = doc.add_material_line();
        let b = doc.add_discovery_row();
        let c = doc.add_signatory();

        assert!(a != b && b != c && a != c);
    }

    #[test]
    fn removal_in_one_list_ignores_other_lists() {
        let mut doc = empty_doc();
        let material = doc.add_material_line();

        // A material id presented to the discovery list matches nothing.
        assert!(!doc.remove_discovery_row(material));
        assert_eq!(doc.materials.len(), 1);
    }
}
