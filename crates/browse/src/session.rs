//! The browse session: state ownership and the event pipeline.

use serde::{Deserialize, Serialize};

use armory_catalog::{Catalog, Facets};
use armory_core::ItemSlug;

use crate::criteria::FilterCriteria;
use crate::filter::filter_items;
use crate::selection::SelectionSet;
use crate::sort::{sort_items, SortKey, SortSpec};
use crate::view::{BrowseView, CompareRow, CompareView, NoteCard, RowView};

/// Price-range control step.
const PRICE_STEP: u64 = 50;

/// One discrete control interaction, covering every control on the surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlEvent {
    /// Text input; fired on every keystroke with the full current text.
    QueryChanged(String),
    /// Facet chip for one caliber value.
    CaliberToggled(String),
    /// Facet chip for one type value.
    TypeToggled(String),
    OpticsOnlyChanged(bool),
    CompedOnlyChanged(bool),
    /// Range control. The handler is the control-input boundary: the value
    /// is clamped to `[0, max_observed_price]` and snapped down to the step.
    MaxPriceChanged(u64),
    /// Column header click: flips direction on the active key, otherwise
    /// activates the key ascending.
    ColumnClicked(SortKey),
    /// Per-row Select/Selected button.
    CompareToggled(ItemSlug),
    /// The Clear button under the comparison drawer.
    CompareCleared,
}

/// One UI session: owns the catalog, its facets, and the three mutable
/// state objects. All mutation happens synchronously in [`Self::apply`];
/// [`Self::view`] rebuilds the derived display state through the explicit
/// `filter → sort → view` pipeline.
#[derive(Debug, Clone)]
pub struct BrowseSession {
    catalog: Catalog,
    facets: Facets,
    criteria: FilterCriteria,
    sort: SortSpec,
    selection: SelectionSet,
}

impl BrowseSession {
    pub fn new(catalog: Catalog) -> Self {
        let facets = Facets::derive(&catalog);
        Self {
            catalog,
            facets,
            criteria: FilterCriteria::default(),
            sort: SortSpec::default(),
            selection: SelectionSet::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort_spec(&self) -> &SortSpec {
        &self.sort
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Apply one control event to the session state.
    ///
    /// Events are total: every event maps to a valid next state, and
    /// out-of-range control values are normalized here rather than rejected.
    pub fn apply(&mut self, event: ControlEvent) {
        tracing::debug!(?event, "control event");
        match event {
            ControlEvent::QueryChanged(query) => self.criteria.query = query,
            ControlEvent::CaliberToggled(caliber) => self.criteria.toggle_caliber(&caliber),
            ControlEvent::TypeToggled(kind) => self.criteria.toggle_type(&kind),
            ControlEvent::OpticsOnlyChanged(on) => self.criteria.optics_only = on,
            ControlEvent::CompedOnlyChanged(on) => self.criteria.comped_only = on,
            ControlEvent::MaxPriceChanged(value) => {
                self.criteria.max_price = self.snap_price(value);
            }
            ControlEvent::ColumnClicked(key) => self.sort.click(key),
            ControlEvent::CompareToggled(id) => self.selection.toggle(id),
            ControlEvent::CompareCleared => self.selection.clear(),
        }
    }

    /// Rebuild the derived display state: `filter → sort → view`.
    pub fn view(&self) -> BrowseView {
        let filtered = filter_items(self.catalog.items(), &self.criteria);
        let sorted = sort_items(filtered, &self.sort);

        let rows = sorted
            .iter()
            .map(|item| RowView::from_item(item, self.selection.contains(&item.id)))
            .collect();
        let notes = sorted.iter().map(|item| NoteCard::from_item(item)).collect();

        let compare = if self.selection.is_empty() {
            None
        } else {
            let rows = self
                .selection
                .materialize(&self.catalog)
                .into_iter()
                .map(CompareRow::from_item)
                .collect();
            Some(CompareView::new(rows))
        };

        BrowseView {
            rows,
            notes,
            compare,
        }
    }

    // Control-input boundary for the range control: clamp to the facet
    // bound, snap down to the step.
    fn snap_price(&self, value: u64) -> u64 {
        let clamped = value.min(self.facets.max_observed_price());
        clamped - clamped % PRICE_STEP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> BrowseSession {
        BrowseSession::new(Catalog::builtin().unwrap())
    }

    fn row_ids(view: &BrowseView) -> Vec<&str> {
        view.rows.iter().map(|row| row.id.as_str()).collect()
    }

    #[test]
    fn fresh_session_shows_all_items_by_ascending_msrp() {
        let view = session().view();
        assert_eq!(
            row_ids(&view),
            [
                "glock-34-gen5-mos",
                "sig-p320-xfive",
                "cz-shadow2",
                "staccato-p",
                "bul-tactical-comp",
                "staccato-xc",
            ]
        );
        assert!(view.compare.is_none());
        assert_eq!(view.notes.len(), 6);
    }

    #[test]
    fn query_event_narrows_rows_and_notes_together() {
        let mut session = session();
        session.apply(ControlEvent::QueryChanged("GLOCK".to_string()));
        let view = session.view();
        assert_eq!(row_ids(&view), ["glock-34-gen5-mos"]);
        assert_eq!(view.notes.len(), 1);
        assert_eq!(view.notes[0].heading, "Glock 34 Gen5 MOS");
    }

    #[test]
    fn max_price_event_clamps_to_the_facet_bound() {
        let mut session = session();
        session.apply(ControlEvent::MaxPriceChanged(1_000_000));
        // Built-in max is 4299, snapped down to the 50 step.
        assert_eq!(session.criteria().max_price, 4250);
    }

    #[test]
    fn max_price_event_snaps_down_to_the_step() {
        let mut session = session();
        session.apply(ControlEvent::MaxPriceChanged(1037));
        assert_eq!(session.criteria().max_price, 1000);
        let view = session.view();
        assert_eq!(row_ids(&view), ["glock-34-gen5-mos", "sig-p320-xfive"]);
    }

    #[test]
    fn column_click_flips_direction_on_second_click() {
        let mut session = session();
        session.apply(ControlEvent::ColumnClicked(SortKey::Msrp));
        let view = session.view();
        assert_eq!(view.rows[0].id.as_str(), "staccato-xc");

        session.apply(ControlEvent::ColumnClicked(SortKey::Msrp));
        let view = session.view();
        assert_eq!(view.rows[0].id.as_str(), "glock-34-gen5-mos");
    }

    #[test]
    fn compare_toggle_marks_rows_and_opens_the_drawer() {
        let mut session = session();
        session.apply(ControlEvent::CompareToggled(ItemSlug::from("cz-shadow2")));
        let view = session.view();

        let cz = view
            .rows
            .iter()
            .find(|row| row.id.as_str() == "cz-shadow2")
            .unwrap();
        assert!(cz.selected);

        let compare = view.compare.unwrap();
        assert_eq!(compare.count, 1);
        assert_eq!(compare.rows[0].model, "CZ Shadow 2 Optics-Ready");
    }

    #[test]
    fn compare_drawer_rows_come_back_in_catalog_order() {
        let mut session = session();
        session.apply(ControlEvent::CompareToggled(ItemSlug::from(
            "sig-p320-xfive",
        )));
        session.apply(ControlEvent::CompareToggled(ItemSlug::from(
            "bul-tactical-comp",
        )));
        let compare = session.view().compare.unwrap();
        assert_eq!(compare.rows[0].model, "BUL Armory SAS II Tactical Comp");
        assert_eq!(compare.rows[1].model, "SIG Sauer P320 X-Five Legion");
    }

    #[test]
    fn clear_event_closes_the_drawer() {
        let mut session = session();
        session.apply(ControlEvent::CompareToggled(ItemSlug::from("cz-shadow2")));
        session.apply(ControlEvent::CompareCleared);
        assert!(session.view().compare.is_none());
    }

    #[test]
    fn filters_do_not_touch_the_selection() {
        let mut session = session();
        session.apply(ControlEvent::CompareToggled(ItemSlug::from("staccato-xc")));
        session.apply(ControlEvent::QueryChanged("glock".to_string()));
        // The selected item is filtered out of the table but stays selected.
        let view = session.view();
        assert_eq!(view.rows.len(), 1);
        let compare = view.compare.unwrap();
        assert_eq!(compare.count, 1);
        assert_eq!(compare.rows[0].model, "Staccato XC");
    }
}
