//! State of the filter panel.
//!
//! Pages are rendered on the server, so the panel state lives in the URL:
//! the active filters in the query string and the opened accordion in the
//! `open` parameter. Each method mirrors one interaction and every link the
//! panel renders is derived from here.

use crate::query::{self, QueryPair};
use crate::{ActiveFilters, CustomBoard, Facet, FilterValue, Filters, Locale};

/// Query parameter naming the opened accordion.
pub const OPEN_PARAM: &str = "open";

/// Full range of the workload slider.
pub const WORKLOAD_BOUNDS: (u32, u32) = (0, 100);

/// Which accordion the visitor opened, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenFilter {
    #[default]
    None,
    /// Every accordion, as when the "Filters" button is used.
    All,
    Named(Facet),
}

impl OpenFilter {
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            None | Some("") | Some("none") => OpenFilter::None,
            Some("all") => OpenFilter::All,
            Some(name) => name.parse().map(OpenFilter::Named).unwrap_or_default(),
        }
    }

    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            OpenFilter::None => None,
            OpenFilter::All => Some("all"),
            OpenFilter::Named(facet) => Some(facet.filters_key()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterPanel {
    locale: Locale,
    open: OpenFilter,
    active: ActiveFilters,
    /// Filters the page was loaded with; closing the modal restores them.
    defaults: ActiveFilters,
}

impl FilterPanel {
    pub fn new(locale: Locale, defaults: ActiveFilters) -> Self {
        Self {
            locale,
            open: OpenFilter::None,
            active: defaults.clone(),
            defaults,
        }
    }

    /// Selection submitted by the filter form. A workload slider left at its
    /// full range was never moved and selects nothing.
    pub fn submitted(locale: Locale, query: &str) -> Self {
        let mut active = ActiveFilters::from_query(query);
        if active.range(Facet::Workload) == Some(WORKLOAD_BOUNDS) {
            active = active.without(Facet::Workload);
        }
        Self::new(locale, active)
    }

    pub fn with_open(mut self, open: OpenFilter) -> Self {
        self.open = open;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn open(&self) -> OpenFilter {
        self.open
    }

    pub fn active(&self) -> &ActiveFilters {
        &self.active
    }

    pub fn defaults(&self) -> &ActiveFilters {
        &self.defaults
    }

    pub fn is_modal_open(&self) -> bool {
        self.open != OpenFilter::None
    }

    /// Open when explicitly opened, when all are open, or when it holds a value.
    pub fn is_accordion_open(&self, facet: Facet) -> bool {
        match self.open {
            OpenFilter::All => true,
            OpenFilter::Named(name) if name == facet => true,
            _ => self.active.contains(facet),
        }
    }

    pub fn open_filter(&mut self, open: OpenFilter) {
        self.open = open;
    }

    pub fn set_active_filter(&mut self, facet: Facet, value: FilterValue) {
        self.active = self.active.set(facet, value);
    }

    /// Offered by the backend and not hidden by the board.
    pub fn is_filter_visible(facet: Facet, filters: &Filters, board: &CustomBoard) -> bool {
        filters.has(facet) && !board.is_hidden(facet)
    }

    /// Discards unapplied changes.
    pub fn close_modal(&mut self) {
        self.active = self.defaults.clone();
        self.open = OpenFilter::None;
    }

    /// The clear control only shows while something is selected.
    pub fn can_clear(&self) -> bool {
        !self.active.is_empty()
    }

    /// Empties the selection and returns where to navigate: the locale root.
    pub fn clear(&mut self) -> String {
        self.active = ActiveFilters::new();
        self.open = OpenFilter::None;
        self.root_href()
    }

    /// Where the clear control navigates to.
    pub fn clear_href(&self) -> String {
        self.clone().clear()
    }

    /// Link to this panel state: its selection and opened accordion.
    pub fn href(&self) -> String {
        self.filtered_href(&self.active, self.open)
    }

    pub fn root_href(&self) -> String {
        format!("/{}", self.locale)
    }

    /// Where applying the current selection navigates to.
    pub fn apply_href(&self) -> String {
        self.filtered_href(&self.active, OpenFilter::None)
    }

    /// Link to the filtered listing for `active`, keeping `open` when set.
    pub fn filtered_href(&self, active: &ActiveFilters, open: OpenFilter) -> String {
        if active.is_empty() && open == OpenFilter::None {
            return self.root_href();
        }
        let mut pairs = active.query_pairs();
        if let Some(open) = open.as_param() {
            pairs.push(QueryPair::scalar(OPEN_PARAM, open));
        }
        format!("/{}/filtered?{}", self.locale, query::encode(pairs))
    }

    /// Link that opens the panel on `open` without touching the selection.
    pub fn open_href(&self, open: OpenFilter) -> String {
        self.filtered_href(&self.defaults, open)
    }

    /// Link that closes the panel; the page reloads with its defaults.
    pub fn close_href(&self) -> String {
        let mut closed = self.clone();
        closed.close_modal();
        closed.href()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel_with(active: ActiveFilters) -> FilterPanel {
        FilterPanel::new(Locale::De, active)
    }

    #[test]
    fn accordion_closed_by_default() {
        let panel = panel_with(ActiveFilters::new());
        assert!(!panel.is_modal_open());
        assert!(Facet::ALL.iter().all(|facet| !panel.is_accordion_open(*facet)));
    }

    #[test]
    fn named_accordion_opens_only_itself() {
        let panel = panel_with(ActiveFilters::new()).with_open(OpenFilter::Named(Facet::Salary));
        assert!(panel.is_modal_open());
        assert!(panel.is_accordion_open(Facet::Salary));
        assert!(!panel.is_accordion_open(Facet::Workload));
    }

    #[test]
    fn all_flag_opens_every_accordion() {
        let panel = panel_with(ActiveFilters::new()).with_open(OpenFilter::All);
        assert!(Facet::ALL.iter().all(|facet| panel.is_accordion_open(*facet)));
    }

    #[test]
    fn accordion_with_value_stays_open() {
        let active = ActiveFilters::new().set(Facet::Regions, FilterValue::Ids(vec![1]));
        let panel = panel_with(active).with_open(OpenFilter::Named(Facet::Salary));
        assert!(panel.is_accordion_open(Facet::Regions));
        assert!(!panel.is_accordion_open(Facet::Industries));
    }

    #[test]
    fn set_active_filter_prunes_empty() {
        let mut panel = panel_with(ActiveFilters::new());
        panel.set_active_filter(Facet::Salary, FilterValue::Amount(60000));
        assert!(panel.active().contains(Facet::Salary));
        panel.set_active_filter(Facet::Salary, FilterValue::Amount(0));
        assert!(panel.active().is_empty());
    }

    #[test]
    fn close_modal_restores_defaults() {
        let defaults = ActiveFilters::new().set(Facet::Technologies, FilterValue::Ids(vec![3]));
        let mut panel = panel_with(defaults.clone()).with_open(OpenFilter::All);
        panel.set_active_filter(Facet::Technologies, FilterValue::Ids(vec![]));
        panel.set_active_filter(Facet::HomeOffice, FilterValue::Amount(20));

        panel.close_modal();
        assert_eq!(panel.active(), &defaults);
        assert_eq!(panel.open(), OpenFilter::None);
    }

    #[test]
    fn clear_resets_and_navigates_to_locale_root() {
        let active = ActiveFilters::new().set(Facet::Salary, FilterValue::Amount(90000));
        let mut panel = FilterPanel::new(Locale::Fr, active);
        assert!(panel.can_clear());

        let href = panel.clear();
        assert_eq!(href, "/fr");
        assert!(panel.active().is_empty());
        assert!(!panel.can_clear());
    }

    #[test]
    fn apply_links_to_filtered_listing() {
        let mut panel = panel_with(ActiveFilters::new());
        assert_eq!(panel.apply_href(), "/de");

        panel.set_active_filter(Facet::Workload, FilterValue::Range(40, 60));
        panel.set_active_filter(Facet::Regions, FilterValue::Ids(vec![2]));
        assert_eq!(
            panel.apply_href(),
            "/de/filtered?states[]=2&workload[]=40&workload[]=60"
        );
    }

    #[test]
    fn open_href_keeps_defaults() {
        let defaults = ActiveFilters::new().set(Facet::Salary, FilterValue::Amount(50000));
        let panel = panel_with(defaults);
        assert_eq!(
            panel.open_href(OpenFilter::Named(Facet::HomeOffice)),
            "/de/filtered?open=homeOffice&salary=50000"
        );
        assert_eq!(panel.close_href(), "/de/filtered?salary=50000");
    }

    #[test]
    fn clear_href_leaves_panel_untouched() {
        let active = ActiveFilters::new().set(Facet::Salary, FilterValue::Amount(90000));
        let panel = FilterPanel::new(Locale::En, active).with_open(OpenFilter::All);
        assert_eq!(panel.clear_href(), "/en");
        assert!(panel.can_clear());
        assert!(panel.is_modal_open());
    }

    #[test]
    fn href_carries_selection_and_open_accordion() {
        let mut panel = panel_with(ActiveFilters::new());
        assert_eq!(panel.href(), "/de");

        panel.set_active_filter(Facet::Technologies, FilterValue::Ids(vec![7]));
        panel.open_filter(OpenFilter::Named(Facet::Technologies));
        assert_eq!(panel.href(), "/de/filtered?open=technologies&technologies[]=7");

        let edited = panel.clone();
        panel.close_modal();
        assert_eq!(panel.href(), "/de");
        assert_eq!(edited.close_href(), "/de");
    }

    #[test]
    fn visibility_respects_backend_and_board() {
        let filters = Filters {
            salary: Some(Default::default()),
            workload: Some([0, 100]),
            ..Default::default()
        };
        let mut board = CustomBoard::default();
        board.hidden_filters.insert(Facet::Workload, true);

        assert!(FilterPanel::is_filter_visible(Facet::Salary, &filters, &board));
        assert!(!FilterPanel::is_filter_visible(Facet::Workload, &filters, &board));
        assert!(!FilterPanel::is_filter_visible(Facet::Industries, &filters, &board));
    }

    #[test]
    fn untouched_workload_slider_is_dropped() {
        let panel = FilterPanel::submitted(Locale::En, "workload[]=0&workload[]=100&salary=0");
        assert!(panel.active().is_empty());
        assert_eq!(panel.apply_href(), "/en");

        let panel = FilterPanel::submitted(Locale::En, "workload[]=0&workload[]=60");
        assert_eq!(panel.active().range(Facet::Workload), Some((0, 60)));
    }

    #[test]
    fn open_param_round_trip() {
        assert_eq!(OpenFilter::from_param(Some("all")), OpenFilter::All);
        assert_eq!(
            OpenFilter::from_param(Some("states")),
            OpenFilter::Named(Facet::Regions)
        );
        assert_eq!(OpenFilter::from_param(Some("bogus")), OpenFilter::None);
        assert_eq!(OpenFilter::Named(Facet::Regions).as_param(), Some("regions"));
    }
}
