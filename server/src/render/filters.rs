//! Filters section and filter modal.

use std::fmt::Write;

use common::{
    ActiveFilters, CustomBoard, Facet, FacetKind, FilterPanel, FilterValue, Filters, OpenFilter,
    WORKLOAD_BOUNDS,
};

use super::escape;
use crate::i18n::Dictionary;

const SALARY_STEP: u64 = 1000;
const PERCENT_STEP: u32 = 10;
const SALARY_CURRENCY: &str = "CHF";

pub struct FiltersView<'a> {
    pub panel: &'a FilterPanel,
    pub filters: &'a Filters,
    pub board: &'a CustomBoard,
    pub dict: Dictionary,
}

impl FiltersView<'_> {
    fn visible(&self) -> impl Iterator<Item = Facet> + '_ {
        Facet::ALL
            .into_iter()
            .filter(|facet| FilterPanel::is_filter_visible(*facet, self.filters, self.board))
    }

    /// Short description of a selected value for the chips row.
    fn describe(&self, facet: Facet, value: &FilterValue) -> String {
        let dict = self.dict;
        match value {
            FilterValue::Ids(ids) => ids
                .iter()
                .map(|id| {
                    self.filters
                        .label(facet, *id)
                        .map(str::to_string)
                        .unwrap_or_else(|| id.to_string())
                })
                .collect::<Vec<_>>()
                .join(", "),
            FilterValue::Amount(amount) if facet == Facet::Salary => {
                format!("{} {amount} {SALARY_CURRENCY}", dict.t("Min. salary"))
            }
            FilterValue::Amount(amount) => format!("{} {amount}%", dict.t("Min. Home Office")),
            FilterValue::Range(min, max) => format!("{min} - {max}{}", dict.t("% of full time")),
        }
    }
}

pub fn filters_section(view: &FiltersView<'_>) -> String {
    let panel = view.panel;
    let dict = view.dict;
    let mut html = String::from(r#"<section class="filters">"#);

    let _ = write!(
        html,
        r#"<a class="filters-button" href="{}">{}</a>"#,
        escape(&panel.open_href(OpenFilter::All)),
        escape(dict.t("Filters"))
    );
    for facet in view.visible() {
        let class = if panel.defaults().contains(facet) {
            "facet-button active"
        } else {
            "facet-button"
        };
        let _ = write!(
            html,
            r#"<a class="{class}" data-facet="{facet}" href="{}">{}</a>"#,
            escape(&panel.open_href(OpenFilter::Named(facet))),
            escape(dict.facet_title(facet))
        );
    }

    if !panel.defaults().is_empty() {
        html.push_str(r#"<ul class="active-filters">"#);
        for (facet, value) in panel.defaults().iter() {
            match value {
                FilterValue::Ids(ids) => {
                    for id in ids {
                        let remaining = panel.defaults().toggle_id(facet, *id);
                        let label = FilterValue::Ids(vec![*id]);
                        html.push_str(&chip(view, facet, &label, &remaining));
                    }
                }
                _ => html.push_str(&chip(view, facet, value, &panel.defaults().without(facet))),
            }
        }
        html.push_str("</ul>");
    }

    if panel.can_clear() {
        html.push_str(&clear_link(panel, dict));
    }
    html.push_str("</section>");

    if panel.is_modal_open() {
        html.push_str(&filters_modal(view));
    }
    html
}

/// One selected value with a link to the listing without it.
fn chip(
    view: &FiltersView<'_>,
    facet: Facet,
    value: &FilterValue,
    remaining: &ActiveFilters,
) -> String {
    let dict = view.dict;
    format!(
        r#"<li class="chip" data-facet="{facet}">{}: {} <a class="remove" href="{}" aria-label="{}">×</a></li>"#,
        escape(dict.facet_title(facet)),
        escape(&view.describe(facet, value)),
        escape(&view.panel.filtered_href(remaining, OpenFilter::None)),
        escape(dict.t("Remove")),
    )
}

fn clear_link(panel: &FilterPanel, dict: Dictionary) -> String {
    format!(
        r#"<a class="clear" href="{}">{}</a>"#,
        escape(&panel.clear_href()),
        escape(dict.t("Clear"))
    )
}

pub fn filters_modal(view: &FiltersView<'_>) -> String {
    let panel = view.panel;
    let dict = view.dict;
    let mut html = String::new();

    let _ = write!(
        html,
        r#"<div class="modal" role="dialog" aria-label="{title}"><header><h2>{title}</h2><a class="close" href="{close}">{close_label}</a></header>"#,
        title = escape(dict.t("Filters")),
        close = escape(&panel.close_href()),
        close_label = escape(dict.t("Close")),
    );
    let _ = write!(
        html,
        r#"<form class="filters-form" method="get" action="/{}/apply">"#,
        panel.locale()
    );

    for facet in view.visible() {
        html.push_str(&accordion(view, facet));
    }

    html.push_str(r#"<div class="modal-actions">"#);
    if panel.can_clear() {
        html.push_str(&clear_link(panel, dict));
    }
    let _ = write!(
        html,
        r#"<button type="submit" class="apply" aria-label="{}">{}</button>"#,
        escape(dict.t("Apply filters")),
        escape(dict.t("Apply"))
    );
    html.push_str("</div></form></div>");
    html
}

fn accordion(view: &FiltersView<'_>, facet: Facet) -> String {
    let open = if view.panel.is_accordion_open(facet) { " open" } else { "" };
    let body = match facet.kind() {
        FacetKind::Tags => tags_body(view, facet),
        FacetKind::Regions => regions_body(view),
        FacetKind::Amount if facet == Facet::Salary => salary_body(view),
        FacetKind::Amount => home_office_body(view),
        FacetKind::Range => workload_body(view),
    };
    format!(
        r#"<details class="accordion" data-facet="{facet}"{open}><summary>{}</summary>{body}</details>"#,
        escape(view.dict.facet_title(facet))
    )
}

fn checkbox(name: &str, id: u64, label: &str, checked: bool) -> String {
    format!(
        r#"<label><input type="checkbox" name="{}[]" value="{id}"{}> {}</label>"#,
        name,
        if checked { " checked" } else { "" },
        escape(label)
    )
}

fn tags_body(view: &FiltersView<'_>, facet: Facet) -> String {
    let selected = view.panel.active().ids(facet);
    let mut html = String::from(r#"<div class="tags">"#);
    for tag in view.filters.tags(facet) {
        html.push_str(&checkbox(
            facet.query_key(),
            tag.id,
            &tag.name,
            selected.contains(&tag.id),
        ));
    }
    html.push_str("</div>");
    html
}

fn regions_body(view: &FiltersView<'_>) -> String {
    let panel = view.panel;
    let selected = panel.active().ids(Facet::Regions);
    let all = view.filters.all_state_ids();

    let mut html = String::from(r#"<div class="regions">"#);
    if !all.is_empty() {
        let mut whole = panel.clone();
        whole.set_active_filter(Facet::Regions, FilterValue::Ids(all.clone()));
        whole.open_filter(OpenFilter::Named(Facet::Regions));
        let class = if all.iter().all(|id| selected.contains(id)) {
            "whole-country selected"
        } else {
            "whole-country"
        };
        let _ = write!(
            html,
            r#"<a class="{class}" href="{}">{}</a>"#,
            escape(&whole.href()),
            escape(view.dict.t("Whole Switzerland"))
        );
    }
    for region in view.filters.regions() {
        let _ = write!(
            html,
            r#"<fieldset class="region"><legend>{}</legend>"#,
            escape(&region.name)
        );
        for state in &region.states {
            html.push_str(&checkbox(
                Facet::Regions.query_key(),
                state.id,
                &state.name,
                selected.contains(&state.id),
            ));
        }
        html.push_str("</fieldset>");
    }
    html.push_str("</div>");
    html
}

fn salary_body(view: &FiltersView<'_>) -> String {
    let dict = view.dict;
    let (min, max) = view.filters.salary_bounds();
    let value = view.panel.active().amount(Facet::Salary).unwrap_or(0);

    let mut html = format!(
        r#"<label class="range">{} ({SALARY_CURRENCY}) <input type="number" name="salary" min="{min}" max="{max}" step="{SALARY_STEP}" value="{value}"></label>"#,
        escape(dict.t("Min. salary"))
    );
    html.push_str(r#"<ul class="reassurance">"#);
    for line in [
        "We never share this with companies",
        "We only use this to filter out roles and save you time",
        "If you're unsure, we recommend choosing a lower amount so you don't miss out on roles that could be great",
    ] {
        let _ = write!(html, "<li>{}</li>", escape(dict.t(line)));
    }
    html.push_str("</ul>");
    html
}

fn home_office_body(view: &FiltersView<'_>) -> String {
    let value = view.panel.active().amount(Facet::HomeOffice).unwrap_or(0);
    format!(
        r#"<label class="range">{} ({}) <input type="number" name="homeOffice" min="0" max="100" step="{PERCENT_STEP}" value="{value}"></label>"#,
        escape(view.dict.t("Min. Home Office")),
        escape(view.dict.t("% of full time"))
    )
}

fn workload_body(view: &FiltersView<'_>) -> String {
    let (lower, upper) = WORKLOAD_BOUNDS;
    let (min, max) = view
        .panel
        .active()
        .range(Facet::Workload)
        .unwrap_or(WORKLOAD_BOUNDS);
    format!(
        r#"<fieldset class="range"><legend>{} ({})</legend><input type="number" name="workload[]" min="{lower}" max="{upper}" step="{PERCENT_STEP}" value="{min}"><input type="number" name="workload[]" min="{lower}" max="{upper}" step="{PERCENT_STEP}" value="{max}"></fieldset>"#,
        escape(view.dict.t("Workload range")),
        escape(view.dict.t("% of full time"))
    )
}
