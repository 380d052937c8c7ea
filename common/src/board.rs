use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Facet;

/// Per-tenant display settings. Loaded once and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomBoard {
    pub id: Option<String>,
    /// Restricts listings to one employer.
    pub employer_name_filter: Option<String>,
    pub hide_all_filters: bool,
    pub hidden_filters: BTreeMap<Facet, bool>,
    /// Card layout; hides employer logos in rows.
    pub cards: bool,
    pub disable_compare_view: bool,
}

impl CustomBoard {
    pub fn is_hidden(&self, facet: Facet) -> bool {
        self.hidden_filters.get(&facet).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_filters_use_filter_keys() {
        let board: CustomBoard = serde_json::from_str(
            r#"{"id": "acme", "hiddenFilters": {"salary": true, "regions": false}, "cards": true}"#,
        )
        .unwrap();
        assert!(board.is_hidden(Facet::Salary));
        assert!(!board.is_hidden(Facet::Regions));
        assert!(!board.is_hidden(Facet::Workload));
        assert!(board.cards);
        assert!(!board.hide_all_filters);
    }
}
