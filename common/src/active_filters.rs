//! Filter values the visitor has selected.

use std::collections::BTreeMap;

use crate::query::{self, QueryPair};
use crate::{Facet, FacetKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// Selected tag or state ids.
    Ids(Vec<u64>),
    /// A minimum, e.g. yearly salary or home office percentage.
    Amount(u64),
    /// An inclusive `[min, max]` percentage range.
    Range(u32, u32),
}

impl FilterValue {
    /// Empty lists and zero amounts select nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Ids(ids) => ids.is_empty(),
            FilterValue::Amount(amount) => *amount == 0,
            FilterValue::Range(..) => false,
        }
    }
}

/// Selected filters keyed by facet.
///
/// Never holds an empty value: [`ActiveFilters::set`] drops the key instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveFilters {
    values: BTreeMap<Facet, FilterValue>,
}

impl ActiveFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn contains(&self, facet: Facet) -> bool {
        self.values.contains_key(&facet)
    }

    pub fn get(&self, facet: Facet) -> Option<&FilterValue> {
        self.values.get(&facet)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Facet, &FilterValue)> {
        self.values.iter().map(|(facet, value)| (*facet, value))
    }

    pub fn ids(&self, facet: Facet) -> &[u64] {
        match self.values.get(&facet) {
            Some(FilterValue::Ids(ids)) => ids,
            _ => &[],
        }
    }

    pub fn amount(&self, facet: Facet) -> Option<u64> {
        match self.values.get(&facet) {
            Some(FilterValue::Amount(amount)) => Some(*amount),
            _ => None,
        }
    }

    pub fn range(&self, facet: Facet) -> Option<(u32, u32)> {
        match self.values.get(&facet) {
            Some(FilterValue::Range(min, max)) => Some((*min, *max)),
            _ => None,
        }
    }

    /// Returns a copy with `value` merged in, or with the key removed when
    /// `value` is empty.
    #[must_use]
    pub fn set(&self, facet: Facet, value: FilterValue) -> Self {
        let mut next = self.clone();
        next.assign(facet, value);
        next
    }

    #[must_use]
    pub fn without(&self, facet: Facet) -> Self {
        let mut next = self.clone();
        next.values.remove(&facet);
        next
    }

    /// Adds `id` to the facet's selection, or removes it if already selected.
    #[must_use]
    pub fn toggle_id(&self, facet: Facet, id: u64) -> Self {
        let mut ids = self.ids(facet).to_vec();
        match ids.iter().position(|selected| *selected == id) {
            Some(index) => {
                ids.remove(index);
            }
            None => ids.push(id),
        }
        self.set(facet, FilterValue::Ids(ids))
    }

    fn assign(&mut self, facet: Facet, value: FilterValue) {
        if value.is_empty() {
            self.values.remove(&facet);
        } else {
            self.values.insert(facet, value);
        }
    }

    pub fn from_query(query: &str) -> Self {
        let pairs = query::decode(query);
        Self::from_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Builds filters from decoded query pairs. Unknown keys and values that
    /// do not parse are skipped; a range needs exactly two bounds.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut ids: BTreeMap<Facet, Vec<u64>> = BTreeMap::new();
        let mut amounts: BTreeMap<Facet, u64> = BTreeMap::new();
        let mut ranges: BTreeMap<Facet, Vec<u32>> = BTreeMap::new();

        for (key, value) in pairs {
            let key = key.as_ref();
            let key = key.strip_suffix("[]").unwrap_or(key);
            let Some(facet) = Facet::from_query_key(key) else {
                continue;
            };
            let value = value.as_ref().trim();

            match facet.kind() {
                FacetKind::Tags | FacetKind::Regions => {
                    if let Ok(id) = value.parse::<u64>() {
                        let selected = ids.entry(facet).or_default();
                        if !selected.contains(&id) {
                            selected.push(id);
                        }
                    }
                }
                FacetKind::Amount => {
                    if let Ok(amount) = value.parse::<u64>() {
                        amounts.insert(facet, amount);
                    }
                }
                FacetKind::Range => {
                    if let Ok(bound) = value.parse::<u32>() {
                        ranges.entry(facet).or_default().push(bound);
                    }
                }
            }
        }

        let mut filters = Self::new();
        for (facet, selected) in ids {
            filters.assign(facet, FilterValue::Ids(selected));
        }
        for (facet, amount) in amounts {
            filters.assign(facet, FilterValue::Amount(amount));
        }
        for (facet, bounds) in ranges {
            if let [a, b] = bounds[..] {
                filters.assign(facet, FilterValue::Range(a.min(b), a.max(b)));
            }
        }
        filters
    }

    pub fn query_pairs(&self) -> Vec<QueryPair> {
        let mut pairs = Vec::new();
        for (facet, value) in &self.values {
            let key = facet.query_key();
            match value {
                FilterValue::Ids(ids) => {
                    pairs.extend(ids.iter().map(|id| QueryPair::item(key, id)));
                }
                FilterValue::Amount(amount) => pairs.push(QueryPair::scalar(key, amount)),
                FilterValue::Range(min, max) => {
                    pairs.push(QueryPair::item(key, min));
                    pairs.push(QueryPair::item(key, max));
                }
            }
        }
        pairs
    }

    pub fn to_query(&self) -> String {
        query::encode(self.query_pairs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_stores_non_empty_values() {
        let filters = ActiveFilters::new()
            .set(Facet::Salary, FilterValue::Amount(80000))
            .set(Facet::Regions, FilterValue::Ids(vec![3]));
        assert_eq!(filters.amount(Facet::Salary), Some(80000));
        assert_eq!(filters.ids(Facet::Regions), &[3]);
        assert_eq!(filters.len(), 2);
    }

    #[test]
    fn set_prunes_every_empty_value() {
        let filters = ActiveFilters::new()
            .set(Facet::Salary, FilterValue::Amount(80000))
            .set(Facet::HomeOffice, FilterValue::Amount(40))
            .set(Facet::Technologies, FilterValue::Ids(vec![1, 2]))
            .set(Facet::Workload, FilterValue::Range(0, 100));

        let pruned = filters
            .set(Facet::Salary, FilterValue::Amount(0))
            .set(Facet::HomeOffice, FilterValue::Amount(0))
            .set(Facet::Technologies, FilterValue::Ids(vec![]));

        assert!(!pruned.contains(Facet::Salary));
        assert!(!pruned.contains(Facet::HomeOffice));
        assert!(!pruned.contains(Facet::Technologies));
        assert!(pruned.contains(Facet::Workload));
        assert!(pruned.iter().all(|(_, value)| !value.is_empty()));
    }

    #[test]
    fn empty_value_is_never_inserted() {
        let filters = ActiveFilters::new().set(Facet::Industries, FilterValue::Ids(vec![]));
        assert!(filters.is_empty());
    }

    #[test]
    fn set_leaves_the_original_untouched() {
        let original = ActiveFilters::new().set(Facet::Salary, FilterValue::Amount(1000));
        let _ = original.set(Facet::Salary, FilterValue::Amount(0));
        assert_eq!(original.amount(Facet::Salary), Some(1000));
    }

    #[test]
    fn toggle_adds_then_removes() {
        let filters = ActiveFilters::new().toggle_id(Facet::JobLevels, 4);
        assert_eq!(filters.ids(Facet::JobLevels), &[4]);
        let filters = filters.toggle_id(Facet::JobLevels, 4);
        assert!(!filters.contains(Facet::JobLevels));
    }

    #[test]
    fn parses_bracket_query() {
        let filters = ActiveFilters::from_query(
            "states[]=3&states[]=7&states[]=3&salary=80000&workload[]=80&workload[]=50&foo=1",
        );
        assert_eq!(filters.ids(Facet::Regions), &[3, 7]);
        assert_eq!(filters.amount(Facet::Salary), Some(80000));
        assert_eq!(filters.range(Facet::Workload), Some((50, 80)));
        assert_eq!(filters.len(), 3);
    }

    #[test]
    fn parsing_prunes_zero_and_garbage() {
        let filters =
            ActiveFilters::from_query("salary=0&homeOffice=abc&technologies[]=&workload[]=50");
        assert!(filters.is_empty());
    }

    #[test]
    fn query_round_trip_keeps_selection() {
        let filters = ActiveFilters::new()
            .set(Facet::Technologies, FilterValue::Ids(vec![9, 2]))
            .set(Facet::Regions, FilterValue::Ids(vec![1]))
            .set(Facet::Workload, FilterValue::Range(50, 80))
            .set(Facet::HomeOffice, FilterValue::Amount(20));

        let query = filters.to_query();
        assert_eq!(
            query,
            "homeOffice=20&states[]=1&technologies[]=9&technologies[]=2&workload[]=50&workload[]=80"
        );
        assert_eq!(ActiveFilters::from_query(&query), filters);
    }
}
