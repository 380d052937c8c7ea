//! Facets the backend declares as filterable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Upper bound for the salary slider when the backend sends no range.
pub const DEFAULT_MAX_SALARY: u64 = 900_000;

/// A filterable dimension, in the order the filter panel lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Facet {
    Regions,
    CareerFields,
    Technologies,
    JobLevels,
    Salary,
    Workload,
    HomeOffice,
    Industries,
    CompanySizes,
}

/// How a facet's selection is represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetKind {
    /// A list of selected tag ids.
    Tags,
    /// A list of selected state ids, grouped by region.
    Regions,
    /// A single minimum value.
    Amount,
    /// A `[min, max]` percentage range.
    Range,
}

impl Facet {
    pub const ALL: [Facet; 9] = [
        Facet::Regions,
        Facet::CareerFields,
        Facet::Technologies,
        Facet::JobLevels,
        Facet::Salary,
        Facet::Workload,
        Facet::HomeOffice,
        Facet::Industries,
        Facet::CompanySizes,
    ];

    /// Key of the facet in the `/filters` response.
    pub fn filters_key(self) -> &'static str {
        match self {
            Facet::Regions => "regions",
            Facet::CareerFields => "careerFields",
            Facet::Technologies => "technologies",
            Facet::JobLevels => "jobLevels",
            Facet::Salary => "salary",
            Facet::Workload => "workload",
            Facet::HomeOffice => "homeOffice",
            Facet::Industries => "industries",
            Facet::CompanySizes => "companySizes",
        }
    }

    /// Key of the facet in the query string. Regions are selected state by state.
    pub fn query_key(self) -> &'static str {
        match self {
            Facet::Regions => "states",
            other => other.filters_key(),
        }
    }

    pub fn from_query_key(key: &str) -> Option<Facet> {
        Facet::ALL.into_iter().find(|facet| facet.query_key() == key)
    }

    pub fn kind(self) -> FacetKind {
        match self {
            Facet::Regions => FacetKind::Regions,
            Facet::Salary | Facet::HomeOffice => FacetKind::Amount,
            Facet::Workload => FacetKind::Range,
            _ => FacetKind::Tags,
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.filters_key())
    }
}

impl FromStr for Facet {
    type Err = ParseError;

    /// Accepts either the filters key or the query key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Facet::ALL
            .into_iter()
            .find(|facet| facet.filters_key() == s || facet.query_key() == s)
            .ok_or_else(|| ParseError::UnknownFacet(s.to_string()))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Tag {
    pub id: u64,
    pub name: String,
}

/// A canton or comparable subdivision of a region.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct State {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Region {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub states: Vec<State>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct SalaryFacet {
    pub amount: Option<[u64; 2]>,
}

/// Response of `GET /{locale}/filters`. A missing facet is not offered.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    pub regions: Option<Vec<Region>>,
    pub career_fields: Option<Vec<Tag>>,
    pub technologies: Option<Vec<Tag>>,
    pub job_levels: Option<Vec<Tag>>,
    pub salary: Option<SalaryFacet>,
    pub workload: Option<[u32; 2]>,
    pub home_office: Option<[u32; 2]>,
    pub industries: Option<Vec<Tag>>,
    pub company_sizes: Option<Vec<Tag>>,
}

impl Filters {
    /// Whether the backend declared the facet at all. An empty list still counts.
    pub fn has(&self, facet: Facet) -> bool {
        match facet {
            Facet::Regions => self.regions.is_some(),
            Facet::CareerFields => self.career_fields.is_some(),
            Facet::Technologies => self.technologies.is_some(),
            Facet::JobLevels => self.job_levels.is_some(),
            Facet::Salary => self.salary.is_some(),
            Facet::Workload => self.workload.is_some(),
            Facet::HomeOffice => self.home_office.is_some(),
            Facet::Industries => self.industries.is_some(),
            Facet::CompanySizes => self.company_sizes.is_some(),
        }
    }

    /// Tags of a tag facet; empty for range facets and regions.
    pub fn tags(&self, facet: Facet) -> &[Tag] {
        let tags = match facet {
            Facet::CareerFields => self.career_fields.as_deref(),
            Facet::Technologies => self.technologies.as_deref(),
            Facet::JobLevels => self.job_levels.as_deref(),
            Facet::Industries => self.industries.as_deref(),
            Facet::CompanySizes => self.company_sizes.as_deref(),
            _ => None,
        };
        tags.unwrap_or_default()
    }

    pub fn regions(&self) -> &[Region] {
        self.regions.as_deref().unwrap_or_default()
    }

    /// Every state id across all regions, for the "whole country" choice.
    pub fn all_state_ids(&self) -> Vec<u64> {
        self.regions()
            .iter()
            .flat_map(|region| region.states.iter().map(|state| state.id))
            .collect()
    }

    /// Slider bounds for the salary facet.
    pub fn salary_bounds(&self) -> (u64, u64) {
        let amount = self.salary.as_ref().and_then(|salary| salary.amount);
        match amount {
            Some([min, max]) if max > 0 => (min, max),
            Some([min, _]) => (min, DEFAULT_MAX_SALARY),
            None => (0, DEFAULT_MAX_SALARY),
        }
    }

    /// Display name of a selected id, looked up across tags and states.
    pub fn label(&self, facet: Facet, id: u64) -> Option<&str> {
        match facet.kind() {
            FacetKind::Regions => self
                .regions()
                .iter()
                .flat_map(|region| region.states.iter())
                .find(|state| state.id == id)
                .map(|state| state.name.as_str()),
            FacetKind::Tags => self
                .tags(facet)
                .iter()
                .find(|tag| tag.id == id)
                .map(|tag| tag.name.as_str()),
            FacetKind::Amount | FacetKind::Range => None,
        }
    }
}
