use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Employer {
    #[serde(default)]
    pub name: String,
    pub logo: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Address {
    pub city: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Salary {
    pub amount: Option<[u64; 2]>,
    pub currency: Option<String>,
}

/// A listing as returned by `GET /{locale}/jobs`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Option<u64>,
    pub title: String,
    pub employer: Option<Employer>,
    pub address: Option<Address>,
    /// Percent of full time, `[min, max]`.
    pub workload: Option<[u32; 2]>,
    pub home_office: Option<[u32; 2]>,
    pub salary: Option<Salary>,
}

/// Rounds a yearly amount to whole thousands.
pub fn thousands(amount: u64) -> u64 {
    amount.saturating_add(500) / 1000
}

impl Job {
    /// `"50%"` for a fixed workload, `"50 - 80%"` for a range.
    pub fn workload_label(&self) -> Option<String> {
        let [min, max] = self.workload?;
        if min == max {
            Some(format!("{min}%"))
        } else {
            Some(format!("{min} - {max}%"))
        }
    }

    /// Salary in thousands, e.g. `"80 - 100k CHF"`.
    pub fn salary_label(&self) -> Option<String> {
        let salary = self.salary.as_ref()?;
        let [min, max] = salary.amount?;
        let (min, max) = (thousands(min), thousands(max));

        let amount = if min == max {
            format!("{min}k")
        } else {
            format!("{min} - {max}k")
        };
        match salary.currency.as_deref().filter(|c| !c.is_empty()) {
            Some(currency) => Some(format!("{amount} {currency}")),
            None => Some(amount),
        }
    }

    /// Upper home office bound, when the job offers any.
    pub fn home_office_percent(&self) -> Option<u32> {
        self.home_office
            .map(|[_, max]| max)
            .filter(|max| *max > 0)
    }

    /// City, falling back to the country.
    pub fn location(&self) -> Option<&str> {
        let address = self.address.as_ref()?;
        address
            .city
            .as_deref()
            .filter(|city| !city.is_empty())
            .or(address.country.as_deref())
    }

    pub fn employer_name(&self) -> Option<&str> {
        self.employer
            .as_ref()
            .map(|employer| employer.name.as_str())
            .filter(|name| !name.is_empty())
    }

    pub fn logo(&self) -> Option<&str> {
        self.employer
            .as_ref()
            .and_then(|employer| employer.logo.as_deref())
            .filter(|logo| !logo.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> Job {
        Job {
            id: Some(1),
            title: "Backend Engineer".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn fixed_workload_shows_single_value() {
        let job = Job {
            workload: Some([50, 50]),
            ..job()
        };
        assert_eq!(job.workload_label().as_deref(), Some("50%"));
    }

    #[test]
    fn workload_range_shows_both_bounds() {
        let job = Job {
            workload: Some([50, 80]),
            ..job()
        };
        assert_eq!(job.workload_label().as_deref(), Some("50 - 80%"));
        assert_eq!(self::job().workload_label(), None);
    }

    #[test]
    fn salary_is_bucketed_in_thousands() {
        let job = Job {
            salary: Some(Salary {
                amount: Some([80_400, 99_600]),
                currency: Some("CHF".to_string()),
            }),
            ..job()
        };
        assert_eq!(job.salary_label().as_deref(), Some("80 - 100k CHF"));
    }

    #[test]
    fn equal_salary_bounds_collapse() {
        let job = Job {
            salary: Some(Salary {
                amount: Some([120_000, 120_000]),
                currency: None,
            }),
            ..job()
        };
        assert_eq!(job.salary_label().as_deref(), Some("120k"));
    }

    #[test]
    fn location_falls_back_to_country() {
        let mut job = job();
        job.address = Some(Address {
            city: None,
            country: Some("Switzerland".to_string()),
        });
        assert_eq!(job.location(), Some("Switzerland"));

        job.address = Some(Address {
            city: Some("Bern".to_string()),
            country: Some("Switzerland".to_string()),
        });
        assert_eq!(job.location(), Some("Bern"));
    }

    #[test]
    fn zero_home_office_is_hidden() {
        let mut job = job();
        job.home_office = Some([0, 0]);
        assert_eq!(job.home_office_percent(), None);
        job.home_office = Some([20, 60]);
        assert_eq!(job.home_office_percent(), Some(60));
    }

    #[test]
    fn deserializes_camel_case_listing() {
        let job: Job = serde_json::from_str(
            r#"{
                "id": 42,
                "title": "Data Analyst",
                "employer": {"name": "Acme", "logo": "https://cdn.example/acme.png"},
                "address": {"city": "Basel", "country": "CH"},
                "workload": [80, 100],
                "homeOffice": [0, 40],
                "salary": {"amount": [90000, 110000], "currency": "CHF"}
            }"#,
        )
        .unwrap();
        assert_eq!(job.id, Some(42));
        assert_eq!(job.employer_name(), Some("Acme"));
        assert_eq!(job.home_office_percent(), Some(40));
        assert_eq!(job.salary_label().as_deref(), Some("90 - 110k CHF"));
    }

    #[test]
    fn employer_without_name_still_decodes() {
        let job: Job = serde_json::from_str(
            r#"{"id": 7, "title": "Designer", "employer": {"logo": "https://cdn.example/x.png"}}"#,
        )
        .unwrap();
        assert_eq!(job.employer_name(), None);
        assert_eq!(job.logo(), Some("https://cdn.example/x.png"));
    }

    #[test]
    fn thousands_saturates_on_huge_amounts() {
        assert_eq!(thousands(u64::MAX), u64::MAX / 1000);
        assert_eq!(thousands(1499), 1);
        assert_eq!(thousands(1500), 2);
    }
}
