//! Job table and job rows.

use std::fmt::Write;

use common::{CustomBoard, Job, Locale};

use super::escape;
use crate::i18n::Dictionary;

/// Settings shared by all rows of a table.
pub struct RowContext<'a> {
    pub locale: Locale,
    pub dict: Dictionary,
    pub board: &'a CustomBoard,
    /// Where the like form returns to.
    pub back: &'a str,
}

/// Navigation below the table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pager {
    pub previous: Option<String>,
    pub next: Option<String>,
    /// Filtered listings grow instead of paging.
    pub more: Option<String>,
}

pub fn job_row(job: &Job, ctx: &RowContext<'_>) -> String {
    let dict = ctx.dict;
    let mut html = String::new();

    let _ = write!(html, r#"<article class="job-row""#);
    if let Some(id) = job.id {
        let _ = write!(html, r#" data-job-id="{id}""#);
    }
    html.push('>');

    html.push_str(r#"<div class="job-heading">"#);
    if !ctx.board.cards {
        if let Some(logo) = job.logo() {
            let alt = format!("{} {}", dict.t("Logo of"), job.employer_name().unwrap_or_default());
            let _ = write!(
                html,
                r#"<img class="logo" src="{}" alt="{}" width="130" height="52">"#,
                escape(logo),
                escape(&alt)
            );
        }
    }

    let _ = write!(html, r#"<h2 class="job-title">{}"#, escape(&job.title));
    if let Some(workload) = job.workload_label() {
        let _ = write!(html, r#" <span class="workload">{}</span>"#, escape(&workload));
    }
    html.push_str("</h2>");

    let mut employer_line = job.employer_name().unwrap_or_default().to_string();
    if let Some(percent) = job.home_office_percent() {
        let _ = write!(employer_line, ", {percent}% {}", dict.t("Home Office"));
    }
    if !employer_line.is_empty() {
        let _ = write!(html, r#"<span class="employer">{}</span>"#, escape(&employer_line));
    }
    html.push_str("</div>");

    html.push_str(r#"<div class="job-details">"#);
    if let Some(salary) = job.salary_label() {
        let _ = write!(
            html,
            r#"<span class="salary" title="{}">{}</span><span class="salary-info" title="{}">i</span>"#,
            escape(dict.t("Yearly salary in thousands")),
            escape(&salary),
            escape(dict.t(
                "Salary slightly below or above this range is possible, depending on your skills"
            )),
        );
    }
    if let Some(location) = job.location() {
        let _ = write!(
            html,
            r#"<span class="location" title="{}">{}</span>"#,
            escape(dict.t("Location")),
            escape(location)
        );
    }
    if !ctx.board.disable_compare_view {
        if let Some(id) = job.id.filter(|id| *id != 0) {
            let _ = write!(
                html,
                r#"<form class="like" method="post" action="/{locale}/likes" title="{hint}"><input type="hidden" name="jobId" value="{id}"><input type="hidden" name="back" value="{back}"><button type="submit">{like}</button></form>"#,
                locale = ctx.locale,
                hint = escape(dict.t("Like 2 or more jobs to compare")),
                back = escape(ctx.back),
                like = escape(dict.t("Like")),
            );
        }
    }
    html.push_str("</div></article>");
    html
}

pub fn job_table(jobs: &[Job], ctx: &RowContext<'_>, pager: &Pager) -> String {
    let dict = ctx.dict;
    let mut html = String::from(r#"<section class="job-table">"#);

    if jobs.is_empty() {
        let _ = write!(html, r#"<p class="no-jobs">{}</p>"#, escape(dict.t("No jobs found")));
    }
    for job in jobs {
        html.push_str(&job_row(job, ctx));
    }

    if pager != &Pager::default() {
        html.push_str(r#"<nav class="pager">"#);
        if let Some(href) = &pager.previous {
            let _ = write!(html, r#"<a class="previous" href="{}">{}</a>"#, escape(href), escape(dict.t("Previous")));
        }
        if let Some(href) = &pager.next {
            let _ = write!(html, r#"<a class="next" href="{}">{}</a>"#, escape(href), escape(dict.t("Next")));
        }
        if let Some(href) = &pager.more {
            let _ = write!(html, r#"<a class="more" href="{}">{}</a>"#, escape(href), escape(dict.t("More...")));
        }
        html.push_str("</nav>");
    }

    html.push_str("</section>");
    html
}
