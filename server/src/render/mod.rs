//! HTML rendering.
//!
//! Pages are assembled from plain strings; every value that comes from the
//! API or the URL goes through [`escape`].

pub mod filters;
pub mod jobs;

use std::fmt::Write;

use common::{CustomBoard, FilterPanel, Filters, Job, Locale};

use crate::i18n::Dictionary;
use jobs::{Pager, RowContext};

/// Escapes text for HTML bodies and quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

pub fn layout(locale: Locale, title: &str, body: &str) -> String {
    let mut switcher = String::new();
    for other in Locale::ALL {
        let class = if other == locale { " class=\"current\"" } else { "" };
        let _ = write!(switcher, r#"<a href="/{other}"{class}>{}</a>"#, other.as_str().to_uppercase());
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="{locale}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
<nav class="locales">{switcher}</nav>
{body}
</body>
</html>
"#,
        title = escape(title),
    )
}

fn heading(dict: Dictionary) -> String {
    format!(
        r#"<header class="heading"><h1>{}</h1></header>"#,
        escape(dict.t("Find your next job"))
    )
}

/// Everything a listing page shows.
pub struct ListingView<'a> {
    pub locale: Locale,
    /// `None` when the board hides all filters.
    pub filters: Option<&'a Filters>,
    pub panel: &'a FilterPanel,
    pub board: &'a CustomBoard,
    pub jobs: &'a [Job],
    pub pager: Pager,
    /// Path and query of the page, used to come back after a like.
    pub current_path: &'a str,
}

pub fn listing_page(view: &ListingView<'_>) -> String {
    let dict = Dictionary::new(view.locale);
    let mut body = String::from("<main>");
    body.push_str(&heading(dict));

    if let Some(filters) = view.filters {
        body.push_str(&filters::filters_section(&filters::FiltersView {
            panel: view.panel,
            filters,
            board: view.board,
            dict,
        }));
    }

    let rows = RowContext {
        locale: view.locale,
        dict,
        board: view.board,
        back: view.current_path,
    };
    body.push_str(&jobs::job_table(view.jobs, &rows, &view.pager));
    body.push_str("</main>");

    layout(view.locale, dict.t("Find your next job"), &body)
}

/// The page shown for any failed request.
pub fn error_page(locale: Locale, message: &str) -> String {
    let dict = Dictionary::new(locale);
    let body = format!(
        r#"<main class="error-page">
<p class="error-title">{title}</p>
<p class="error-message">{message}</p>
<a class="home-link" href="/{locale}">{home}</a>
</main>"#,
        title = escape(dict.t("Something went wrong!")),
        message = escape(message),
        home = escape(dict.t("Go back home")),
    );
    layout(locale, dict.t("Something went wrong!"), &body)
}
