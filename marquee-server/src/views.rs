//! Server-rendered HTML.
//!
//! Pages are small enough to be assembled with `format!`; every value that
//! came from a request or from TMDB goes through [`escape`].

use std::fmt::Write as _;

use axum::http::StatusCode;
use marquee_core::{
    MediaKind, OutOfRange, PageTarget, SearchResponse, SearchRoute, SortKey,
    SortOrder,
};

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Marquee</title>
</head>
<body>
<header><a href="/">Marquee</a></header>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

pub fn home_page() -> String {
    let body = r#"<h1>Search movies and TV series</h1>
<form action="/search" method="get">
  <fieldset>
    <label><input type="radio" name="kind" value="movie" checked> Movie</label>
    <label><input type="radio" name="kind" value="tv"> TV Series</label>
  </fieldset>
  <input type="text" name="title" placeholder="Title" required>
  <button type="submit">Search</button>
</form>"#;
    layout("Search", body)
}

fn page_href(
    kind: MediaKind,
    title: &str,
    page: u32,
    sort: SortKey,
    order: SortOrder,
) -> String {
    PageTarget {
        kind,
        title,
        sort,
        order,
        route: SearchRoute::Page,
    }
    .link(page)
}

pub fn results_page(kind: MediaKind, response: &SearchResponse) -> String {
    let title = response.title.as_str();
    let mut body = String::new();

    let _ = writeln!(
        body,
        "<h1>{} results for &quot;{}&quot;</h1>",
        kind.label(),
        escape(title)
    );

    body.push_str("<table>\n<thead><tr>");
    for key in SortKey::ALL {
        // Clicking the active column flips its direction.
        let order = if key == response.sort {
            response.order.flipped()
        } else {
            SortOrder::default()
        };
        let marker = match (key == response.sort, response.order) {
            (true, SortOrder::Asc) => " &#9650;",
            (true, SortOrder::Desc) => " &#9660;",
            (false, _) => "",
        };
        let _ = write!(
            body,
            r#"<th><a href="{}">{}{}</a></th>"#,
            escape(&page_href(kind, title, response.page, key, order)),
            column_label(key),
            marker
        );
    }
    body.push_str("</tr></thead>\n<tbody>\n");

    if response.results.is_empty() {
        body.push_str("<tr><td colspan=\"4\">No results.</td></tr>\n");
    }
    for item in &response.results {
        let _ = writeln!(
            body,
            concat!(
                "<tr><td>{:.1}</td><td>{:.1}</td><td>{}</td>",
                r#"<td><a href="/watch/{}/{}/">{}</a></td></tr>"#
            ),
            item.popularity,
            item.rating,
            item.year,
            kind,
            item.id,
            escape(&item.name)
        );
    }
    body.push_str("</tbody>\n</table>\n");

    body.push_str("<nav class=\"pager\">");
    if response.page > 1 {
        let _ = write!(
            body,
            r#"<a rel="prev" href="{}">Previous</a> "#,
            escape(&page_href(
                kind,
                title,
                response.page - 1,
                response.sort,
                response.order
            ))
        );
    }
    let _ = write!(
        body,
        "<span>Page {} of {}</span>",
        response.page, response.total_pages
    );
    if response.page < response.total_pages {
        let _ = write!(
            body,
            r#" <a rel="next" href="{}">Next</a>"#,
            escape(&page_href(
                kind,
                title,
                response.page + 1,
                response.sort,
                response.order
            ))
        );
    }
    body.push_str("</nav>");

    layout(&format!("{} - {}", response.title, kind.label()), &body)
}

fn column_label(key: SortKey) -> &'static str {
    match key {
        SortKey::Popularity => "Popularity",
        SortKey::Rating => "Rating",
        SortKey::Year => "Year",
        SortKey::Name => "Name",
    }
}

pub fn out_of_range_page(out: &OutOfRange) -> String {
    let body = format!(
        r#"<p>{} Click <a href="{}">here</a> to see the last page!</p>"#,
        escape(&out.message),
        escape(&out.retry_url)
    );
    layout("No more pages", &body)
}

pub fn watch_page(kind: MediaKind, id: &str) -> String {
    let body = format!(
        "<h1>Watch {}</h1>\n<p>{} ID: <code>{}</code></p>",
        kind.label(),
        kind.label(),
        escape(id)
    );
    layout(&format!("Watch {}", kind.label()), &body)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let heading = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<p><a href=\"/\">Back to search</a></p>",
        escape(heading),
        escape(message)
    );
    layout(heading, &body)
}
