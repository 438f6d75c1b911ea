//! Pagination links
//!
//! `numbers()` renders a window of page links around the current page,
//! `modulus` links wide, optionally flanked by first/last links, ellipses and
//! prev/next links. Page 1 links to the bare route; other pages add a `page`
//! query parameter.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::template::{add_class, escape_html, value_text, Options, StringTemplate, TemplateVars};
use crate::view::View;

use super::HelperBase;

const TEMPLATES: &[(&str, &str)] = &[
    ("wrapper", r#"<ul class="pagination{{attrs.class}}"{{attrs}}>{{content}}</ul>"#),
    ("nextActive", r#"<li><a href="{{url}}">{{text}}</a></li>"#),
    ("nextDisabled", r#"<li class="disabled"><a>{{text}}</a></li>"#),
    ("prevActive", r#"<li><a href="{{url}}">{{text}}</a></li>"#),
    ("prevDisabled", r#"<li class="disabled"><a>{{text}}</a></li>"#),
    ("counterRange", "{{start}} - {{end}} of {{count}}"),
    ("counterPages", "{{page}} of {{pages}}"),
    ("first", r#"<li><a href="{{url}}">{{text}}</a></li>"#),
    ("last", r#"<li><a href="{{url}}">{{text}}</a></li>"#),
    ("number", r#"<li><a href="{{url}}">{{text}}</a></li>"#),
    ("current", r#"<li class="active"><a href="{{url}}">{{text}}</a></li>"#),
    ("ellipsis", r#"<li class="ellipsis disabled"><a>&hellip;</a></li>"#),
];

const DEFAULT_MODULUS: i64 = 8;

/// Paging state of the listing being rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    /// Current page, from 1
    pub page: u64,
    /// Number of pages
    pub page_count: u64,
    /// Number of records across all pages
    #[serde(default)]
    pub count: u64,
    /// Records per page
    #[serde(default)]
    pub per_page: u64,
    /// Route of the listing
    #[serde(default)]
    pub route: String,
}

impl PageParams {
    /// Page `page` of `page_count` at `route`
    #[must_use]
    pub fn new(route: impl Into<String>, page: u64, page_count: u64) -> Self {
        Self {
            page,
            page_count,
            count: 0,
            per_page: 0,
            route: route.into(),
        }
    }

    /// Set the record count and page size, for the counter
    #[must_use]
    pub const fn records(mut self, count: u64, per_page: u64) -> Self {
        self.count = count;
        self.per_page = per_page;
        self
    }
}

/// `first`/`last` option: a number of page links or a single labelled link
#[derive(Debug, Clone, PartialEq)]
enum Edge {
    Pages(i64),
    Label(String),
}

impl Edge {
    fn from_option(value: Option<Value>) -> Option<Self> {
        match value? {
            Value::Number(n) => n.as_i64().filter(|n| *n > 0).map(Self::Pages),
            Value::Bool(true) => Some(Self::Pages(1)),
            value => value_text(&value)
                .filter(|label| !label.is_empty())
                .map(Self::Label),
        }
    }

    /// Number of pages reserved at the edge when adjusting the window
    const fn reserved(&self) -> i64 {
        match self {
            Self::Pages(n) => *n,
            Self::Label(_) => 1,
        }
    }

    /// Number of pages rendered at the edge, 0 for a label
    const fn pages(&self) -> i64 {
        match self {
            Self::Pages(n) => *n,
            Self::Label(_) => 0,
        }
    }
}

/// Paginator helper
#[derive(Debug, Clone)]
pub struct PaginatorHelper {
    base: HelperBase,
    params: PageParams,
}

impl PaginatorHelper {
    /// Helper for `params` with the default templates and the `paginator`
    /// overrides
    #[must_use]
    pub fn new(view: &View, params: PageParams) -> Self {
        Self {
            base: HelperBase::new(view, "paginator", TEMPLATES),
            params,
        }
    }

    /// Template table, for customization
    pub fn templates_mut(&mut self) -> &mut StringTemplate {
        &mut self.base.templates
    }

    /// Paging state
    #[must_use]
    pub const fn params(&self) -> &PageParams {
        &self.params
    }

    /// Numbered page links, empty when there is a single page
    ///
    /// Options:
    /// - `modulus`: number of links around the current page (default 8,
    ///   `false` for all pages)
    /// - `first` / `last`: a number of edge pages to link, or a label for a
    ///   single link to the first/last page
    /// - `prev` / `next`: title of the prev/next link, or an object with a
    ///   `title` and the link options
    /// - `size`: `sm`/`small` or `lg`/`large`
    /// - `templates`: templates used for this call only
    ///
    /// # Examples
    ///
    /// ```rust
    /// use acton_bootstrap::prelude::*;
    ///
    /// let mut paginator = View::default().paginator(PageParams::new("/posts", 2, 3));
    /// let html = paginator.numbers(Options::new().with("size", "sm"))?;
    ///
    /// assert_eq!(
    ///     html,
    ///     concat!(
    ///         r#"<ul class="pagination pagination-sm">"#,
    ///         r#"<li><a href="/posts">1</a></li>"#,
    ///         r#"<li class="active"><a href="/posts?page=2">2</a></li>"#,
    ///         r#"<li><a href="/posts?page=3">3</a></li>"#,
    ///         "</ul>"
    ///     )
    /// );
    /// # Ok::<(), acton_bootstrap::error::BootstrapError>(())
    /// ```
    pub fn numbers(&mut self, mut options: Options) -> Result<String> {
        if self.params.page_count <= 1 {
            return Ok(String::new());
        }
        let overrides = options.take_options("templates");
        let scoped = !overrides.is_empty();
        if scoped {
            self.base.templates.push_scope(
                overrides
                    .iter()
                    .filter_map(|(name, value)| value_text(value).map(|t| (name.clone(), t))),
            );
        }
        let out = self.render_numbers(options);
        if scoped {
            self.base.templates.pop_scope()?;
        }
        out
    }

    fn render_numbers(&self, mut options: Options) -> Result<String> {
        let template_vars = options.take_options("templateVars");
        let modulus = match options.take("modulus") {
            Some(Value::Bool(false)) => None,
            Some(value) => Some(value.as_i64().unwrap_or(DEFAULT_MODULUS)),
            None => Some(DEFAULT_MODULUS),
        };
        let first = Edge::from_option(options.take("first"));
        let last = Edge::from_option(options.take("last"));
        let prev = self.edge_link(options.take("prev"), Self::prev)?;
        let next = self.edge_link(options.take("next"), Self::next)?;
        match options.take_str("size").as_deref() {
            Some("sm" | "small") => options = add_class(&options, "pagination-sm"),
            Some("lg" | "large") => options = add_class(&options, "pagination-lg"),
            _ => {}
        }

        let page = self.page();
        let page_count = self.page_count();
        let (start, end) = match modulus {
            Some(modulus) if page_count > modulus => {
                window(page, page_count, modulus, first.as_ref(), last.as_ref())
            }
            _ => (1, page_count),
        };

        let ellipsis = self
            .base
            .format("ellipsis", TemplateVars::new(), &Options::new())?;
        let first_links = self.first_links(&ellipsis, start, first.as_ref())?;
        let last_links = self.last_links(&ellipsis, end, last.as_ref())?;

        let mut content = if first.as_ref().is_some_and(|edge| edge.pages() > 1) {
            prev + &first_links
        } else {
            first_links + &prev
        };
        for number in start..=end {
            let template = if number == page { "current" } else { "number" };
            content.push_str(&self.base.format(
                template,
                TemplateVars::new()
                    .with("text", number.to_string())
                    .with("url", self.page_url(number)),
                &template_vars,
            )?);
        }
        if last.as_ref().is_some_and(|edge| edge.pages() > 1) {
            content.push_str(&last_links);
            content.push_str(&next);
        } else {
            content.push_str(&next);
            content.push_str(&last_links);
        }

        self.base.format(
            "wrapper",
            TemplateVars::new()
                .with("content", content)
                .attrs(self.base.attrs(&options, &[])),
            &Options::new(),
        )
    }

    /// Link to the previous page, disabled on the first page
    pub fn prev(&self, title: &str, options: Options) -> Result<String> {
        let target = (self.page() > 1).then(|| self.page() - 1);
        self.step_link("prev", title, target, options)
    }

    /// Link to the next page, disabled on the last page
    pub fn next(&self, title: &str, options: Options) -> Result<String> {
        let target = (self.page() < self.page_count()).then(|| self.page() + 1);
        self.step_link("next", title, target, options)
    }

    /// Link to the first page, empty on the first page
    pub fn first(&self, title: &str, mut options: Options) -> Result<String> {
        if self.page() <= 1 {
            return Ok(String::new());
        }
        let text = self.link_text(title, &mut options);
        self.base.format(
            "first",
            TemplateVars::new().with("text", text).with("url", self.page_url(1)),
            &options.take_options("templateVars"),
        )
    }

    /// Link to the last page, empty on the last page
    pub fn last(&self, title: &str, mut options: Options) -> Result<String> {
        if self.page() >= self.page_count() {
            return Ok(String::new());
        }
        let text = self.link_text(title, &mut options);
        self.base.format(
            "last",
            TemplateVars::new()
                .with("text", text)
                .with("url", self.page_url(self.page_count())),
            &options.take_options("templateVars"),
        )
    }

    /// Position text: `pages` gives "2 of 5", `range` gives "11 - 20 of 42"
    pub fn counter(&self, format: &str) -> Result<String> {
        let params = &self.params;
        if format == "range" {
            let start = if params.count == 0 {
                0
            } else {
                params.page.saturating_sub(1) * params.per_page + 1
            };
            let end = (params.page * params.per_page).min(params.count);
            return self.base.format(
                "counterRange",
                TemplateVars::new()
                    .with("start", start.to_string())
                    .with("end", end.to_string())
                    .with("count", params.count.to_string()),
                &Options::new(),
            );
        }
        self.base.format(
            "counterPages",
            TemplateVars::new()
                .with("page", params.page.to_string())
                .with("pages", params.page_count.to_string()),
            &Options::new(),
        )
    }

    fn step_link(
        &self,
        kind: &str,
        title: &str,
        target: Option<i64>,
        mut options: Options,
    ) -> Result<String> {
        let template_vars = options.take_options("templateVars");
        let text = self.link_text(title, &mut options);
        match target {
            Some(page) => self.base.format(
                &format!("{kind}Active"),
                TemplateVars::new()
                    .with("text", text)
                    .with("url", self.page_url(page)),
                &template_vars,
            ),
            None => self.base.format(
                &format!("{kind}Disabled"),
                TemplateVars::new().with("text", text),
                &template_vars,
            ),
        }
    }

    /// Render a `prev`/`next` option: a title or `{title, ...options}`
    fn edge_link<F>(&self, value: Option<Value>, render: F) -> Result<String>
    where
        F: Fn(&Self, &str, Options) -> Result<String>,
    {
        match value {
            None | Some(Value::Null | Value::Bool(false)) => Ok(String::new()),
            Some(Value::Object(map)) => {
                let mut options = Options::from(map);
                let title = options.take_str("title").unwrap_or_default();
                render(self, &title, options)
            }
            Some(value) => render(self, &value_text(&value).unwrap_or_default(), Options::new()),
        }
    }

    fn first_links(&self, ellipsis: &str, start: i64, first: Option<&Edge>) -> Result<String> {
        let Some(first) = first else {
            return Ok(String::new());
        };
        if start <= 1 {
            return Ok(String::new());
        }
        let pages = first.pages();
        let mut out = match first {
            Edge::Pages(_) => self.page_numbers(1, pages.min(start - 1))?,
            Edge::Label(label) => self.first_label(label)?,
        };
        if pages < start - 1 {
            out.push_str(ellipsis);
        }
        Ok(out)
    }

    fn last_links(&self, ellipsis: &str, end: i64, last: Option<&Edge>) -> Result<String> {
        let Some(last) = last else {
            return Ok(String::new());
        };
        let page_count = self.page_count();
        if end >= page_count {
            return Ok(String::new());
        }
        let pages = last.pages();
        let mut out = String::new();
        if page_count - end > pages {
            out.push_str(ellipsis);
        }
        match last {
            Edge::Pages(_) => {
                let count = pages.min(page_count - end);
                out.push_str(&self.page_numbers(page_count - count + 1, page_count)?);
            }
            Edge::Label(label) => out.push_str(&self.base.format(
                "last",
                TemplateVars::new()
                    .with("text", escape_html(label))
                    .with("url", self.page_url(page_count)),
                &Options::new(),
            )?),
        }
        Ok(out)
    }

    fn first_label(&self, label: &str) -> Result<String> {
        self.base.format(
            "first",
            TemplateVars::new()
                .with("text", escape_html(label))
                .with("url", self.page_url(1)),
            &Options::new(),
        )
    }

    fn page_numbers(&self, from: i64, to: i64) -> Result<String> {
        (from..=to)
            .map(|number| {
                self.base.format(
                    "number",
                    TemplateVars::new()
                        .with("text", number.to_string())
                        .with("url", self.page_url(number)),
                    &Options::new(),
                )
            })
            .collect()
    }

    fn link_text(&self, title: &str, options: &mut Options) -> String {
        let escape = HelperBase::take_escape(options, true);
        let (text, icon) = self.base.easy_icon(title, options);
        if escape && !icon {
            escape_html(&text)
        } else {
            text
        }
    }

    fn page_url(&self, page: i64) -> String {
        let url = self.base.view.urls().build(&self.params.route);
        let url = if page <= 1 {
            url
        } else {
            let separator = if url.contains('?') { '&' } else { '?' };
            format!("{url}{separator}page={page}")
        };
        escape_html(&url)
    }

    fn page(&self) -> i64 {
        i64::try_from(self.params.page).unwrap_or(i64::MAX).max(1)
    }

    fn page_count(&self) -> i64 {
        i64::try_from(self.params.page_count).unwrap_or(i64::MAX)
    }
}

/// First and last page numbers of the window around `page`
fn window(
    page: i64,
    page_count: i64,
    modulus: i64,
    first: Option<&Edge>,
    last: Option<&Edge>,
) -> (i64, i64) {
    let half = modulus / 2;
    let mut end = (1 + modulus).max(page + half);
    let mut start = (page_count - modulus).min(page - half - modulus % 2);

    if let Some(first) = first {
        if start <= first.reserved() + 2 {
            start = 1;
        }
    }
    if let Some(last) = last {
        if end >= page_count - last.reserved() - 1 {
            end = page_count;
        }
    }
    (start.max(1), end.min(page_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticUrls;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use serde_json::json;

    fn paginator(page: u64, page_count: u64) -> PaginatorHelper {
        View::default()
            .with_urls(StaticUrls::new("", "/index"))
            .paginator(PageParams::new("/index", page, page_count))
    }

    fn item(page: i64) -> String {
        let url = if page == 1 {
            "/index".to_string()
        } else {
            format!("/index?page={page}")
        };
        format!(r#"<li><a href="{url}">{page}</a></li>"#)
    }

    fn current(page: i64) -> String {
        let url = if page == 1 {
            "/index".to_string()
        } else {
            format!("/index?page={page}")
        };
        format!(r#"<li class="active"><a href="{url}">{page}</a></li>"#)
    }

    fn run(page: i64, range: std::ops::RangeInclusive<i64>) -> String {
        range
            .map(|n| if n == page { current(n) } else { item(n) })
            .collect()
    }

    const ELLIPSIS: &str = r#"<li class="ellipsis disabled"><a>&hellip;</a></li>"#;

    fn wrap(content: &str) -> String {
        format!(r#"<ul class="pagination">{content}</ul>"#)
    }

    #[test]
    fn test_window_in_the_middle() {
        let out = paginator(8, 15).numbers(Options::new()).unwrap();
        assert_eq!(out, wrap(&run(8, 4..=12)));
    }

    #[test]
    fn test_window_at_the_edges() {
        assert_eq!(
            paginator(1, 15).numbers(Options::new()).unwrap(),
            wrap(&run(1, 1..=9))
        );
        assert_eq!(
            paginator(14, 15).numbers(Options::new()).unwrap(),
            wrap(&run(14, 7..=15))
        );
    }

    #[test]
    fn test_first_and_last_labels() {
        let out = paginator(8, 15)
            .numbers(Options::new().with("first", "first").with("last", "last"))
            .unwrap();
        let expected = format!(
            r#"<li><a href="/index">first</a></li>{ELLIPSIS}{}{ELLIPSIS}<li><a href="/index?page=15">last</a></li>"#,
            run(8, 4..=12)
        );
        assert_eq!(out, wrap(&expected));
    }

    #[test]
    fn test_first_and_last_pages() {
        let out = paginator(15, 15)
            .numbers(Options::new().with("first", 1))
            .unwrap();
        assert_eq!(out, wrap(&format!("{}{ELLIPSIS}{}", item(1), run(15, 7..=15))));

        let out = paginator(10, 15)
            .numbers(Options::new().with("first", 1).with("last", 1))
            .unwrap();
        assert_eq!(out, wrap(&format!("{}{ELLIPSIS}{}", item(1), run(10, 6..=15))));

        let out = paginator(6, 42)
            .numbers(Options::new().with("first", 1).with("last", 1))
            .unwrap();
        assert_eq!(out, wrap(&format!("{}{ELLIPSIS}{}", run(6, 1..=10), item(42))));

        let out = paginator(37, 42)
            .numbers(Options::new().with("first", 1).with("last", 1))
            .unwrap();
        assert_eq!(out, wrap(&format!("{}{ELLIPSIS}{}", item(1), run(37, 33..=42))));

        let out = paginator(2, 9).numbers(Options::new().with("first", 1)).unwrap();
        assert_eq!(out, wrap(&run(2, 1..=9)));
    }

    #[test]
    fn test_single_page_renders_nothing() {
        assert_eq!(paginator(1, 1).numbers(Options::new()).unwrap(), "");
        assert_eq!(paginator(1, 0).numbers(Options::new()).unwrap(), "");
    }

    #[test]
    fn test_modulus_disabled() {
        let out = paginator(3, 12)
            .numbers(Options::new().with("modulus", false))
            .unwrap();
        assert_eq!(out, wrap(&run(3, 1..=12)));
    }

    #[test]
    fn test_prev_next_and_size() {
        let out = paginator(1, 3)
            .numbers(
                Options::new()
                    .with("prev", "<")
                    .with("next", json!({"title": ">", "class": "ignored"}))
                    .with("size", "large"),
            )
            .unwrap();
        assert_eq!(
            out,
            format!(
                r#"<ul class="pagination pagination-lg"><li class="disabled"><a>&lt;</a></li>{}<li><a href="/index?page=2">&gt;</a></li></ul>"#,
                run(1, 1..=3)
            )
        );
    }

    #[test]
    fn test_prev_and_next_with_icons() {
        let helper = paginator(1, 7);
        assert_eq!(
            helper.prev("<", Options::new()).unwrap(),
            r#"<li class="disabled"><a>&lt;</a></li>"#
        );
        let next = helper.next("i:chevron-right", Options::new()).unwrap();
        assert!(next.starts_with(r#"<li><a href="/index?page=2"><i aria-hidden="true" class="glyphicon glyphicon-chevron-right""#));
    }

    #[test]
    fn test_first_last_links() {
        let helper = paginator(3, 7);
        assert_eq!(
            helper.first("<< first", Options::new()).unwrap(),
            r#"<li><a href="/index">&lt;&lt; first</a></li>"#
        );
        assert_eq!(
            helper.last("last >>", Options::new()).unwrap(),
            r#"<li><a href="/index?page=7">last &gt;&gt;</a></li>"#
        );
        assert_eq!(paginator(1, 7).first("first", Options::new()).unwrap(), "");
        assert_eq!(paginator(7, 7).last("last", Options::new()).unwrap(), "");
    }

    #[test]
    fn test_scoped_templates_are_restored() {
        let mut helper = paginator(2, 3);
        let out = helper
            .numbers(Options::new().with(
                "templates",
                json!({"current": r#"<li class="now">{{text}}</li>"#}),
            ))
            .unwrap();
        assert!(out.contains(r#"<li class="now">2</li>"#));

        let out = helper.numbers(Options::new()).unwrap();
        assert!(out.contains(r#"<li class="active"><a href="/index?page=2">2</a></li>"#));
    }

    #[test]
    fn test_counter() {
        let helper = View::default()
            .paginator(PageParams::new("/posts", 2, 5).records(42, 10));
        assert_eq!(helper.counter("pages").unwrap(), "2 of 5");
        assert_eq!(helper.counter("range").unwrap(), "11 - 20 of 42");

        let last = View::default()
            .paginator(PageParams::new("/posts", 5, 5).records(42, 10));
        assert_eq!(last.counter("range").unwrap(), "41 - 42 of 42");
    }

    #[test]
    fn test_page_url_keeps_query() {
        let helper = View::default().paginator(PageParams::new("/posts?tag=rust", 1, 2));
        assert_eq!(helper.page_url(2), "/posts?tag=rust&amp;page=2");
        assert_eq!(helper.page_url(1), "/posts?tag=rust");
    }

    proptest! {
        #[test]
        fn prop_window_contains_page(page_count in 2_i64..200, page_seed in 0_i64..200, modulus in 1_i64..20) {
            let page = page_seed % page_count + 1;
            let (start, end) = window(page, page_count, modulus, None, None);
            prop_assert!(start >= 1);
            prop_assert!(end <= page_count);
            prop_assert!(start <= page && page <= end);
        }
    }
}
