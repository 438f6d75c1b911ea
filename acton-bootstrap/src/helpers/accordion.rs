//! Cards and panels, alone or grouped as accordions
//!
//! Both widgets share one engine: a stack holding `group` frames and item
//! frames, a section tracker for the header/body/footer parts of the item on
//! top, and two counters. The item counter drives the `heading-<n>` and
//! `collapse-<n>` ids and keeps counting across groups; the group counter
//! drives the `<prefix>-<n>` group ids.
//!
//! # Examples
//!
//! ```rust
//! use acton_bootstrap::prelude::*;
//!
//! let view = View::default();
//! let mut cards = view.card();
//!
//! let mut html = cards.start_group(Options::new())?;
//! html.push_str(&cards.create("First", Options::new())?);
//! html.push_str("One");
//! html.push_str(&cards.create("Second", Options::new())?);
//! html.push_str("Two");
//! html.push_str(&cards.end_group()?);
//!
//! assert!(html.contains(r##"data-parent="#cardGroup-1""##));
//! assert!(html.contains(r#"id="heading-1""#));
//! # Ok::<(), acton_bootstrap::error::BootstrapError>(())
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde_json::{json, Value};

use crate::config::{AccordionSettings, BootstrapConfig};
use crate::error::Result;
use crate::section::SectionTracker;
use crate::state::{state_map, StackedStates};
use crate::template::{escape_html, Options, StringTemplate, TemplateVars};
use crate::view::View;

use super::{Content, HelperBase};

const GROUP: &str = "group";

/// Markup flavor of an accordion helper
pub trait Flavor: fmt::Debug + Clone + Default {
    /// Name of the item frames and prefix of the item templates
    const ITEM: &'static str;
    /// Prefix of generated group ids
    const GROUP_PREFIX: &'static str;
    /// Class marking an expanded collapsible body
    const OPEN_CLASS: &'static str;
    /// Template wrapping header titles; a wrapped title closes the header
    const TITLE_WRAP: Option<&'static str>;

    /// Default templates
    fn templates() -> &'static [(&'static str, &'static str)];

    /// Configured defaults
    fn settings(config: &BootstrapConfig) -> AccordionSettings;
}

/// Bootstrap 4 cards
#[derive(Debug, Clone, Copy, Default)]
pub struct CardStyle;

impl Flavor for CardStyle {
    const ITEM: &'static str = "card";
    const GROUP_PREFIX: &'static str = "cardGroup";
    const OPEN_CLASS: &'static str = "show";
    const TITLE_WRAP: Option<&'static str> = None;

    fn templates() -> &'static [(&'static str, &'static str)] {
        &[
            ("cardGroupStart", r#"<div role="tablist"{{attrs}}>"#),
            ("cardGroupEnd", "</div>"),
            ("cardStart", r#"<div class="card card-{{type}}{{attrs.class}}"{{attrs}}>"#),
            ("cardEnd", "</div>"),
            ("headerStart", r#"<div class="card-header{{attrs.class}}"{{attrs}}>"#),
            ("headerCollapsibleStart", r#"<div class="card-header{{attrs.class}}" role="tab"{{attrs}}>"#),
            ("headerCollapsibleLink", r##"<h5 class="mb-0"><a role="button" data-toggle="collapse" href="#{{target}}" aria-expanded="{{expanded}}" aria-controls="{{target}}"{{attrs}}>{{content}}</a></h5>"##),
            ("headerEnd", "</div>"),
            ("title", r#"<h4 class="card-title{{attrs.class}}"{{attrs}}>{{content}}</h4>"#),
            ("bodyStart", r#"<div class="card-body{{attrs.class}}"{{attrs}}>"#),
            ("bodyEnd", "</div>"),
            ("bodyCollapsibleStart", r#"<div class="collapse{{attrs.class}}" role="tabpanel" aria-labelledby="{{headId}}"{{attrs}}>{{bodyStart}}"#),
            ("bodyCollapsibleEnd", "{{bodyEnd}}</div>"),
            ("footerStart", r#"<div class="card-footer{{attrs.class}}"{{attrs}}>"#),
            ("footerEnd", "</div>"),
        ]
    }

    fn settings(config: &BootstrapConfig) -> AccordionSettings {
        config.card
    }
}

/// Bootstrap 3 panels
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelStyle;

impl Flavor for PanelStyle {
    const ITEM: &'static str = "panel";
    const GROUP_PREFIX: &'static str = "panelGroup";
    const OPEN_CLASS: &'static str = "in";
    const TITLE_WRAP: Option<&'static str> = Some("headerTitle");

    fn templates() -> &'static [(&'static str, &'static str)] {
        &[
            ("panelGroupStart", r#"<div class="panel-group{{attrs.class}}" role="tablist" aria-multiselectable="true"{{attrs}}>"#),
            ("panelGroupEnd", "</div>"),
            ("panelStart", r#"<div class="panel panel-{{type}}{{attrs.class}}"{{attrs}}>"#),
            ("panelEnd", "</div>"),
            ("headerStart", r#"<div class="panel-heading{{attrs.class}}"{{attrs}}>"#),
            ("headerCollapsibleStart", r#"<div class="panel-heading{{attrs.class}}" role="tab"{{attrs}}>"#),
            ("headerTitle", r#"<h4 class="panel-title{{attrs.class}}"{{attrs}}>{{content}}</h4>"#),
            ("headerCollapsibleLink", r##"<a role="button" data-toggle="collapse" href="#{{target}}" aria-expanded="{{expanded}}" aria-controls="{{target}}"{{attrs}}>{{content}}</a>"##),
            ("headerEnd", "</div>"),
            ("title", r#"<h4 class="panel-title{{attrs.class}}"{{attrs}}>{{content}}</h4>"#),
            ("bodyStart", r#"<div class="panel-body{{attrs.class}}"{{attrs}}>"#),
            ("bodyEnd", "</div>"),
            ("bodyCollapsibleStart", r#"<div class="panel-collapse collapse{{attrs.class}}" role="tabpanel" aria-labelledby="{{headId}}"{{attrs}}>{{bodyStart}}"#),
            ("bodyCollapsibleEnd", "{{bodyEnd}}</div>"),
            ("footerStart", r#"<div class="panel-footer{{attrs.class}}"{{attrs}}>"#),
            ("footerEnd", "</div>"),
        ]
    }

    fn settings(config: &BootstrapConfig) -> AccordionSettings {
        config.panel
    }
}

/// Card helper
pub type CardHelper = AccordionHelper<CardStyle>;

/// Panel helper
pub type PanelHelper = AccordionHelper<PanelStyle>;

/// Streaming builder of cards or panels
#[derive(Debug, Clone)]
pub struct AccordionHelper<F: Flavor> {
    base: HelperBase,
    states: StackedStates,
    sections: SectionTracker,
    item_count: usize,
    group_count: usize,
    flavor: PhantomData<F>,
}

impl<F: Flavor> AccordionHelper<F> {
    /// Helper with the flavor templates and their configured overrides
    #[must_use]
    pub fn new(view: &View) -> Self {
        let states = StackedStates::with_defaults([
            (
                GROUP,
                state_map(json!({
                    "groupOpen": false,
                    "groupCount": -1,
                    "groupId": false,
                    "groupCollapsible": true,
                })),
            ),
            (
                F::ITEM,
                state_map(json!({
                    "bodyId": null,
                    "headId": null,
                    "collapsible": false,
                    "open": false,
                    "inGroup": false,
                    "groupId": false,
                })),
            ),
        ]);
        Self {
            base: HelperBase::new(view, F::ITEM, F::templates()),
            states,
            sections: SectionTracker::new(),
            item_count: 0,
            group_count: 0,
            flavor: PhantomData,
        }
    }

    /// Template table, for customization
    pub fn templates_mut(&mut self) -> &mut StringTemplate {
        &mut self.base.templates
    }

    /// Whether no group or item is open
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.states.is_empty() && !self.sections.has_open_section()
    }

    /// Open a group of items
    ///
    /// Options: `id` (generated by default), `collapsible` (default true),
    /// `open` index of the item expanded by default (default `0`). Other
    /// options become attributes.
    pub fn start_group(&mut self, mut options: Options) -> Result<String> {
        self.group_count += 1;
        let template_vars = options.take_options("templateVars");
        let collapsible = options.take_bool("collapsible", true);
        let open = options.take("open").unwrap_or_else(|| json!(0));
        let id = options
            .get_str("id")
            .map_or_else(|| format!("{}-{}", F::GROUP_PREFIX, self.group_count), str::to_string);
        let options = options.merge_defaults(Options::new().with("id", id.as_str()));

        self.states.push(
            GROUP,
            state_map(json!({
                "groupOpen": open,
                "groupCount": -1,
                "groupId": id,
                "groupCollapsible": collapsible,
            })),
        );
        self.base.format(
            &format!("{}GroupStart", F::ITEM),
            TemplateVars::new().attrs(self.base.attrs(&options, &[])),
            &template_vars,
        )
    }

    /// Close the current group, ending items left open
    pub fn end_group(&mut self) -> Result<String> {
        let mut out = String::new();
        while self.states.is(F::ITEM) {
            tracing::debug!(item = F::ITEM, "closing item left open in group");
            out.push_str(&self.end(Content::Empty, Options::new())?);
        }
        out.push_str(&self.base.format(
            &format!("{}GroupEnd", F::ITEM),
            TemplateVars::new(),
            &Options::new(),
        )?);
        self.states.pop()?;
        Ok(out)
    }

    /// Open an item
    ///
    /// Inside a group the previous item is closed first. With a title, the
    /// header is rendered and the body opened (unless `body` is `false`).
    ///
    /// Options: `type` (default `default`), `collapsible` (group or
    /// configured default), `open` (default true outside groups),
    /// `<item>-count` to override the counter, `title` options of the
    /// title wrapper, `body`. Other options become attributes.
    pub fn create(&mut self, title: impl Into<Content>, mut options: Options) -> Result<String> {
        let title = title.into();
        let mut out = String::new();

        if self.states.is(F::ITEM) && self.states.get_bool("inGroup")? {
            out.push_str(&self.end(Content::Empty, Options::new())?);
        }

        let in_group = self.states.is(GROUP);
        let template_vars = options.take_options("templateVars");
        let body = options.take_bool("body", true);
        let kind = options
            .take_str("type")
            .unwrap_or_else(|| "default".to_string());
        let default_collapsible = if in_group {
            self.states.get_bool("groupCollapsible")?
        } else {
            F::settings(self.base.view.config()).collapsible
        };
        let collapsible = options.take_bool("collapsible", default_collapsible);
        let mut open = options.take_bool("open", !in_group);
        let count = options
            .take(&format!("{}-count", F::ITEM))
            .and_then(|value| value.as_u64())
            .and_then(|value| usize::try_from(value).ok())
            .unwrap_or(self.item_count);
        let title_options = options.take("title");

        self.item_count = count + 1;

        let mut group_id = Value::Bool(false);
        if in_group {
            let index = self.states.get_i64("groupCount")? + 1;
            self.states.set("groupCount", index)?;
            open = open || self.states.get("groupOpen")?.as_i64() == Some(index);
            group_id = self.states.get("groupId")?.clone();
        }

        out.push_str(&self.base.format(
            &format!("{}Start", F::ITEM),
            TemplateVars::new()
                .with("type", kind)
                .attrs(self.base.attrs(&options, &[])),
            &template_vars,
        )?);

        self.states.push(
            F::ITEM,
            state_map(json!({
                "bodyId": format!("collapse-{count}"),
                "headId": format!("heading-{count}"),
                "collapsible": collapsible,
                "open": open,
                "inGroup": in_group,
                "groupId": group_id,
            })),
        );

        if let Some(title) = title.text() {
            let mut header_options = Options::new();
            if let Some(title_options) = title_options {
                header_options.insert("title", title_options);
            }
            out.push_str(&self.header_part(Some(title), header_options)?);
            out.push_str(&self.sections.close_part(&self.base.templates, self.level())?);
            if body {
                out.push_str(&self.body_part(None, Options::new())?);
            }
        }

        Ok(out)
    }

    /// Close the current item, with an optional footer
    pub fn end(&mut self, footer: impl Into<Content>, options: Options) -> Result<String> {
        let footer = footer.into();
        let mut out = self.sections.close_part(&self.base.templates, self.level())?;
        if let Some(text) = footer.text() {
            out.push_str(&self.footer_part(Some(text), options)?);
        }
        out.push_str(&self.base.format(
            &format!("{}End", F::ITEM),
            TemplateVars::new(),
            &Options::new(),
        )?);
        self.states.pop()?;
        Ok(out)
    }

    /// Header part
    ///
    /// With content, the content is written into the header; it goes through
    /// the `i:name` shorthand and is escaped unless `escape` is `false` or an
    /// icon was injected. Panels also accept a `title` option: `false` to
    /// write the content bare, or attributes of the title wrapper.
    pub fn header(&mut self, content: impl Into<Content>, options: Options) -> Result<String> {
        let content = content.into();
        self.header_part(content.text(), options)
    }

    /// Title inside the body, opening the body first when needed
    pub fn title(&mut self, text: &str, mut options: Options) -> Result<String> {
        let mut out = String::new();
        if self.sections.current(self.level()) != Some("body") {
            out.push_str(&self.body_part(None, Options::new())?);
        }
        let template_vars = options.take_options("templateVars");
        out.push_str(&self.base.format(
            "title",
            TemplateVars::new()
                .with("content", text)
                .attrs(self.base.attrs(&options, &[])),
            &template_vars,
        )?);
        Ok(out)
    }

    /// Body part; with content, the body is closed right away
    pub fn body(&mut self, content: impl Into<Content>, options: Options) -> Result<String> {
        let content = content.into();
        self.body_part(content.text(), options)
    }

    /// Footer part; with content, the footer is closed right away
    pub fn footer(&mut self, content: impl Into<Content>, options: Options) -> Result<String> {
        let content = content.into();
        self.footer_part(content.text(), options)
    }

    fn level(&self) -> usize {
        self.states.len()
    }

    fn item_bool(&self, key: &str) -> Result<bool> {
        if self.states.is(F::ITEM) {
            self.states.get_bool(key)
        } else {
            Ok(false)
        }
    }

    fn item_str(&self, key: &str) -> Result<String> {
        if self.states.is(F::ITEM) {
            Ok(self.states.get_str(key)?.unwrap_or_default().to_string())
        } else {
            Ok(String::new())
        }
    }

    fn header_part(&mut self, title: Option<&str>, mut options: Options) -> Result<String> {
        let template_vars = options.take_options("templateVars");
        let title_option = options.take("title");
        let (title, converted) = match title {
            Some(title) => {
                let (title, converted) = self.base.easy_icon(title, &mut options);
                (Some(title), converted)
            }
            None => {
                options.take("easyIcon");
                (None, false)
            }
        };
        let mut escape = options.take_bool("escape", !converted);
        let level = self.level();

        let (open_html, title) = if self.item_bool("collapsible")? {
            let attrs = options.with("id", self.item_str("headId")?);
            let open_html = self.base.format(
                "headerCollapsibleStart",
                TemplateVars::new().attrs(self.base.attrs(&attrs, &[])),
                &template_vars,
            )?;
            let title = match title {
                Some(title) => Some(self.collapsible_link(&title, escape, &template_vars)?),
                None => None,
            };
            escape = false;
            (open_html, title)
        } else {
            let open_html = self.base.format(
                "headerStart",
                TemplateVars::new().attrs(self.base.attrs(&options, &[])),
                &template_vars,
            )?;
            (open_html, title)
        };

        let mut out =
            self.sections
                .open_part_with(&self.base.templates, level, "header", open_html, None)?;

        if let Some(title) = title {
            let title = if escape { escape_html(&title) } else { title };
            match (F::TITLE_WRAP, title_option) {
                (_, Some(Value::Bool(false))) | (None, _) => out.push_str(&title),
                (Some(wrapper), title_option) => {
                    let mut title_options = title_option.map(Options::from).unwrap_or_default();
                    let title_vars = title_options.take_options("templateVars");
                    out.push_str(&self.base.format(
                        wrapper,
                        TemplateVars::new()
                            .with("content", title)
                            .attrs(self.base.attrs(&title_options, &[])),
                        &title_vars,
                    )?);
                    out.push_str(&self.sections.close_part(&self.base.templates, level)?);
                }
            }
        }

        Ok(out)
    }

    fn collapsible_link(&self, title: &str, escape: bool, template_vars: &Options) -> Result<String> {
        let content = if escape {
            escape_html(title)
        } else {
            title.to_string()
        };
        let mut attrs = Options::new();
        if self.item_bool("inGroup")? {
            let group_id = self.states.get("groupId")?;
            if let Some(group_id) = group_id.as_str() {
                attrs.insert("data-parent", format!("#{group_id}"));
            }
        }
        self.base.format(
            "headerCollapsibleLink",
            TemplateVars::new()
                .with("expanded", self.item_bool("open")?.to_string())
                .with("target", self.item_str("bodyId")?)
                .with("content", content)
                .attrs(self.base.attrs(&attrs, &[])),
            template_vars,
        )
    }

    fn body_part(&mut self, content: Option<&str>, mut options: Options) -> Result<String> {
        let template_vars = options.take_options("templateVars");
        let level = self.level();
        let plain = self.base.format(
            "bodyStart",
            TemplateVars::new().attrs(self.base.attrs(&options, &[])),
            &template_vars,
        )?;

        let wrapper = if self.item_bool("collapsible")? {
            let class = if self.item_bool("open")? { F::OPEN_CLASS } else { "" };
            let attrs = Options::new()
                .with("id", self.item_str("bodyId")?)
                .with("class", class);
            Some(
                TemplateVars::from_options(&template_vars).extend(
                    TemplateVars::new()
                        .with("headId", self.item_str("headId")?)
                        .attrs(self.base.attrs(&attrs, &[])),
                ),
            )
        } else {
            None
        };

        let mut out = self.sections.open_part_with(
            &self.base.templates,
            level,
            "body",
            plain,
            wrapper.as_ref(),
        )?;
        if let Some(content) = content {
            out.push_str(content);
            out.push_str(&self.sections.close_part(&self.base.templates, level)?);
        }
        Ok(out)
    }

    fn footer_part(&mut self, content: Option<&str>, mut options: Options) -> Result<String> {
        let template_vars = options.take_options("templateVars");
        let level = self.level();
        let vars = TemplateVars::from_options(&template_vars)
            .extend(TemplateVars::new().attrs(self.base.attrs(&options, &[])));
        let mut out = self
            .sections
            .open_part(&self.base.templates, level, "footer", &vars, None)?;
        if let Some(content) = content {
            out.push_str(content);
            out.push_str(&self.sections.close_part(&self.base.templates, level)?);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BootstrapError;
    use pretty_assertions::assert_eq;

    fn cards() -> CardHelper {
        View::default().card()
    }

    fn panels() -> PanelHelper {
        View::default().panel()
    }

    #[test]
    fn test_card_with_title() {
        let mut card = cards();
        let mut out = card.create("Title", Options::new()).unwrap();
        out.push_str("Content");
        out.push_str(&card.end(Content::Empty, Options::new()).unwrap());
        assert_eq!(
            out,
            concat!(
                r#"<div class="card card-default"><div class="card-header">Title</div>"#,
                r#"<div class="card-body">Content</div></div>"#
            )
        );
        assert!(card.is_closed());
    }

    #[test]
    fn test_card_title_escaped_and_icon() {
        let mut card = cards();
        let out = card.create("<b>Bold</b>", Options::new()).unwrap();
        assert!(out.contains("&lt;b&gt;Bold&lt;/b&gt;"));
        card.end(Content::Empty, Options::new()).unwrap();

        let out = card.create("i:star <b>Star</b>", Options::new()).unwrap();
        assert!(out.contains(r#"glyphicon-star"></i> <b>Star</b>"#));
    }

    #[test]
    fn test_card_parts_and_footer() {
        let mut card = cards();
        let mut out = card.create(Content::Empty, Options::new().with("type", "primary")).unwrap();
        out.push_str(&card.header("Header", Options::new().with("class", "h")).unwrap());
        out.push_str(&card.body("Body", Options::new()).unwrap());
        out.push_str(&card.end("Footer", Options::new()).unwrap());
        assert_eq!(
            out,
            concat!(
                r#"<div class="card card-primary"><div class="card-header h">Header</div>"#,
                r#"<div class="card-body">Body</div>"#,
                r#"<div class="card-footer">Footer</div></div>"#
            )
        );
    }

    #[test]
    fn test_card_title_opens_body() {
        let mut card = cards();
        let mut out = card.create(Content::Empty, Options::new()).unwrap();
        out.push_str(&card.title("Inner", Options::new()).unwrap());
        out.push_str(&card.end(Content::Empty, Options::new()).unwrap());
        assert_eq!(
            out,
            concat!(
                r#"<div class="card card-default"><div class="card-body">"#,
                r#"<h4 class="card-title">Inner</h4></div></div>"#
            )
        );
    }

    #[test]
    fn test_collapsible_card_markup() {
        let mut card = cards();
        let mut out = card
            .create("Title", Options::new().with("collapsible", true))
            .unwrap();
        out.push_str(&card.end(Content::Empty, Options::new()).unwrap());
        assert_eq!(
            out,
            concat!(
                r#"<div class="card card-default">"#,
                r#"<div class="card-header" role="tab" id="heading-0"><h5 class="mb-0">"#,
                r##"<a role="button" data-toggle="collapse" href="#collapse-0" aria-expanded="true" aria-controls="collapse-0">Title</a>"##,
                r#"</h5></div>"#,
                r#"<div class="collapse show" role="tabpanel" aria-labelledby="heading-0" id="collapse-0">"#,
                r#"<div class="card-body"></div></div></div>"#
            )
        );
    }

    #[test]
    fn test_group_ids_and_counter_continuity() {
        let mut card = cards();
        let mut out = card.start_group(Options::new()).unwrap();
        for title in ["A", "B", "C"] {
            out.push_str(&card.create(title, Options::new()).unwrap());
        }
        out.push_str(&card.end_group().unwrap());
        for n in 0..3 {
            assert!(out.contains(&format!(r#"id="heading-{n}""#)));
            assert!(out.contains(&format!(r#"id="collapse-{n}""#)));
        }
        assert_eq!(out.matches(r##"data-parent="#cardGroup-1""##).count(), 3);
        assert_eq!(out.matches(r#"aria-expanded="true""#).count(), 1);
        assert_eq!(out.matches(r#"class="collapse show""#).count(), 1);

        let single = card
            .create("D", Options::new().with("collapsible", true))
            .unwrap();
        assert!(single.contains(r#"id="heading-3""#));
        assert!(!single.contains("data-parent"));
        card.end(Content::Empty, Options::new()).unwrap();
        assert!(card.is_closed());
    }

    #[test]
    fn test_group_open_index() {
        let mut card = cards();
        let mut out = card
            .start_group(Options::new().with("open", 1).with("id", "faq"))
            .unwrap();
        assert_eq!(out, r#"<div role="tablist" id="faq">"#);
        out.push_str(&card.create("A", Options::new()).unwrap());
        out.push_str(&card.create("B", Options::new()).unwrap());
        out.push_str(&card.end_group().unwrap());
        assert!(out.contains(r##"href="#collapse-0" aria-expanded="false""##));
        assert!(out.contains(r##"href="#collapse-1" aria-expanded="true""##));
        assert!(out.contains(r##"data-parent="#faq""##));
    }

    #[test]
    fn test_group_not_collapsible() {
        let mut card = cards();
        let mut out = card
            .start_group(Options::new().with("collapsible", false))
            .unwrap();
        out.push_str(&card.create("A", Options::new()).unwrap());
        out.push_str(&card.end_group().unwrap());
        assert_eq!(
            out,
            concat!(
                r#"<div role="tablist" id="cardGroup-1"><div class="card card-default">"#,
                r#"<div class="card-header">A</div><div class="card-body"></div></div></div>"#
            )
        );
    }

    #[test]
    fn test_configured_collapsible_default() {
        let mut config = BootstrapConfig::default();
        config.card.collapsible = true;
        let mut card = View::new(config).card();
        let out = card.create("A", Options::new()).unwrap();
        assert!(out.contains(r#"role="tab""#));
    }

    #[test]
    fn test_count_override() {
        let mut card = cards();
        let out = card
            .create("A", Options::new().with("collapsible", true).with("card-count", 7))
            .unwrap();
        assert!(out.contains(r#"id="heading-7""#));
        card.end(Content::Empty, Options::new()).unwrap();
        let out = card
            .create("B", Options::new().with("collapsible", true))
            .unwrap();
        assert!(out.contains(r#"id="heading-8""#));
    }

    #[test]
    fn test_nested_card_in_body() {
        let mut card = cards();
        let mut out = card.create("Outer", Options::new()).unwrap();
        out.push_str(&card.create("Inner", Options::new()).unwrap());
        out.push_str(&card.end(Content::Empty, Options::new()).unwrap());
        out.push_str(&card.end(Content::Empty, Options::new()).unwrap());
        assert_eq!(out.matches("<div").count(), out.matches("</div>").count());
        assert!(out.ends_with("</div></div></div></div>"));
        assert!(card.is_closed());
    }

    #[test]
    fn test_end_without_item_fails() {
        let mut card = cards();
        assert_eq!(
            card.end(Content::Empty, Options::new()).unwrap_err(),
            BootstrapError::EmptyStack
        );
        assert_eq!(card.end_group().unwrap_err(), BootstrapError::EmptyStack);
    }

    #[test]
    fn test_parts_outside_item_are_plain() {
        let mut card = cards();
        let out = card.body("Loose", Options::new()).unwrap();
        assert_eq!(out, r#"<div class="card-body">Loose</div>"#);
    }

    #[test]
    fn test_panel_title_wrapped_and_header_closed() {
        let mut panel = panels();
        let mut out = panel.create("Title", Options::new()).unwrap();
        out.push_str(&panel.end(Content::Empty, Options::new()).unwrap());
        assert_eq!(
            out,
            concat!(
                r#"<div class="panel panel-default"><div class="panel-heading">"#,
                r#"<h4 class="panel-title">Title</h4></div><div class="panel-body"></div></div>"#
            )
        );
    }

    #[test]
    fn test_panel_header_title_option() {
        let mut panel = panels();
        panel.create(Content::Empty, Options::new()).unwrap();
        let out = panel
            .header("Bare", Options::new().with("title", false))
            .unwrap();
        assert_eq!(out, r#"<div class="panel-heading">Bare"#);

        let out = panel
            .header("Big", Options::new().with("title", json!({"class": "big"})))
            .unwrap();
        assert_eq!(
            out,
            r#"</div><div class="panel-heading"><h4 class="panel-title big">Big</h4></div>"#
        );
    }

    #[test]
    fn test_panel_group_uses_in_class() {
        let mut panel = panels();
        let mut out = panel.start_group(Options::new()).unwrap();
        out.push_str(&panel.create("A", Options::new()).unwrap());
        out.push_str(&panel.end_group().unwrap());
        assert!(out.starts_with(
            r#"<div class="panel-group" role="tablist" aria-multiselectable="true" id="panelGroup-1">"#
        ));
        assert!(out.contains(r#"<div class="panel-collapse collapse in" role="tabpanel""#));
        assert!(out.contains(
            r##"<h4 class="panel-title"><a role="button" data-toggle="collapse" href="#collapse-0""##
        ));
    }
}
