//! Tab and pill navigation with their panes
//!
//! `create()` renders the navigation list and opens the content wrapper,
//! each `pane()` closes the previous pane of the same set, and `end()`
//! closes the last pane and the wrapper. A pane may contain another tab set.

use serde_json::{json, Value};

use crate::error::Result;
use crate::section::SectionTracker;
use crate::state::{state_map, StackedStates};
use crate::template::{add_class, escape_html, Options, StringTemplate, TemplateVars};
use crate::view::View;

use super::{Content, HelperBase};

const TEMPLATES: &[(&str, &str)] = &[
    ("tabHeadingStart", r#"<ul class="nav nav-{{type}}{{attrs.class}}" role="tablist"{{attrs}}>"#),
    ("tabHeadingEnd", "</ul>"),
    ("tabHeadingItem", r#"<li class="nav-item{{attrs.class}}"{{attrs}}>{{link}}</li>"#),
    ("tabHeadingLink", r##"<a class="nav-link{{attrs.class}}" id="{{paneId}}-tab" data-toggle="{{toggle}}" href="#{{paneId}}" role="tab" aria-controls="{{paneId}}" aria-selected="{{selected}}">{{content}}</a>"##),
    ("tabContentStart", r#"<div class="tab-content{{attrs.class}}"{{attrs}}>"#),
    ("tabContentEnd", "</div>"),
    ("tabPaneStart", r#"<div class="tab-pane{{attrs.class}}" id="{{paneId}}" role="tabpanel" aria-labelledby="{{paneId}}-tab"{{attrs}}>"#),
    ("tabPaneEnd", "</div>"),
];

const TABS: &str = "tabs";

/// Tab helper
#[derive(Debug, Clone)]
pub struct TabHelper {
    base: HelperBase,
    states: StackedStates,
    sections: SectionTracker,
    set_count: usize,
}

impl TabHelper {
    /// Helper with the default templates and the `tab` overrides
    #[must_use]
    pub fn new(view: &View) -> Self {
        Self {
            base: HelperBase::new(view, "tab", TEMPLATES),
            states: StackedStates::with_defaults([(
                TABS,
                state_map(json!({"id": "", "fade": true, "index": 0})),
            )]),
            sections: SectionTracker::new(),
            set_count: 0,
        }
    }

    /// Template table, for customization
    pub fn templates_mut(&mut self) -> &mut StringTemplate {
        &mut self.base.templates
    }

    /// Whether every tab set has been closed
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.states.is_empty() && !self.sections.has_open_section()
    }

    /// Render the navigation for `titles` and open the pane container
    ///
    /// Options:
    /// - `type`: `tabs` or `pills` (default `tabs`)
    /// - `fade`: fade panes in (default `true`)
    /// - `id`: prefix of the pane ids (default `tabs-<n>`)
    /// - `active`: index of the initially shown pane, from 0 (default 0)
    /// - `escape`: escape titles (default `true`)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use acton_bootstrap::prelude::*;
    ///
    /// let mut tabs = View::default().tabs();
    /// let mut html = tabs.create(&["Home", "Profile"], Options::new())?;
    /// html.push_str(&tabs.pane("Welcome", Options::new())?);
    /// html.push_str(&tabs.pane("Your profile", Options::new())?);
    /// html.push_str(&tabs.end()?);
    ///
    /// assert!(html.contains(r##"href="#tabs-1-2""##));
    /// assert!(tabs.is_closed());
    /// # Ok::<(), acton_bootstrap::error::BootstrapError>(())
    /// ```
    pub fn create<S: AsRef<str>>(&mut self, titles: &[S], mut options: Options) -> Result<String> {
        let template_vars = options.take_options("templateVars");
        let kind = options.take_str("type").unwrap_or_else(|| TABS.to_string());
        let fade = options.take_bool("fade", true);
        let escape = HelperBase::take_escape(&mut options, true);
        let active = options
            .take("active")
            .as_ref()
            .and_then(Value::as_u64)
            .unwrap_or_default();
        let icons = options.take_bool("easyIcon", self.base.view.config().easy_icon);
        self.set_count += 1;
        let id = options
            .take_str("id")
            .unwrap_or_else(|| format!("{TABS}-{}", self.set_count));
        let toggle = if kind == "pills" { "pill" } else { "tab" };

        let mut out = self.base.format(
            "tabHeadingStart",
            TemplateVars::new()
                .with("type", kind.as_str())
                .attrs(self.base.attrs(&options, &[])),
            &template_vars,
        )?;
        for (index, title) in (0_u64..).zip(titles) {
            let selected = index == active;
            let mut title_options = Options::new().with("easyIcon", icons);
            let (title, icon) = self.base.easy_icon(title.as_ref(), &mut title_options);
            let title = if escape && !icon { escape_html(&title) } else { title };
            let link_options = if selected {
                add_class(&Options::new(), "active")
            } else {
                Options::new()
            };
            let link = self.base.format(
                "tabHeadingLink",
                TemplateVars::new()
                    .with("content", title)
                    .with("paneId", format!("{id}-{}", index + 1))
                    .with("toggle", toggle)
                    .with("selected", selected.to_string())
                    .attrs(self.base.attrs(&link_options, &[])),
                &Options::new(),
            )?;
            out.push_str(&self.base.format(
                "tabHeadingItem",
                TemplateVars::new().with("link", link).attrs(""),
                &Options::new(),
            )?);
        }
        out.push_str(&self.base.format("tabHeadingEnd", TemplateVars::new(), &Options::new())?);
        out.push_str(&self.base.format(
            "tabContentStart",
            TemplateVars::new().attrs(""),
            &template_vars,
        )?);

        tracing::trace!(id = %id, panes = titles.len(), "open tab set");
        self.states.push(
            TABS,
            state_map(json!({"id": id, "fade": fade, "active": active, "index": 0})),
        );
        Ok(out)
    }

    /// Open the next pane, closing the previous one
    ///
    /// With text content the pane is written and closed right away.
    pub fn pane(&mut self, content: impl Into<Content>, mut options: Options) -> Result<String> {
        let template_vars = options.take_options("templateVars");
        let level = self.states.len();
        let index = self.states.get_i64("index")? + 1;
        self.states.set("index", index)?;
        let id = self.states.get_str("id")?.unwrap_or_default().to_string();
        let active = self.states.get("active")?.as_i64() == Some(index - 1);

        if self.states.get_bool("fade")? {
            options = add_class(&options, "fade");
            if active {
                options = add_class(&options, "show");
            }
        }
        if active {
            options = add_class(&options, "active");
        }

        let html = self.base.format(
            "tabPaneStart",
            TemplateVars::new()
                .with("paneId", format!("{id}-{index}"))
                .attrs(self.base.attrs(&options, &[])),
            &template_vars,
        )?;
        let mut out =
            self.sections
                .open_part_with(&self.base.templates, level, "tabPane", html, None)?;
        if let Some(text) = content.into().text() {
            out.push_str(text);
            out.push_str(&self.sections.close_part(&self.base.templates, level)?);
        }
        Ok(out)
    }

    /// Close the current tab set
    pub fn end(&mut self) -> Result<String> {
        let mut out = self
            .sections
            .close_part(&self.base.templates, self.states.len())?;
        let frame = self.states.pop()?;
        tracing::trace!(id = ?frame.state.get("id"), "close tab set");
        out.push_str(&self.base.format("tabContentEnd", TemplateVars::new(), &Options::new())?);
        Ok(out)
    }
}
