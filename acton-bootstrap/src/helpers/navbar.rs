//! Navigation bars with nested dropdown menus
//!
//! The bar itself and every open menu are frames: `begin_menu()` at the top
//! level opens the navigation list, inside a menu it opens a dropdown.
//! Links pick their template from the depth of the innermost menu and are
//! marked active when they point to the current page.

use serde_json::{json, Value};

use crate::error::Result;
use crate::state::{state_map, StackedStates};
use crate::template::{add_class, escape_html, Options, StringTemplate, TemplateVars};
use crate::view::View;

use super::{Content, HelperBase};

const TEMPLATES: &[(&str, &str)] = &[
    ("navbarStart", r#"<nav class="navbar{{attrs.class}}"{{attrs}}>{{containerStart}}{{header}}{{responsiveStart}}"#),
    ("navbarEnd", "{{responsiveEnd}}{{containerEnd}}</nav>"),
    ("containerStart", r#"<div class="container{{attrs.class}}"{{attrs}}>"#),
    ("containerEnd", "</div>"),
    ("responsiveStart", r#"<div class="collapse navbar-collapse{{attrs.class}}" id="{{id}}"{{attrs}}>"#),
    ("responsiveEnd", "</div>"),
    ("header", "{{brand}}{{toggleButton}}"),
    ("toggleButton", r##"<button type="button" class="navbar-toggler" data-toggle="collapse" data-target="#{{id}}" aria-controls="{{id}}" aria-label="{{label}}" aria-expanded="false"><span class="navbar-toggler-icon"></span></button>"##),
    ("brand", r#"<a class="navbar-brand{{attrs.class}}" href="{{url}}"{{attrs}}>{{content}}</a>"#),
    ("brandImage", r#"<img alt="{{brandname}}" src="{{src}}"{{attrs}} />"#),
    ("dropdownMenuStart", r#"<div class="dropdown-menu{{attrs.class}}"{{attrs}}>"#),
    ("dropdownMenuEnd", "</div>"),
    ("dropdownLink", r#"<a href="{{url}}" class="nav-link dropdown-toggle{{attrs.class}}" data-toggle="dropdown" role="button" aria-haspopup="true" aria-expanded="false"{{attrs}}>{{content}}</a>"#),
    ("innerMenuStart", r#"<li class="nav-item dropdown{{attrs.class}}"{{attrs}}>{{dropdownLink}}{{dropdownMenuStart}}"#),
    ("innerMenuEnd", "{{dropdownMenuEnd}}</li>"),
    ("innerMenuItem", "{{link}}"),
    ("innerMenuItemLink", r#"<a href="{{url}}" class="dropdown-item{{attrs.class}}"{{attrs}}>{{content}}</a>"#),
    ("innerMenuItemActive", "{{link}}"),
    ("innerMenuItemLinkActive", r#"<a href="{{url}}" class="dropdown-item active{{attrs.class}}"{{attrs}}>{{content}}</a>"#),
    ("innerMenuItemDivider", r#"<div role="separator" class="dropdown-divider{{attrs.class}}"{{attrs}}></div>"#),
    ("innerMenuItemHeader", r#"<h6 class="dropdown-header{{attrs.class}}"{{attrs}}>{{content}}</h6>"#),
    ("outerMenuStart", r#"<ul class="navbar-nav mr-auto{{attrs.class}}"{{attrs}}>"#),
    ("outerMenuEnd", "</ul>"),
    ("outerMenuItem", r#"<li class="nav-item{{attrs.class}}"{{attrs}}>{{link}}</li>"#),
    ("outerMenuItemLink", r#"<a href="{{url}}" class="nav-link{{attrs.class}}"{{attrs}}>{{content}}</a>"#),
    ("outerMenuItemActive", r#"<li class="nav-item active{{attrs.class}}"{{attrs}}>{{link}}</li>"#),
    ("outerMenuItemLinkActive", r#"<a href="{{url}}" class="nav-link{{attrs.class}}"{{attrs}}>{{content}}</a>"#),
    ("navbarText", r#"<span class="navbar-text{{attrs.class}}"{{attrs}}>{{content}}</span>"#),
];

const NAVBAR: &str = "navbar";
const MENU: &str = "menu";

/// Brand shown at the start of the bar
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Brand {
    /// No brand
    #[default]
    None,
    /// Text linking to `/`
    Text(String),
    /// Text or markup linking to `url`
    Link {
        /// Brand content
        name: String,
        /// Target route
        url: String,
        /// Attributes of the brand link
        options: Options,
    },
    /// Image linking to `url`
    Image {
        /// Image source
        src: String,
        /// Alternative text
        alt: String,
        /// Target route
        url: String,
    },
}

impl From<&str> for Brand {
    fn from(name: &str) -> Self {
        Self::Text(name.to_string())
    }
}

impl From<String> for Brand {
    fn from(name: String) -> Self {
        Self::Text(name)
    }
}

/// Navbar helper
#[derive(Debug, Clone)]
pub struct NavbarHelper {
    base: HelperBase,
    states: StackedStates,
}

impl NavbarHelper {
    /// Helper with the default templates and the `navbar` overrides
    #[must_use]
    pub fn new(view: &View) -> Self {
        Self {
            base: HelperBase::new(view, "navbar", TEMPLATES),
            states: StackedStates::with_defaults([
                (NAVBAR, state_map(json!({"responsive": false, "container": false}))),
                (MENU, state_map(json!({"level": 1}))),
            ]),
        }
    }

    /// Template table, for customization
    pub fn templates_mut(&mut self) -> &mut StringTemplate {
        &mut self.base.templates
    }

    /// Open a navbar
    ///
    /// Options:
    /// - `id` of the collapsible part (default `navbar`)
    /// - `theme`: color scheme, `["dark", "primary"]` for a scheme with
    ///   another background, `false` for none (default `light`)
    /// - `fixed`: `true`, `top` or `bottom`
    /// - `sticky`: stick to the top
    /// - `collapse`: breakpoint below which the bar collapses, `true` to
    ///   always collapse, `false` to never collapse (default `lg`)
    /// - `container`: wrap the content in a container
    ///
    /// # Examples
    ///
    /// ```rust
    /// use acton_bootstrap::prelude::*;
    ///
    /// let mut navbar = View::default().navbar();
    /// let mut html = navbar.create("Acme", Options::new().with("collapse", false))?;
    /// html.push_str(&navbar.begin_menu(Content::Empty, None, Options::new())?);
    /// html.push_str(&navbar.link("Home", "/", Options::new())?);
    /// html.push_str(&navbar.end()?);
    ///
    /// assert!(html.contains(r#"<li class="nav-item active"><a href="/" class="nav-link">Home</a></li>"#));
    /// assert!(html.ends_with("</ul></nav>"));
    /// # Ok::<(), acton_bootstrap::error::BootstrapError>(())
    /// ```
    pub fn create(&mut self, brand: impl Into<Brand>, mut options: Options) -> Result<String> {
        let template_vars = options.take_options("templateVars");
        let id = options.take_str("id").unwrap_or_else(|| NAVBAR.to_string());
        let fixed = options.take("fixed").unwrap_or(Value::Bool(false));
        let collapse = options.take("collapse").unwrap_or_else(|| json!("lg"));
        let sticky = options.take_bool("sticky", false);
        let theme = options.take("theme").unwrap_or_else(|| json!("light"));
        let container = options.take_bool("container", false);
        let responsive = collapse != Value::Bool(false);

        if let Some((scheme, background)) = theme_classes(&theme) {
            options = add_class(&options, format!("navbar-{scheme}"));
            if let Some(background) = background {
                options = add_class(&options, format!("bg-{background}"));
            }
        }
        match fixed {
            Value::Bool(true) => options = add_class(&options, "fixed-top"),
            Value::String(position) => options = add_class(&options, format!("fixed-{position}")),
            _ => {}
        }
        if sticky {
            options = add_class(&options, "sticky-top");
        }

        let brand = self.brand(&brand.into(), &template_vars)?;

        let mut toggle_button = String::new();
        if responsive {
            toggle_button = self.base.format(
                "toggleButton",
                TemplateVars::new()
                    .with("label", self.base.view.translate("Toggle navigation"))
                    .with("id", id.as_str()),
                &Options::new(),
            )?;
            if let Value::String(breakpoint) = &collapse {
                options = add_class(&options, format!("navbar-expand-{breakpoint}"));
            }
        } else {
            options = add_class(&options, "navbar-expand");
        }

        let container_start = if container {
            self.base
                .format("containerStart", TemplateVars::new().attrs(""), &template_vars)?
        } else {
            String::new()
        };
        let responsive_start = if responsive {
            self.base.format(
                "responsiveStart",
                TemplateVars::new().with("id", id.as_str()).attrs(""),
                &template_vars,
            )?
        } else {
            String::new()
        };
        let header = if responsive || brand.is_some() {
            self.base.format(
                "header",
                TemplateVars::new()
                    .with("toggleButton", toggle_button)
                    .with("brand", brand.unwrap_or_default()),
                &Options::new(),
            )?
        } else {
            String::new()
        };

        self.states.push(
            NAVBAR,
            state_map(json!({"responsive": responsive, "container": container})),
        );
        self.base.format(
            "navbarStart",
            TemplateVars::new()
                .with("header", header)
                .with("responsiveStart", responsive_start)
                .with("containerStart", container_start)
                .attrs(self.base.attrs(&options, &[])),
            &template_vars,
        )
    }

    /// Link in the current menu
    ///
    /// The `active` option forces the state; otherwise the link is active
    /// when it points to the current page (unless disabled in the
    /// configuration). At the top level, `options` go to the list item;
    /// inside a dropdown they go to the link.
    pub fn link(&self, name: &str, url: &str, options: Options) -> Result<String> {
        self.link_with(name, url, options, Options::new())
    }

    /// Same as [`link`](Self::link) with separate attributes for the `<a>`
    /// element of top level links
    pub fn link_with(
        &self,
        name: &str,
        url: &str,
        mut options: Options,
        link_options: Options,
    ) -> Result<String> {
        let url = self.base.view.urls().build(url);
        let active = match options.take("active") {
            Some(Value::Bool(active)) => active,
            _ => {
                self.base.view.config().navbar.auto_active_link
                    && self.base.view.urls().urls_equivalent(&url, &self.base.view.urls().current())
            }
        };
        let suffix = if active { "Active" } else { "" };
        let level = if self.menu_level()? > 1 { "inner" } else { "outer" };

        let (mut options, mut link_options) = if level == "inner" {
            (Options::new(), options)
        } else {
            (options, link_options)
        };
        let template_vars = options.take_options("templateVars");
        let link_vars = link_options.take_options("templateVars");

        let link = self.base.format(
            &format!("{level}MenuItemLink{suffix}"),
            TemplateVars::new()
                .with("content", name)
                .with("url", escape_html(&url))
                .attrs(self.base.attrs(&link_options, &[])),
            &link_vars,
        )?;
        self.base.format(
            &format!("{level}MenuItem{suffix}"),
            TemplateVars::new()
                .with("link", link)
                .attrs(self.base.attrs(&options, &[])),
            &template_vars,
        )
    }

    /// Divider inside a dropdown
    pub fn divider(&self, mut options: Options) -> Result<String> {
        let template_vars = options.take_options("templateVars");
        self.base.format(
            "innerMenuItemDivider",
            TemplateVars::new().attrs(self.base.attrs(&options, &[])),
            &template_vars,
        )
    }

    /// Header inside a dropdown
    pub fn header(&self, name: &str, mut options: Options) -> Result<String> {
        let template_vars = options.take_options("templateVars");
        self.base.format(
            "innerMenuItemHeader",
            TemplateVars::new()
                .with("content", name)
                .attrs(self.base.attrs(&options, &[])),
            &template_vars,
        )
    }

    /// Plain text in the bar
    pub fn text(&self, text: &str, mut options: Options) -> Result<String> {
        let template_vars = options.take_options("templateVars");
        self.base.format(
            "navbarText",
            TemplateVars::new()
                .with("content", text)
                .attrs(self.base.attrs(&options, &[])),
            &template_vars,
        )
    }

    /// Open a menu
    ///
    /// At the top level this opens the navigation list and `name`/`url` are
    /// ignored; inside a menu it opens a dropdown toggled by a link with
    /// `name` as its content.
    pub fn begin_menu(
        &mut self,
        name: impl Into<Content>,
        url: Option<&str>,
        options: Options,
    ) -> Result<String> {
        self.begin_menu_with(name, url, options, Options::new(), Options::new())
    }

    /// Same as [`begin_menu`](Self::begin_menu) with attributes for the
    /// dropdown toggle link and the dropdown list
    pub fn begin_menu_with(
        &mut self,
        name: impl Into<Content>,
        url: Option<&str>,
        mut options: Options,
        mut link_options: Options,
        mut list_options: Options,
    ) -> Result<String> {
        let level = self.menu_level()?;
        let template_vars = options.take_options("templateVars");
        let mut vars = TemplateVars::new().attrs(self.base.attrs(&options, &[]));

        let template = if level == 0 {
            "outerMenuStart"
        } else {
            let url = url.map_or_else(|| "#".to_string(), |url| self.base.view.urls().build(url));
            let link_vars = link_options.take_options("templateVars");
            let list_vars = list_options.take_options("templateVars");
            let dropdown_link = self.base.format(
                "dropdownLink",
                TemplateVars::new()
                    .with("content", name.into().text().unwrap_or_default())
                    .with("url", escape_html(&url))
                    .attrs(self.base.attrs(&link_options, &[])),
                &link_vars,
            )?;
            let dropdown_start = self.base.format(
                "dropdownMenuStart",
                TemplateVars::new().attrs(self.base.attrs(&list_options, &[])),
                &list_vars,
            )?;
            vars.set("dropdownLink", dropdown_link);
            vars.set("dropdownMenuStart", dropdown_start);
            "innerMenuStart"
        };

        self.states.push(MENU, state_map(json!({"level": level + 1})));
        self.base.format(template, vars, &template_vars)
    }

    /// Close the innermost menu
    pub fn end_menu(&mut self) -> Result<String> {
        let frame = self.states.pop()?;
        let level = frame.state.get("level").and_then(Value::as_i64).unwrap_or(1);
        if level > 1 {
            let dropdown_end =
                self.base
                    .format("dropdownMenuEnd", TemplateVars::new(), &Options::new())?;
            self.base.format(
                "innerMenuEnd",
                TemplateVars::new().with("dropdownMenuEnd", dropdown_end),
                &Options::new(),
            )
        } else {
            self.base.format("outerMenuEnd", TemplateVars::new(), &Options::new())
        }
    }

    /// Close the navbar, with any menu left open
    pub fn end(&mut self) -> Result<String> {
        let mut out = String::new();
        while self.states.is(MENU) {
            tracing::debug!("closing navbar menu left open");
            out.push_str(&self.end_menu()?);
        }
        let frame = self.states.pop()?;
        let flag = |key: &str| frame.state.get(key).and_then(Value::as_bool).unwrap_or(false);

        let container_end = if flag("container") {
            self.base.format("containerEnd", TemplateVars::new(), &Options::new())?
        } else {
            String::new()
        };
        let responsive_end = if flag("responsive") {
            self.base.format("responsiveEnd", TemplateVars::new(), &Options::new())?
        } else {
            String::new()
        };
        out.push_str(&self.base.format(
            "navbarEnd",
            TemplateVars::new()
                .with("containerEnd", container_end)
                .with("responsiveEnd", responsive_end),
            &Options::new(),
        )?);
        Ok(out)
    }

    fn menu_level(&self) -> Result<i64> {
        if self.states.is(MENU) {
            self.states.get_i64("level")
        } else {
            Ok(0)
        }
    }

    fn brand(&self, brand: &Brand, template_vars: &Options) -> Result<Option<String>> {
        let (content, url, options) = match brand {
            Brand::None => return Ok(None),
            Brand::Text(name) => (name.clone(), "/".to_string(), Options::new()),
            Brand::Link { name, url, options } => (name.clone(), url.clone(), options.clone()),
            Brand::Image { src, alt, url } => {
                let image = self.base.format(
                    "brandImage",
                    TemplateVars::new()
                        .with("brandname", escape_html(alt))
                        .with("src", escape_html(src))
                        .attrs(""),
                    &Options::new(),
                )?;
                (image, url.clone(), Options::new())
            }
        };
        let url = self.base.view.urls().build(&url);
        self.base
            .format(
                "brand",
                TemplateVars::new()
                    .with("content", content)
                    .with("url", escape_html(&url))
                    .attrs(self.base.attrs(&options, &[])),
                template_vars,
            )
            .map(Some)
    }
}

/// Color scheme and background classes from the `theme` option
fn theme_classes(theme: &Value) -> Option<(String, Option<String>)> {
    match theme {
        Value::String(scheme) => Some((scheme.clone(), Some(scheme.clone()))),
        Value::Array(parts) => {
            let scheme = parts.first()?.as_str()?.to_string();
            let background = match parts.get(1) {
                None | Some(Value::Null) => Some(scheme.clone()),
                Some(Value::String(background)) => Some(background.clone()),
                Some(_) => None,
            };
            Some((scheme, background))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BootstrapConfig;
    use crate::error::BootstrapError;
    use crate::host::{MockUrlResolver, StaticUrls};
    use pretty_assertions::assert_eq;

    fn navbar(current: &str) -> NavbarHelper {
        View::default().with_urls(StaticUrls::new("", current)).navbar()
    }

    #[test]
    fn test_default_create() {
        let mut nav = navbar("/");
        let out = nav.create("Brand", Options::new()).unwrap();
        assert_eq!(
            out,
            concat!(
                r#"<nav class="navbar navbar-light bg-light navbar-expand-lg">"#,
                r#"<a class="navbar-brand" href="/">Brand</a>"#,
                r##"<button type="button" class="navbar-toggler" data-toggle="collapse" data-target="#navbar" aria-controls="navbar" aria-label="Toggle navigation" aria-expanded="false"><span class="navbar-toggler-icon"></span></button>"##,
                r#"<div class="collapse navbar-collapse" id="navbar">"#
            )
        );
        assert_eq!(nav.end().unwrap(), "</div></nav>");
    }

    #[test]
    fn test_theme_fixed_sticky_container() {
        let mut nav = navbar("/");
        let out = nav
            .create(
                Brand::None,
                Options::new()
                    .with("theme", json!(["dark", "primary"]))
                    .with("fixed", "bottom")
                    .with("sticky", true)
                    .with("collapse", false)
                    .with("container", true),
            )
            .unwrap();
        assert_eq!(
            out,
            r#"<nav class="navbar navbar-dark bg-primary fixed-bottom sticky-top navbar-expand"><div class="container">"#
        );
        assert_eq!(nav.end().unwrap(), "</div></nav>");
    }

    #[test]
    fn test_theme_without_background() {
        assert_eq!(theme_classes(&json!(false)), None);
        assert_eq!(
            theme_classes(&json!(["dark", false])),
            Some(("dark".to_string(), None))
        );
        assert_eq!(
            theme_classes(&json!(["dark"])),
            Some(("dark".to_string(), Some("dark".to_string())))
        );
    }

    #[test]
    fn test_brand_image() {
        let mut nav = navbar("/");
        let out = nav
            .create(
                Brand::Image {
                    src: "/logo.png".to_string(),
                    alt: "Acme".to_string(),
                    url: "/home".to_string(),
                },
                Options::new().with("collapse", false).with("theme", false),
            )
            .unwrap();
        assert_eq!(
            out,
            r#"<nav class="navbar navbar-expand"><a class="navbar-brand" href="/home"><img alt="Acme" src="/logo.png" /></a>"#
        );
    }

    #[test]
    fn test_menus_and_active_links() {
        let mut nav = navbar("/users?page=2");
        nav.create(Brand::None, Options::new().with("collapse", false)).unwrap();

        let mut out = nav.begin_menu(Content::Empty, None, Options::new()).unwrap();
        out.push_str(&nav.link("Users", "/users", Options::new()).unwrap());
        out.push_str(&nav.link("Posts", "/posts", Options::new()).unwrap());
        out.push_str(&nav.begin_menu("More", None, Options::new()).unwrap());
        out.push_str(&nav.header("Section", Options::new()).unwrap());
        out.push_str(&nav.link("Users", "/users/", Options::new()).unwrap());
        out.push_str(&nav.divider(Options::new()).unwrap());
        out.push_str(&nav.link("About", "/about", Options::new().with("class", "x")).unwrap());
        out.push_str(&nav.end_menu().unwrap());
        out.push_str(&nav.end_menu().unwrap());

        assert_eq!(
            out,
            concat!(
                r#"<ul class="navbar-nav mr-auto">"#,
                r#"<li class="nav-item active"><a href="/users" class="nav-link">Users</a></li>"#,
                r#"<li class="nav-item"><a href="/posts" class="nav-link">Posts</a></li>"#,
                r#"<li class="nav-item dropdown">"#,
                r##"<a href="#" class="nav-link dropdown-toggle" data-toggle="dropdown" role="button" aria-haspopup="true" aria-expanded="false">More</a>"##,
                r#"<div class="dropdown-menu">"#,
                r#"<h6 class="dropdown-header">Section</h6>"#,
                r#"<a href="/users/" class="dropdown-item active">Users</a>"#,
                r#"<div role="separator" class="dropdown-divider"></div>"#,
                r#"<a href="/about" class="dropdown-item x">About</a>"#,
                r#"</div></li></ul>"#
            )
        );
    }

    #[test]
    fn test_forced_and_disabled_active() {
        let mut nav = navbar("/users");
        nav.create(Brand::None, Options::new()).unwrap();
        nav.begin_menu(Content::Empty, None, Options::new()).unwrap();
        let out = nav
            .link("Users", "/users", Options::new().with("active", false))
            .unwrap();
        assert!(!out.contains("active"));
        let out = nav
            .link("Other", "/other", Options::new().with("active", true))
            .unwrap();
        assert!(out.contains("nav-item active"));

        let mut config = BootstrapConfig::default();
        config.navbar.auto_active_link = false;
        let mut nav = View::new(config)
            .with_urls(StaticUrls::new("", "/users"))
            .navbar();
        nav.create(Brand::None, Options::new()).unwrap();
        nav.begin_menu(Content::Empty, None, Options::new()).unwrap();
        let out = nav.link("Users", "/users", Options::new()).unwrap();
        assert!(!out.contains("active"));
    }

    #[test]
    fn test_active_detection_uses_resolver() {
        let mut urls = MockUrlResolver::new();
        urls.expect_build().returning(|route| format!("/app{route}"));
        urls.expect_current().return_const("/app/users".to_string());
        urls.expect_urls_equivalent().returning(|a, b| a == b);

        let mut nav = View::default().with_urls(urls).navbar();
        nav.create(Brand::None, Options::new().with("collapse", false)).unwrap();
        nav.begin_menu(Content::Empty, None, Options::new()).unwrap();
        let out = nav.link("Users", "/users", Options::new()).unwrap();
        assert_eq!(
            out,
            r#"<li class="nav-item active"><a href="/app/users" class="nav-link">Users</a></li>"#
        );
    }

    #[test]
    fn test_end_closes_open_menus() {
        let mut nav = navbar("/");
        nav.create(Brand::None, Options::new().with("collapse", false)).unwrap();
        nav.begin_menu(Content::Empty, None, Options::new()).unwrap();
        nav.begin_menu("Drop", Some("/drop"), Options::new()).unwrap();
        assert_eq!(nav.end().unwrap(), "</div></li></ul></nav>");
        assert_eq!(nav.end().unwrap_err(), BootstrapError::EmptyStack);
    }
}
