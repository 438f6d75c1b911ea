//! Open/close sequencing of named parts
//!
//! Composite widgets are streamed: `header()`, then caller content, then
//! `body()`, and so on. [`SectionTracker`] remembers which part is open so
//! that opening the next one first emits the closing markup of the previous
//! one, and so that `end()` can close whatever is left.
//!
//! Parts are opened at a *level* (the depth of the owning frame). Opening a
//! part only ever auto-closes the part open at the same level. Sections
//! pushed with [`SectionTracker::push_section`] nest instead and are closed
//! explicitly or by [`SectionTracker::clear_sections`].
//!
//! Part `name` renders `<name>Start` and `<name>End`. A part opened as
//! collapsible is wrapped with `<name>CollapsibleStart` (receiving the plain
//! markup as `{{<name>Start}}`) and `<name>CollapsibleEnd` (receiving
//! `{{<name>End}}`) when those templates exist.

use crate::error::Result;
use crate::template::{StringTemplate, TemplateVariant, TemplateVars};

#[derive(Debug, Clone, PartialEq, Eq)]
struct OpenSection {
    name: String,
    level: Option<usize>,
    collapsible: bool,
}

/// Stack of open parts and sections
#[derive(Debug, Clone, Default)]
pub struct SectionTracker {
    open: Vec<OpenSection>,
}

impl SectionTracker {
    /// Nothing open
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open part `name` at `level`, closing the part currently open there
    ///
    /// `collapsible` carries the variables of the collapsible wrapper; the
    /// plain markup is wrapped only if `<name>CollapsibleStart` exists.
    pub fn open_part(
        &mut self,
        templates: &StringTemplate,
        level: usize,
        name: &str,
        vars: &TemplateVars,
        collapsible: Option<&TemplateVars>,
    ) -> Result<String> {
        let plain = templates.format(&format!("{name}Start"), vars)?;
        self.open_part_with(templates, level, name, plain, collapsible)
    }

    /// Same as [`open_part`](Self::open_part) with pre-rendered open markup
    pub fn open_part_with(
        &mut self,
        templates: &StringTemplate,
        level: usize,
        name: &str,
        html: String,
        collapsible: Option<&TemplateVars>,
    ) -> Result<String> {
        let mut out = self.close_part(templates, level)?;

        let wrapper = TemplateVariant::COLLAPSIBLE.name(name, "Start");
        let html = match collapsible {
            Some(vars) if templates.contains(&wrapper) => {
                let vars = vars.clone().with(format!("{name}Start"), html);
                templates.format(&wrapper, &vars)?
            }
            _ => html,
        };

        self.open.push(OpenSection {
            name: name.to_string(),
            level: Some(level),
            collapsible: collapsible.is_some(),
        });
        out.push_str(&html);
        Ok(out)
    }

    /// Close the part open at `level`
    ///
    /// Returns an empty string when nothing is open there, so calling it
    /// twice in a row is harmless.
    pub fn close_part(&mut self, templates: &StringTemplate, level: usize) -> Result<String> {
        match self.open.last() {
            Some(top) if top.level == Some(level) => self.close_last_section(templates),
            _ => Ok(String::new()),
        }
    }

    /// Open a nested section that is never auto-closed by a sibling
    pub fn push_section(
        &mut self,
        templates: &StringTemplate,
        name: &str,
        vars: &TemplateVars,
    ) -> Result<String> {
        let html = templates.format(&format!("{name}Start"), vars)?;
        self.open.push(OpenSection {
            name: name.to_string(),
            level: None,
            collapsible: false,
        });
        Ok(html)
    }

    /// Close the innermost open part or section
    pub fn close_last_section(&mut self, templates: &StringTemplate) -> Result<String> {
        let Some(section) = self.open.pop() else {
            return Ok(String::new());
        };
        let end = format!("{}End", section.name);
        let plain = templates.format(&end, &TemplateVars::new())?;

        let wrapper = TemplateVariant::COLLAPSIBLE.name(&section.name, "End");
        if section.collapsible && templates.contains(&wrapper) {
            return templates.format(&wrapper, &TemplateVars::new().with(end, plain));
        }
        Ok(plain)
    }

    /// Close everything, innermost first
    pub fn clear_sections(&mut self, templates: &StringTemplate) -> Result<String> {
        let mut out = String::new();
        if !self.open.is_empty() {
            tracing::debug!(count = self.open.len(), "closing sections left open");
        }
        while self.has_open_section() {
            out.push_str(&self.close_last_section(templates)?);
        }
        Ok(out)
    }

    /// Name of the part open at `level`
    #[must_use]
    pub fn current(&self, level: usize) -> Option<&str> {
        self.open
            .last()
            .filter(|top| top.level == Some(level))
            .map(|top| top.name.as_str())
    }

    /// Name of the innermost open part or section
    #[must_use]
    pub fn innermost(&self) -> Option<&str> {
        self.open.last().map(|top| top.name.as_str())
    }

    /// Whether anything is open
    #[must_use]
    pub fn has_open_section(&self) -> bool {
        !self.open.is_empty()
    }

    /// Number of open parts and sections
    #[must_use]
    pub fn depth(&self) -> usize {
        self.open.len()
    }
}
