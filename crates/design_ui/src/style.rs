//! Style records and scoped stylesheets.
//!
//! Components derive immutable [`StyleRecord`] values from the theme and
//! assemble them into a [`StyleSheet`] keyed by [`Selector`]s. Interaction
//! states are expressed as pseudo-class rules so the browser resolves hover,
//! focus, and checked visuals without any code running.

use std::fmt::Write as _;

/// Attribute used to name the parts of a component's markup.
pub const PART_ATTRIBUTE: &str = "data-ds-part";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered CSS declarations. Setting a property twice keeps the later value in
/// the original position.
pub struct StyleRecord {
    declarations: Vec<(&'static str, String)>,
}

impl StyleRecord {
    /// Empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record with `property` set to `value`.
    pub fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self
            .declarations
            .iter_mut()
            .find(|(existing, _)| *existing == property)
        {
            Some((_, slot)) => *slot = value,
            None => self.declarations.push((property, value)),
        }
        self
    }

    /// Returns the record with `property` set only when `value` is present.
    pub fn set_opt(self, property: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.set(property, value),
            None => self,
        }
    }

    /// Overlays `other` on top of this record.
    pub fn merge(self, other: &StyleRecord) -> Self {
        other
            .declarations
            .iter()
            .fold(self, |record, (property, value)| {
                record.set(*property, value.clone())
            })
    }

    /// Value of `property`, if declared.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(existing, _)| *existing == property)
            .map(|(_, value)| value.as_str())
    }

    /// Whether no declarations are present.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.declarations
            .iter()
            .map(|(property, value)| (*property, value.as_str()))
    }

    /// Renders `property: value;` pairs suitable for a `style` attribute.
    pub fn to_inline(&self) -> String {
        self.iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Interaction and form states a rule can be conditioned on.
pub enum PseudoState {
    /// Pointer over the element.
    Hover,
    /// Element being pressed.
    Active,
    /// Element has keyboard focus.
    FocusVisible,
    /// Element is disabled.
    Disabled,
    /// Checkable input is checked.
    Checked,
}

impl PseudoState {
    /// CSS pseudo-class text.
    pub fn css(self) -> &'static str {
        match self {
            Self::Hover => ":hover",
            Self::Active => ":active",
            Self::FocusVisible => ":focus-visible",
            Self::Disabled => ":disabled",
            Self::Checked => ":checked",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relation {
    Descendant,
    Sibling,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Where a rule applies, relative to a component's scope class.
pub struct Selector {
    anchor: Option<&'static str>,
    states: Vec<PseudoState>,
    excluded: Vec<PseudoState>,
    target: Option<(Relation, &'static str)>,
}

impl Selector {
    /// The scoped root element itself.
    pub fn root() -> Self {
        Self {
            anchor: None,
            states: Vec::new(),
            excluded: Vec::new(),
            target: None,
        }
    }

    /// A named part inside the scope.
    pub fn part(name: &'static str) -> Self {
        Self {
            anchor: Some(name),
            ..Self::root()
        }
    }

    /// Requires the anchor to be in `state`.
    pub fn on(mut self, state: PseudoState) -> Self {
        self.states.push(state);
        self
    }

    /// Requires the anchor not to be in `state`.
    pub fn unless(mut self, state: PseudoState) -> Self {
        self.excluded.push(state);
        self
    }

    /// Styles a descendant part of the anchor instead of the anchor.
    pub fn descendant(mut self, part: &'static str) -> Self {
        self.target = Some((Relation::Descendant, part));
        self
    }

    /// Styles a following sibling part of the anchor instead of the anchor.
    pub fn sibling(mut self, part: &'static str) -> Self {
        self.target = Some((Relation::Sibling, part));
        self
    }

    /// Renders the selector under `.scope`.
    pub fn render(&self, scope: &str) -> String {
        let mut out = format!(".{scope}");
        if let Some(anchor) = self.anchor {
            let _ = write!(out, " {}", part_selector(anchor));
        }
        for state in &self.states {
            out.push_str(state.css());
        }
        for state in &self.excluded {
            let _ = write!(out, ":not({})", state.css());
        }
        match self.target {
            Some((Relation::Descendant, part)) => {
                let _ = write!(out, " {}", part_selector(part));
            }
            Some((Relation::Sibling, part)) => {
                let _ = write!(out, " ~ {}", part_selector(part));
            }
            None => {}
        }
        out
    }
}

fn part_selector(name: &str) -> String {
    format!("[{PART_ATTRIBUTE}=\"{name}\"]")
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Rules scoped to one component instance. Later rules win on equal specificity.
pub struct StyleSheet {
    scope: String,
    rules: Vec<(Selector, StyleRecord)>,
}

impl StyleSheet {
    /// Empty sheet scoped to the class `scope`.
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            rules: Vec::new(),
        }
    }

    /// Scope class name.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Appends a rule. Empty records are dropped.
    pub fn rule(mut self, selector: Selector, record: StyleRecord) -> Self {
        if !record.is_empty() {
            self.rules.push((selector, record));
        }
        self
    }

    /// Record of the first rule matching `selector`.
    pub fn find(&self, selector: &Selector) -> Option<&StyleRecord> {
        self.rules
            .iter()
            .find(|(candidate, _)| candidate == selector)
            .map(|(_, record)| record)
    }

    /// Renders the sheet as CSS text.
    pub fn to_css(&self) -> String {
        self.rules
            .iter()
            .map(|(selector, record)| {
                format!("{} {{ {} }}", selector.render(&self.scope), record.to_inline())
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn set_replaces_in_place_and_merge_overlays() {
        let base = StyleRecord::new()
            .set("color", "red")
            .set("padding", "4px")
            .set("color", "blue");
        assert_eq!(base.to_inline(), "color: blue; padding: 4px;");

        let merged = base.merge(&StyleRecord::new().set("padding", "8px").set("margin", "0"));
        assert_eq!(merged.to_inline(), "color: blue; padding: 8px; margin: 0;");
        assert_eq!(merged.get("margin"), Some("0"));
        assert_eq!(merged.get("border"), None);
    }

    #[test]
    fn set_opt_skips_missing_values() {
        let record = StyleRecord::new()
            .set_opt("color", Some("red"))
            .set_opt("font-size", None::<String>);
        assert_eq!(record.to_inline(), "color: red;");
    }

    #[test]
    fn selectors_render_states_exclusions_and_targets() {
        assert_eq!(Selector::root().render("ds-1"), ".ds-1");
        assert_eq!(
            Selector::root()
                .on(PseudoState::Hover)
                .unless(PseudoState::Disabled)
                .descendant("icon")
                .render("ds-1"),
            ".ds-1:hover:not(:disabled) [data-ds-part=\"icon\"]"
        );
        assert_eq!(
            Selector::part("input")
                .on(PseudoState::Checked)
                .sibling("disc")
                .render("ds-2"),
            ".ds-2 [data-ds-part=\"input\"]:checked ~ [data-ds-part=\"disc\"]"
        );
    }

    #[test]
    fn sheets_keep_rule_order_and_drop_empty_records() {
        let sheet = StyleSheet::new("ds-3")
            .rule(Selector::root(), StyleRecord::new().set("color", "red"))
            .rule(Selector::part("label"), StyleRecord::new())
            .rule(
                Selector::root().on(PseudoState::Hover),
                StyleRecord::new().set("color", "blue"),
            );
        assert_eq!(
            sheet.to_css(),
            ".ds-3 { color: red; }\n.ds-3:hover { color: blue; }"
        );
        assert!(sheet.find(&Selector::part("label")).is_none());
        assert_eq!(sheet.scope(), "ds-3");
    }
}
