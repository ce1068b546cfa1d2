use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Number of entries in a responsive value: the base value plus one per breakpoint.
pub const BREAKPOINT_STEPS: usize = 5;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("style must be an object")]
    NotAnObject,
    #[error("unsupported value for `{0}`")]
    InvalidValue(String),
    #[error("responsive value for `{key}` has {found} steps, expected 5")]
    BreakpointArity { key: String, found: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    Plain(String),
    Responsive([String; BREAKPOINT_STEPS]),
    Nested(Style),
}

/// An ordered CSS-in-object style: property names, `_dark`/`_light`/`_hover`
/// state keys and `@keyframes` blocks mapped to their values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Style(Vec<(String, StyleValue)>);

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON style literal. Strings and numbers become plain values,
    /// arrays become responsive values and objects nest.
    pub fn from_json(value: &Value) -> Result<Self, StyleError> {
        let map = value.as_object().ok_or(StyleError::NotAnObject)?;
        let mut style = Style::new();
        for (key, value) in map {
            let parsed = match value {
                Value::String(s) => StyleValue::Plain(s.clone()),
                Value::Number(n) => StyleValue::Plain(n.to_string()),
                Value::Array(steps) => StyleValue::Responsive(responsive_steps(key, steps)?),
                Value::Object(_) => StyleValue::Nested(Style::from_json(value)?),
                _ => return Err(StyleError::InvalidValue(key.clone())),
            };
            style.insert(key, parsed);
        }
        Ok(style)
    }

    pub fn set(mut self, key: &str, value: impl Into<String>) -> Self {
        self.insert(key, StyleValue::Plain(value.into()));
        self
    }

    pub fn responsive(mut self, key: &str, steps: [&str; BREAKPOINT_STEPS]) -> Self {
        self.insert(key, StyleValue::Responsive(steps.map(String::from)));
        self
    }

    pub fn nest(mut self, key: &str, style: Style) -> Self {
        self.insert(key, StyleValue::Nested(style));
        self
    }

    /// Overlays `other` on top of this style; keys already present are
    /// replaced in place, new keys are appended.
    pub fn merge(mut self, other: &Style) -> Self {
        for (key, value) in other.iter() {
            self.insert(key, value.clone());
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&Style> {
        match self.value(key)? {
            StyleValue::Nested(style) => Some(style),
            _ => None,
        }
    }

    pub fn value(&self, key: &str) -> Option<&StyleValue> {
        let key = normalize_key(key);
        self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Deterministic class name derived from the style's content, `None`
    /// for an empty style.
    pub fn class_name(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let mut hasher = Sha256::new();
        self.fingerprint(&mut hasher);
        let digest = hex::encode(hasher.finalize());
        Some(format!("css-{}", &digest[..8]))
    }

    fn fingerprint(&self, hasher: &mut Sha256) {
        for (key, value) in &self.0 {
            hasher.update(key.as_bytes());
            hasher.update([0]);
            match value {
                StyleValue::Plain(v) => {
                    hasher.update(b"p");
                    hasher.update(v.as_bytes());
                }
                StyleValue::Responsive(steps) => {
                    hasher.update(b"r");
                    for step in steps {
                        hasher.update(step.as_bytes());
                        hasher.update([0]);
                    }
                }
                StyleValue::Nested(inner) => {
                    hasher.update(b"{");
                    inner.fingerprint(hasher);
                    hasher.update(b"}");
                }
            }
            hasher.update([1]);
        }
    }

    fn insert(&mut self, key: &str, value: StyleValue) {
        let key = normalize_key(key);
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((key, value)),
        }
    }
}

fn responsive_steps(key: &str, steps: &[Value]) -> Result<[String; BREAKPOINT_STEPS], StyleError> {
    let steps = steps
        .iter()
        .map(|step| match step {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            _ => Err(StyleError::InvalidValue(key.to_string())),
        })
        .collect::<Result<Vec<_>, _>>()?;
    let found = steps.len();
    steps
        .try_into()
        .map_err(|_| StyleError::BreakpointArity {
            key: key.to_string(),
            found,
        })
}

/// `align_items` -> `align-items`, `bg` -> `background`. State keys, at-rules
/// and keyframe selectors are kept as written.
fn normalize_key(key: &str) -> String {
    match key {
        "bg" => "background".to_string(),
        k if k.starts_with('_') || k.starts_with('@') => k.to_string(),
        k => k.replace('_', "-"),
    }
}

fn resolve_token<'a>(property: &str, value: &'a str) -> &'a str {
    match (property, value) {
        ("font-weight", "normal") => "400",
        ("font-weight", "medium") => "500",
        ("font-weight", "semibold") => "600",
        ("font-weight", "bold") => "700",
        ("font-weight", "extrabold") => "800",
        _ => value,
    }
}

fn state_selector(key: &str, selector: &str) -> Option<String> {
    match key {
        "_dark" => Some(format!(".dark {selector}")),
        "_light" => Some(format!(".light {selector}")),
        "_hover" => Some(format!("{selector}:hover")),
        _ => None,
    }
}

fn declaration(property: &str, value: &str) -> String {
    format!("{property}:{};", resolve_token(property, value))
}

/// Minimum viewport widths at which responsive steps 1 through 4 apply.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakpoints {
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            sm: "30em".to_string(),
            md: "48em".to_string(),
            lg: "62em".to_string(),
            xl: "80em".to_string(),
        }
    }
}

impl Breakpoints {
    pub fn min_width(&self, step: usize) -> Option<&str> {
        match step {
            1 => Some(&self.sm),
            2 => Some(&self.md),
            3 => Some(&self.lg),
            4 => Some(&self.xl),
            _ => None,
        }
    }
}

/// Compiled CSS for a set of styles. Each distinct style is emitted once
/// under its class name.
#[derive(Debug, Clone)]
pub struct StyleSheet {
    breakpoints: Breakpoints,
    classes: Vec<String>,
    rules: Vec<String>,
    media: [Vec<String>; BREAKPOINT_STEPS - 1],
    keyframes: Vec<(String, String)>,
}

impl StyleSheet {
    pub fn new(breakpoints: Breakpoints) -> Self {
        Self {
            breakpoints,
            classes: Vec::new(),
            rules: Vec::new(),
            media: Default::default(),
            keyframes: Vec::new(),
        }
    }

    /// Adds a style under an explicit selector such as `body`.
    pub fn add_global(&mut self, selector: &str, style: &Style) {
        self.emit(selector, style);
    }

    /// Adds a style under its generated class and returns the class name.
    pub fn add_class(&mut self, style: &Style) -> Option<String> {
        let class = style.class_name()?;
        if !self.classes.contains(&class) {
            self.classes.push(class.clone());
            self.emit(&format!(".{class}"), style);
        }
        Some(class)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn css(&self) -> String {
        let mut out = self.rules.clone();
        for (i, rules) in self.media.iter().enumerate() {
            if rules.is_empty() {
                continue;
            }
            if let Some(width) = self.breakpoints.min_width(i + 1) {
                out.push(format!("@media (min-width:{width}){{{}}}", rules.join("")));
            }
        }
        out.extend(self.keyframes.iter().map(|(_, block)| block.clone()));
        out.join("\n")
    }

    fn emit(&mut self, selector: &str, style: &Style) {
        let mut base = Vec::new();
        let mut steps: [Vec<String>; BREAKPOINT_STEPS - 1] = Default::default();
        let mut states = Vec::new();
        for (key, value) in style.iter() {
            match value {
                StyleValue::Plain(v) => base.push(declaration(key, v)),
                StyleValue::Responsive(values) => {
                    base.push(declaration(key, &values[0]));
                    for step in 1..BREAKPOINT_STEPS {
                        if values[step] != values[step - 1] {
                            steps[step - 1].push(declaration(key, &values[step]));
                        }
                    }
                }
                StyleValue::Nested(inner) => {
                    if let Some(name) = key.strip_prefix("@keyframes") {
                        self.add_keyframes(name.trim(), inner);
                    } else if let Some(state) = state_selector(key, selector) {
                        states.push((state, inner));
                    }
                    // other nested groups are named lookups, not properties
                }
            }
        }
        if !base.is_empty() {
            self.rules.push(format!("{selector}{{{}}}", base.join("")));
        }
        for (i, decls) in steps.into_iter().enumerate() {
            if !decls.is_empty() {
                self.media[i].push(format!("{selector}{{{}}}", decls.join("")));
            }
        }
        for (state, inner) in states {
            self.emit(&state, inner);
        }
    }

    fn add_keyframes(&mut self, name: &str, frames: &Style) {
        if self.keyframes.iter().any(|(n, _)| n == name) {
            return;
        }
        let body = frames
            .iter()
            .filter_map(|(offset, value)| match value {
                StyleValue::Nested(frame) => {
                    let decls = frame
                        .iter()
                        .filter_map(|(k, v)| match v {
                            StyleValue::Plain(v) => Some(declaration(k, v)),
                            _ => None,
                        })
                        .collect::<String>();
                    Some(format!("{offset}{{{decls}}}"))
                }
                _ => None,
            })
            .collect::<String>();
        self.keyframes
            .push((name.to_string(), format!("@keyframes {name}{{{body}}}")));
    }
}
