use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::style::{Breakpoints, Style, StyleSheet, BREAKPOINT_STEPS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NodeKind {
    VStack,
    HStack,
    Box,
    Spacer,
    /// Displayed from the first breakpoint up.
    DesktopOnly,
    /// Displayed below the first breakpoint only.
    MobileOnly,
    Text,
    Heading,
    Icon,
    Badge,
    Image,
    Breadcrumb,
    BreadcrumbItem,
    BreadcrumbLink,
    ColorModeButton,
    ColorModeIcon,
}

impl NodeKind {
    fn base_style(self) -> Style {
        match self {
            NodeKind::VStack => Style::new()
                .set("display", "flex")
                .set("flex_direction", "column")
                .set("align_items", "center")
                .set("gap", "0.5rem"),
            NodeKind::HStack => Style::new()
                .set("display", "flex")
                .set("flex_direction", "row")
                .set("align_items", "center")
                .set("gap", "0.5rem"),
            NodeKind::Spacer => Style::new()
                .set("flex", "1")
                .set("justify_self", "stretch")
                .set("align_self", "stretch"),
            NodeKind::DesktopOnly => Style::new().responsive("display", DESKTOP_DISPLAY),
            NodeKind::MobileOnly => Style::new().responsive("display", MOBILE_DISPLAY),
            NodeKind::Heading => Style::new()
                .set("font_weight", "bold")
                .set("line_height", "1.2")
                .set("margin", "0"),
            NodeKind::Text => Style::new().set("margin", "0"),
            NodeKind::Icon => Style::new()
                .set("display", "inline-block")
                .set("width", "1em")
                .set("height", "1em")
                .set("vertical_align", "middle"),
            NodeKind::Badge => Style::new()
                .set("display", "inline-block")
                .set("padding", "0 0.25rem")
                .set("text_transform", "uppercase")
                .set("font_size", "0.75rem")
                .set("font_weight", "bold")
                .set("border_radius", "0.125rem")
                .set("white_space", "nowrap"),
            NodeKind::BreadcrumbItem => Style::new()
                .set("display", "inline-flex")
                .set("align_items", "center"),
            NodeKind::BreadcrumbLink => Style::new()
                .set("text_decoration", "none")
                .set("color", "inherit")
                .nest("_hover", Style::new().set("text_decoration", "underline")),
            NodeKind::ColorModeButton => Style::new()
                .set("display", "inline-flex")
                .set("align_items", "center")
                .set("justify_content", "center")
                .set("background", "transparent")
                .set("border", "none")
                .set("border_radius", "0.375rem")
                .set("padding", "0.5rem")
                .set("font_size", "1.25rem")
                .set("cursor", "pointer"),
            NodeKind::Box
            | NodeKind::Image
            | NodeKind::Breadcrumb
            | NodeKind::ColorModeIcon => Style::new(),
        }
    }
}

const DESKTOP_DISPLAY: [&str; BREAKPOINT_STEPS] = ["none", "block", "block", "block", "block"];
const MOBILE_DISPLAY: [&str; BREAKPOINT_STEPS] = ["block", "none", "none", "none", "none"];

/// One element of a page: what it is, its attributes, its resolved style and
/// its ordered children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub kind: NodeKind,
    pub attrs: Vec<(String, String)>,
    pub style: Style,
    pub text: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attrs: Vec::new(),
            style: kind.base_style(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn vstack() -> Self {
        Self::new(NodeKind::VStack)
    }

    pub fn hstack() -> Self {
        Self::new(NodeKind::HStack)
    }

    pub fn boxed() -> Self {
        Self::new(NodeKind::Box)
    }

    pub fn spacer() -> Self {
        Self::new(NodeKind::Spacer)
    }

    pub fn desktop_only(child: Node) -> Self {
        Self::new(NodeKind::DesktopOnly).child(child)
    }

    pub fn mobile_only(child: Node) -> Self {
        Self::new(NodeKind::MobileOnly).child(child)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Text).with_text(text)
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Heading).with_text(text)
    }

    pub fn icon(tag: &str) -> Self {
        Self::new(NodeKind::Icon).attr("tag", tag)
    }

    pub fn badge(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Badge).with_text(text)
    }

    pub fn image(src: &str) -> Self {
        Self::new(NodeKind::Image).attr("src", src)
    }

    pub fn breadcrumb() -> Self {
        Self::new(NodeKind::Breadcrumb)
    }

    pub fn breadcrumb_item(child: Node) -> Self {
        Self::new(NodeKind::BreadcrumbItem).child(child)
    }

    pub fn breadcrumb_link(text: impl Into<String>, href: &str) -> Self {
        Self::new(NodeKind::BreadcrumbLink)
            .with_text(text)
            .attr("href", href)
    }

    pub fn color_mode_button(icon: Node) -> Self {
        Self::new(NodeKind::ColorModeButton).child(icon)
    }

    pub fn color_mode_icon() -> Self {
        Self::new(NodeKind::ColorModeIcon)
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((name.to_string(), value)),
        }
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Overlays `style` on the node's current style.
    pub fn style(mut self, style: &Style) -> Self {
        self.style = self.style.merge(style);
        self
    }

    pub fn css(self, key: &str, value: impl Into<String>) -> Self {
        let style = Style::new().set(key, value);
        self.style(&style)
    }

    pub fn responsive(self, key: &str, steps: [&str; BREAKPOINT_STEPS]) -> Self {
        let style = Style::new().responsive(key, steps);
        self.style(&style)
    }

    pub fn dark(self, style: Style) -> Self {
        let style = Style::new().nest("_dark", style);
        self.style(&style)
    }

    pub fn light(self, style: Style) -> Self {
        let style = Style::new().nest("_light", style);
        self.style(&style)
    }

    /// Gap between the children of a stack.
    pub fn spacing(self, gap: &str) -> Self {
        self.css("gap", gap)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// All nodes of the subtree in document order, starting with `self`.
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.descendants());
        }
        out
    }

    pub fn find_all(&self, kind: NodeKind) -> Vec<&Node> {
        self.descendants()
            .into_iter()
            .filter(|n| n.kind == kind)
            .collect()
    }

    /// Text of the node followed by the text of its descendants.
    pub fn text_content(&self) -> String {
        self.descendants()
            .into_iter()
            .filter_map(|n| n.text.as_deref())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Hex SHA-256 of the serialized tree: kinds, attributes, resolved
    /// styles and children in order.
    pub fn digest(&self) -> Result<String, serde_json::Error> {
        let bytes = serde_json::to_vec(self)?;
        Ok(hex::encode(Sha256::digest(bytes)))
    }

    /// Compiles the styles of every node in the tree plus `app` applied to
    /// the document body.
    pub fn stylesheet(&self, app: &Style, breakpoints: Breakpoints) -> StyleSheet {
        let mut sheet = StyleSheet::new(breakpoints);
        sheet.add_global("body", app);
        for node in self.descendants() {
            sheet.add_class(&node.style);
        }
        sheet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleValue;

    #[test]
    fn test_node_style_overlays_base() {
        let node = Node::hstack().spacing("5rem");

        assert_eq!(
            node.style.value("gap"),
            Some(&StyleValue::Plain("5rem".to_string()))
        );
        assert_eq!(
            node.style.value("display"),
            Some(&StyleValue::Plain("flex".to_string()))
        );
    }

    #[test]
    fn test_responsive_wrappers_are_exclusive() {
        let desktop = Node::desktop_only(Node::boxed());
        let mobile = Node::mobile_only(Node::boxed());
        let display = |n: &Node| match n.style.value("display") {
            Some(StyleValue::Responsive(steps)) => steps.clone(),
            other => panic!("expected responsive display, got {other:?}"),
        };
        let desktop = display(&desktop);
        let mobile = display(&mobile);

        for step in 0..BREAKPOINT_STEPS {
            let shown = [&desktop[step], &mobile[step]]
                .iter()
                .filter(|v| v.as_str() != "none")
                .count();
            assert_eq!(shown, 1, "step {step}");
        }
    }

    #[test]
    fn test_descendants_in_document_order() {
        let tree = Node::vstack()
            .child(Node::text("a").child(Node::text("b")))
            .child(Node::text("c"));

        assert_eq!(tree.text_content(), "a b c");
        assert_eq!(tree.find_all(NodeKind::Text).len(), 3);
    }

    #[test]
    fn test_attr_replaces_existing() {
        let node = Node::image("/a.png").attr("src", "/b.png");

        assert_eq!(node.get_attr("src"), Some("/b.png"));
        assert_eq!(node.attrs.len(), 1);
    }

    #[test]
    fn test_digest_tracks_structure() {
        let a = Node::vstack().child(Node::text("x"));
        let b = Node::vstack().child(Node::text("x"));
        let c = Node::vstack().child(Node::text("y"));

        assert_eq!(a.digest().unwrap(), b.digest().unwrap());
        assert_ne!(a.digest().unwrap(), c.digest().unwrap());
        assert_eq!(a.digest().unwrap().len(), 64);
    }

    #[test]
    fn test_stylesheet_covers_every_styled_node() {
        let tree = Node::vstack()
            .child(Node::hstack())
            .child(Node::boxed());
        let sheet = tree.stylesheet(&Style::new(), Breakpoints::default());

        // the plain box carries no style
        assert_eq!(sheet.classes().len(), 2);
    }
}
