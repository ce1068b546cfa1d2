use crate::style::Style;
use crate::tree::Node;

use super::theme::section;

pub const EMAIL: &str = "timblemichael20@gmail.com";

const MUTED_DARK: &str = "rgba(255,255,255,0.5)";

pub struct Header {
    header: Node,
    email: Node,
    theme: Node,
}

impl Header {
    pub fn new() -> Self {
        let email = Node::hstack()
            .child(Node::boxed().child(
                Node::icon("email").dark(Style::new().set("color", MUTED_DARK)),
            ))
            .child(Node::boxed().child(
                Node::text(EMAIL).dark(Style::new().set("color", MUTED_DARK)),
            ))
            .css("align_items", "center")
            .css("justify_content", "center");
        let theme = Node::color_mode_button(Node::color_mode_icon())
            .light(Style::new().set("color", "black"))
            .dark(Style::new().set("color", "white"));
        Self {
            header: Node::hstack().style(&section("header")),
            email,
            theme,
        }
    }

    fn compile_component(&self) -> Vec<Node> {
        vec![self.email.clone(), Node::spacer(), self.theme.clone()]
    }

    pub fn build(mut self) -> Node {
        self.header.children = self.compile_component();
        self.header
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
