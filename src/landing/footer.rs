use crate::tree::Node;

use super::theme::section;

pub const COPYRIGHT: &str = "Copyright 2023 - 2024 Timble Michael";

pub struct Footer {
    footer: Node,
}

impl Footer {
    pub fn new() -> Self {
        let footer = Node::hstack().style(&section("footer")).child(
            Node::text(COPYRIGHT)
                .css("font_size", "10px")
                .css("font_weight", "semibold"),
        );
        Self { footer }
    }

    pub fn build(self) -> Node {
        self.footer
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}
