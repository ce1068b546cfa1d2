use crate::style::Style;
use crate::tree::Node;

use super::theme::{section, WAVE};

pub const GREETING: &str = "Hi - I'm Timble";

pub const SKILLS: [&str; 5] = [
    "Data Analyst",
    "Data Engineer",
    "Alteryx",
    "Tableau",
    "Power BI",
];

/// An external profile shown in the breadcrumb row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileLink {
    pub icon: &'static str,
    pub title: &'static str,
    pub url: &'static str,
}

pub const PROFILE_LINKS: [ProfileLink; 2] = [
    ProfileLink {
        icon: "/github.png",
        title: "GitHub",
        url: "https://github.com/",
    },
    ProfileLink {
        icon: "/tableau.png",
        title: "Tableau",
        url: "https://public.tableau.com/app/profile/timble/vizzes",
    },
];

/// Hero section: greeting, skills and profile links, laid out once for
/// tablet and desktop and once for mobile.
pub struct Main {
    container: Node,
    name: Node,
    badge_stack_max: Node,
    badge_stack_min: Node,
    crumbs: Node,
}

impl Main {
    pub fn new() -> Self {
        let name = Node::hstack()
            .child(
                Node::heading(GREETING)
                    .responsive("font_size", ["2rem", "2.85rem", "4rem", "5rem", "5rem"])
                    .css("font_weight", "900")
                    .dark(
                        Style::new()
                            .set(
                                "background",
                                "linear-gradient(to right, #e1e1e1, #757575)",
                            )
                            .set("background_clip", "text"),
                    ),
            )
            .child(
                Node::heading("👋")
                    .responsive("font_size", HEADING_2XL)
                    .style(&WAVE),
            )
            .spacing("1.75rem");

        let badge_stack_max = Node::hstack()
            .spacing("5rem")
            .children(SKILLS.into_iter().map(badge));
        let badge_stack_min = Node::vstack()
            .spacing("1.25rem")
            .children(SKILLS.into_iter().map(badge));

        let crumbs = Node::breadcrumb().children(PROFILE_LINKS.iter().map(breadcrumb_item));

        Self {
            container: Node::boxed().css("width", "100%"),
            name,
            badge_stack_max,
            badge_stack_min,
            crumbs,
        }
    }

    fn compile_desktop_component(&self) -> Node {
        Node::desktop_only(
            Node::vstack()
                .child(self.name.clone())
                .child(self.badge_stack_max.clone())
                .child(self.crumbs.clone())
                .style(&property()),
        )
    }

    fn compile_mobile_component(&self) -> Node {
        Node::mobile_only(
            Node::vstack()
                .child(self.name.clone())
                .child(self.badge_stack_min.clone())
                .style(&property()),
        )
    }

    pub fn build(mut self) -> Node {
        self.container.children = vec![
            self.compile_desktop_component(),
            self.compile_mobile_component(),
        ];
        self.container
    }
}

impl Default for Main {
    fn default() -> Self {
        Self::new()
    }
}

/// Heading size `2xl`.
const HEADING_2XL: [&str; 5] = ["2.25rem", "2.25rem", "3rem", "3rem", "3rem"];

fn property() -> Style {
    section("main").get("property").cloned().unwrap_or_default()
}

pub fn badge(title: &str) -> Node {
    Node::badge(title)
        .attr("data-variant", "solid")
        .css("background", "#718096")
        .css("color", "white")
        .responsive(
            "padding",
            [
                "0.15rem 0.35rem",
                "0.15rem 0.35rem",
                "0.15rem 1rem",
                "0.15rem 1rem",
                "0.15rem 1rem",
            ],
        )
}

pub fn breadcrumb_item(link: &ProfileLink) -> Node {
    Node::breadcrumb_item(
        Node::hstack()
            .child(
                Node::image(link.icon)
                    .attr("alt", link.title)
                    .attr("width", "24px")
                    .attr("height", "24px")
                    .dark(Style::new().set("filter", "brightness(0) invert(1)")),
            )
            .child(
                Node::breadcrumb_link(link.title, link.url)
                    .dark(Style::new().set("color", "rgba(255,255,255,0.7)")),
            ),
    )
}
