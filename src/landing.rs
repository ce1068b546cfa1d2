//! The landing page as a node tree: header, hero and footer stacked over a
//! drifting dotted background.

mod footer;
mod header;
mod hero;
pub mod theme;

pub use footer::{Footer, COPYRIGHT};
pub use header::{Header, EMAIL};
pub use hero::{badge, breadcrumb_item, Main, ProfileLink, GREETING, PROFILE_LINKS, SKILLS};

use crate::style::{Breakpoints, Style, StyleSheet};
use crate::tree::Node;

use theme::{section, DOTS};

/// Builds the page mounted at `/`.
pub fn landing() -> Node {
    let header = Header::new().build();
    let main = Main::new().build();
    let footer = Footer::new().build();

    Node::vstack()
        .child(header)
        .child(main)
        .child(footer)
        .light(
            Style::new()
                .set(
                    "background",
                    "radial-gradient(circle, rgba(0,0,0,0.35) 1px, transparent 1px)",
                )
                .set("background_size", "25px 25px"),
        )
        .css(
            "background",
            "radial-gradient(circle, rgba(255,255,255,0.09) 1px, transparent 1px)",
        )
        .css("background_size", "25px 25px")
        .style(&DOTS)
}

/// CSS for `page`, with the app-wide style applied to the body.
pub fn stylesheet(page: &Node) -> StyleSheet {
    page.stylesheet(&section("app"), Breakpoints::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{StyleValue, BREAKPOINT_STEPS};
    use crate::tree::NodeKind;

    #[test]
    fn test_three_sections_in_order() {
        let page = landing();

        assert_eq!(page.kind, NodeKind::VStack);
        assert_eq!(page.children.len(), 3);
        assert_eq!(page.children[0], Header::new().build());
        assert_eq!(page.children[1], Main::new().build());
        assert_eq!(page.children[2], Footer::new().build());
    }

    #[test]
    fn test_footer_text_is_fixed() {
        let page = landing();

        assert_eq!(page.children[2].text_content(), COPYRIGHT);
    }

    #[test]
    fn test_exactly_one_variant_visible_per_breakpoint() {
        let page = landing();
        let displays: Vec<[String; BREAKPOINT_STEPS]> = page
            .descendants()
            .into_iter()
            .filter(|n| matches!(n.kind, NodeKind::DesktopOnly | NodeKind::MobileOnly))
            .map(|n| match n.style.value("display") {
                Some(StyleValue::Responsive(steps)) => steps.clone(),
                other => panic!("variant without responsive display: {other:?}"),
            })
            .collect();
        assert_eq!(displays.len(), 2);

        for step in 0..BREAKPOINT_STEPS {
            let shown = displays.iter().filter(|d| d[step] != "none").count();
            assert_eq!(shown, 1, "breakpoint step {step}");
        }
    }

    #[test]
    fn test_badge_and_link_counts() {
        let page = landing();

        assert_eq!(page.find_all(NodeKind::Badge).len(), 2 * SKILLS.len());
        assert_eq!(page.find_all(NodeKind::BreadcrumbItem).len(), PROFILE_LINKS.len());
    }

    #[test]
    fn test_background_and_animation() {
        let page = landing();

        assert!(page.style.get("_light").unwrap().value("background").is_some());
        assert!(page.style.get("@keyframes dots").is_some());
        assert_eq!(
            page.style.value("background_size"),
            Some(&StyleValue::Plain("25px 25px".to_string()))
        );
    }

    #[test]
    fn test_digest_is_stable() {
        let first = landing().digest().unwrap();
        for _ in 0..3 {
            assert_eq!(landing().digest().unwrap(), first);
        }
    }

    #[test]
    fn test_stylesheet_contents() {
        let page = landing();
        let css = stylesheet(&page).css();

        assert!(css.contains(".dark body{background:#15171b;}"));
        assert!(css.contains("@keyframes dots{"));
        assert!(css.contains("@keyframes wave{0%{transform:rotate(45deg);}100%{transform:rotate(-15deg);}}"));
        assert!(css.contains("@media (min-width:30em){"));
        assert!(css.contains("@media (min-width:62em){"));
        assert!(css.contains("font-weight:600;"));
        assert!(!css.contains("infinte"));
    }

    #[test]
    fn test_stylesheet_is_deterministic() {
        assert_eq!(stylesheet(&landing()).css(), stylesheet(&landing()).css());
    }
}
