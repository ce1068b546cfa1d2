use leptos::prelude::*;

use crate::tree::{Node, NodeKind};

use super::ThemeContext;

const ENVELOPE_PATH: &str = "M21 4H3a3 3 0 0 0-3 3v10a3 3 0 0 0 3 3h18a3 3 0 0 0 3-3V7a3 3 0 0 0-3-3Zm0 2-9 5.5L3 6h18Zm0 12H3V8.3l9 5.5 9-5.5V18Z";

/// Turns a page node into a view. Class names match the ones the page's
/// stylesheet was compiled with.
pub fn render_node(node: &Node) -> AnyView {
    let class = node.style.class_name();
    let text = node.text.clone();
    let attr = |name: &str| node.get_attr(name).map(str::to_string);

    match node.kind {
        NodeKind::VStack
        | NodeKind::HStack
        | NodeKind::Box
        | NodeKind::Spacer
        | NodeKind::DesktopOnly
        | NodeKind::MobileOnly => {
            let children = render_children(node);
            view! { <div class=class>{children}</div> }.into_any()
        }
        NodeKind::Text => view! { <p class=class>{text}</p> }.into_any(),
        NodeKind::Heading => view! { <h2 class=class>{text}</h2> }.into_any(),
        NodeKind::Badge => {
            view! {
                <span class=class data-variant=attr("data-variant")>
                    {text}
                </span>
            }
            .into_any()
        }
        NodeKind::Icon => match node.get_attr("tag") {
            Some("email") => {
                view! {
                    <svg class=class viewBox="0 0 24 24" focusable="false" aria-hidden="true">
                        <path fill="currentColor" d=ENVELOPE_PATH />
                    </svg>
                }
                .into_any()
            }
            _ => {
                log::warn!("no glyph for icon {:?}", node.get_attr("tag"));
                view! { <span class=class></span> }.into_any()
            }
        },
        NodeKind::Image => {
            view! {
                <img
                    class=class
                    src=attr("src")
                    alt=attr("alt")
                    width=attr("width")
                    height=attr("height")
                />
            }
            .into_any()
        }
        NodeKind::Breadcrumb => {
            let last = node.children.len().saturating_sub(1);
            let items = node
                .children
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let separator = (i < last).then(|| {
                        view! {
                            <li role="presentation" style="margin:0 0.5rem">
                                "/"
                            </li>
                        }
                    });
                    view! {
                        {render_node(item)}
                        {separator}
                    }
                })
                .collect_view();
            view! {
                <nav class=class aria-label="breadcrumb">
                    <ol style="display:flex;align-items:center;list-style:none;margin:0;padding:0">
                        {items}
                    </ol>
                </nav>
            }
            .into_any()
        }
        NodeKind::BreadcrumbItem => {
            let children = render_children(node);
            view! { <li class=class>{children}</li> }.into_any()
        }
        NodeKind::BreadcrumbLink => {
            view! {
                <a class=class href=attr("href")>
                    {text}
                </a>
            }
            .into_any()
        }
        NodeKind::ColorModeButton => {
            let theme = expect_context::<ThemeContext>();
            let children = render_children(node);
            view! {
                <button
                    type="button"
                    class=class
                    aria-label="Toggle color mode"
                    on:click=move |_| theme.toggle()
                >
                    {children}
                </button>
            }
            .into_any()
        }
        NodeKind::ColorModeIcon => {
            let theme = expect_context::<ThemeContext>();
            view! {
                <span class=class>
                    {move || if theme.is_dark() { "☾" } else { "☀" }}
                </span>
            }
            .into_any()
        }
    }
}

fn render_children(node: &Node) -> AnyView {
    node.children.iter().map(render_node).collect_view().into_any()
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    use leptos_use::ColorMode;

    use crate::landing::{breadcrumb_item, landing, Footer, Header, COPYRIGHT, EMAIL, PROFILE_LINKS};
    use crate::tree::Node;

    fn render_with_theme(node: &Node, mode: ColorMode) -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(ThemeContext::with_mode(mode));
            render_node(node).to_html()
        })
    }

    #[test]
    fn test_footer_html() {
        let footer = Footer::new().build();
        let html = render_node(&footer).to_html();

        assert!(html.contains(COPYRIGHT));
        assert!(html.contains("<p class=\"css-"));
        assert!(html.contains("<div class=\"css-"));
    }

    #[test]
    fn test_breadcrumb_item_html() {
        let item = breadcrumb_item(&PROFILE_LINKS[1]);
        let html = render_node(&item).to_html();

        assert!(html.contains("src=\"/tableau.png\""));
        assert!(html.contains("href=\"https://public.tableau.com/app/profile/timble/vizzes\""));
        assert!(html.contains(">Tableau<"));
        assert!(html.contains("width=\"24px\""));
    }

    #[test]
    fn test_header_html() {
        let html = render_with_theme(&Header::new().build(), ColorMode::Light);

        assert!(html.contains(ENVELOPE_PATH));
        assert!(html.contains(EMAIL));
        assert_eq!(html.matches("aria-label=\"Toggle color mode\"").count(), 1);
        assert!(html.contains("<button type=\"button\""));
    }

    #[test]
    fn test_color_mode_icon_follows_mode() {
        let icon = Node::color_mode_icon();

        let light = render_with_theme(&icon, ColorMode::Light);
        assert!(light.contains('☀'));
        assert!(!light.contains('☾'));

        let dark = render_with_theme(&icon, ColorMode::Dark);
        assert!(dark.contains('☾'));
        assert!(!dark.contains('☀'));
    }

    #[test]
    fn test_unknown_icon_renders_empty_span() {
        let html = render_node(&Node::icon("phone")).to_html();

        assert!(html.contains("<span class=\"css-"));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn test_landing_html() {
        let html = render_with_theme(&landing(), ColorMode::Dark);

        assert!(html.contains(ENVELOPE_PATH));
        assert_eq!(html.matches("aria-label=\"Toggle color mode\"").count(), 1);
        // one separator between the two profile links
        assert_eq!(html.matches("role=\"presentation\"").count(), 1);
        assert_eq!(html.matches("aria-label=\"breadcrumb\"").count(), 1);
        for link in PROFILE_LINKS.iter() {
            assert!(html.contains(&format!("href=\"{}\"", link.url)));
        }
        assert!(html.contains(COPYRIGHT));
    }
}
