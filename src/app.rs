mod color_mode;
mod render;

pub use color_mode::ThemeContext;
pub use render::render_node;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::landing::{landing, stylesheet};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = ThemeContext::new();
    provide_context(theme);

    view! {
        // server HTML carries the mode too, so `.dark`/`.light` rules apply before hydration
        <Html attr:class=move || theme.class() />
        <Title text="Timble Michael" />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=LandingPage />
            </Routes>
        </Router>
    }
}

/// Renders the landing page together with the stylesheet its nodes use.
#[component]
fn LandingPage() -> impl IntoView {
    let page = landing();
    let css = stylesheet(&page).css();
    log::debug!("rendering landing page, {} bytes of css", css.len());

    view! {
        <Style id="landing">{css}</Style>
        {render_node(&page)}
    }
}
