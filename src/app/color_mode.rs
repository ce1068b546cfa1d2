use leptos::prelude::*;
use leptos_use::{use_color_mode_with_options, ColorMode, UseColorModeOptions, UseColorModeReturn};

/// App-wide color scheme. The `light` or `dark` class lands on `<html>`,
/// which is what the `_light`/`_dark` style keys compile against.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    mode: Signal<ColorMode>,
    set_mode: WriteSignal<ColorMode>,
}

impl ThemeContext {
    /// Persists the mode in a cookie; with the `ssr` feature the cookie is
    /// read from the request, so the server resolves the same mode.
    pub fn new() -> Self {
        let UseColorModeReturn { mode, set_mode, .. } =
            use_color_mode_with_options(UseColorModeOptions::default().cookie_enabled(true));
        Self { mode, set_mode }
    }

    #[cfg(test)]
    pub(crate) fn with_mode(initial: ColorMode) -> Self {
        let (mode, set_mode) = signal(initial);
        Self {
            mode: mode.into(),
            set_mode,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.mode.get() == ColorMode::Dark
    }

    /// Class for the `<html>` element.
    pub fn class(&self) -> &'static str {
        mode_class(&self.mode.get())
    }

    pub fn toggle(&self) {
        let next = match self.mode.get_untracked() {
            ColorMode::Dark => ColorMode::Light,
            _ => ColorMode::Dark,
        };
        log::debug!("switching color mode to {next:?}");
        self.set_mode.set(next);
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}

fn mode_class(mode: &ColorMode) -> &'static str {
    match mode {
        ColorMode::Dark => "dark",
        _ => "light",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_class() {
        assert_eq!(mode_class(&ColorMode::Dark), "dark");
        assert_eq!(mode_class(&ColorMode::Light), "light");
        assert_eq!(mode_class(&ColorMode::Auto), "light");
    }

    #[test]
    fn test_toggle_flips_mode() {
        let owner = Owner::new();
        owner.with(|| {
            let theme = ThemeContext::with_mode(ColorMode::Light);
            assert!(!theme.is_dark());
            assert_eq!(theme.class(), "light");

            theme.toggle();
            assert!(theme.is_dark());
            assert_eq!(theme.class(), "dark");

            theme.toggle();
            assert!(!theme.is_dark());
        });
    }
}
