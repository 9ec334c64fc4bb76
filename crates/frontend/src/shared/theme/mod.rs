//! Theme configuration for the dashboard.
//!
//! The theme is an explicit value: it is constructed once in the render root
//! and handed to the tree via context. Nothing in the application mutates it
//! and no module reads theme tokens from ambient globals.

use leptos::prelude::*;

/// Palette and typography tokens consumed by the rendering layer.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardTheme {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub paper: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
    pub font_family: &'static str,
}

impl DashboardTheme {
    /// The light palette of the dashboard.
    pub fn light() -> Self {
        Self {
            primary: "#1976d2",
            secondary: "#673ab7",
            background: "#f4f6f8",
            paper: "#ffffff",
            text_primary: "#172b4d",
            text_secondary: "#6b778c",
            success: "#4caf50",
            error: "#f44336",
            info: "#2196f3",
            warning: "#ff9800",
            font_family: "\"Inter\", -apple-system, BlinkMacSystemFont, \"Segoe UI\", Helvetica, Arial, sans-serif",
        }
    }

    /// Inline style string exposing the tokens as CSS custom properties.
    ///
    /// Applied to the render root so every descendant can use
    /// `var(--color-*)` without further plumbing.
    pub fn css_vars(&self) -> String {
        format!(
            "--color-primary: {}; --color-secondary: {}; --color-background: {}; \
             --color-paper: {}; --color-text-primary: {}; --color-text-secondary: {}; \
             --color-success: {}; --color-error: {}; --color-info: {}; --color-warning: {}; \
             font-family: {}; background: {}; color: {};",
            self.primary,
            self.secondary,
            self.background,
            self.paper,
            self.text_primary,
            self.text_secondary,
            self.success,
            self.error,
            self.info,
            self.warning,
            self.font_family,
            self.background,
            self.text_primary,
        )
    }
}

/// Access the theme provided by the render root.
pub fn use_theme() -> DashboardTheme {
    use_context::<DashboardTheme>().unwrap_or_else(DashboardTheme::light)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_vars_contains_every_token() {
        let vars = DashboardTheme::light().css_vars();
        assert!(vars.contains("--color-primary: #1976d2"));
        assert!(vars.contains("--color-background: #f4f6f8"));
        assert!(vars.contains("font-family: \"Inter\""));
    }
}
