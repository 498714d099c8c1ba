//! Theme module for the launch dashboard
//!
//! Defines the LaunchTheme structure and the status accent colours.

use egui::Color32;

use crate::models::launch::LaunchStatus;

/// Colours used across the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchTheme {
    /// Window background
    pub app_background: Color32,

    /// Launch card background
    pub card_background: Color32,

    /// Launch card border
    pub card_border: Color32,

    /// Card background when T-0 is under a day away
    pub imminent_background: Color32,

    /// Card border when T-0 is under a day away
    pub imminent_border: Color32,

    /// Hero card background
    pub hero_background: Color32,

    /// Brand accent (title glyph, active filter chip, hero border)
    pub accent: Color32,

    /// Primary text (missions, countdown digits)
    pub text_primary: Color32,

    /// Secondary text (providers, vehicles)
    pub text_secondary: Color32,

    /// Muted text (units, section captions)
    pub text_muted: Color32,

    pub toggle_on: Color32,
    pub toggle_off: Color32,
}

impl LaunchTheme {
    /// The night-sky theme
    pub fn night() -> Self {
        Self {
            app_background: Color32::from_rgb(6, 8, 18),
            card_background: Color32::from_rgb(16, 20, 36),
            card_border: Color32::from_rgb(28, 33, 50),
            imminent_background: Color32::from_rgb(12, 28, 30),
            imminent_border: Color32::from_rgb(14, 60, 42),
            hero_background: Color32::from_rgb(14, 22, 44),
            accent: Color32::from_rgb(0x64, 0xB5, 0xF6),
            text_primary: Color32::from_rgb(0xE8, 0xEC, 0xF4),
            text_secondary: Color32::from_rgb(160, 175, 210),
            text_muted: Color32::from_rgb(96, 106, 132),
            toggle_on: Color32::from_rgb(0x00, 0xE6, 0x76),
            toggle_off: Color32::from_rgb(70, 78, 100),
        }
    }

    /// Badge and accent colour for a launch status
    pub fn status_color(status: &LaunchStatus) -> Color32 {
        let [r, g, b] = status.style().rgb;
        Color32::from_rgb(r, g, b)
    }

    /// Translucent fill behind a status badge
    pub fn status_fill(status: &LaunchStatus) -> Color32 {
        Self::status_color(status).gamma_multiply(0.12)
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.extreme_bg_color = self.app_background;

        visuals.widgets.noninteractive.bg_fill = self.card_background;
        visuals.widgets.inactive.bg_fill = self.card_background;
        visuals.widgets.inactive.weak_bg_fill = self.card_background;
        visuals.widgets.hovered.weak_bg_fill = self.hero_background;
        visuals.selection.bg_fill = self.accent.gamma_multiply(0.25);
        visuals.selection.stroke = egui::Stroke::new(1.0, self.accent);

        visuals.override_text_color = Some(self.text_secondary);

        ctx.set_visuals(visuals);
    }
}

impl Default for LaunchTheme {
    fn default() -> Self {
        Self::night()
    }
}
