//! Small reusable widgets: status badge, countdown readout, toggle switch.

use egui::{Color32, RichText, Sense, Stroke};

use crate::models::launch::LaunchStatus;
use crate::services::countdown::{Countdown, CountdownDisplay};
use crate::ui_egui::theme::LaunchTheme;

/// Size variant shared by badge and countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetScale {
    Compact,
    Large,
}

impl WidgetScale {
    fn digits(self) -> f32 {
        match self {
            WidgetScale::Compact => 22.0,
            WidgetScale::Large => 52.0,
        }
    }

    fn units(self) -> f32 {
        match self {
            WidgetScale::Compact => 8.0,
            WidgetScale::Large => 10.0,
        }
    }

    fn badge_text(self) -> f32 {
        match self {
            WidgetScale::Compact => 10.0,
            WidgetScale::Large => 13.0,
        }
    }
}

/// Pill with a coloured dot and the status label.
pub fn status_badge(
    ui: &mut egui::Ui,
    status: &LaunchStatus,
    scale: WidgetScale,
) -> egui::Response {
    let style = status.style();
    let color = LaunchTheme::status_color(status);
    let dot_radius = match scale {
        WidgetScale::Compact => 3.0,
        WidgetScale::Large => 4.0,
    };
    let margin = match scale {
        WidgetScale::Compact => egui::Margin::symmetric(10.0, 3.0),
        WidgetScale::Large => egui::Margin::symmetric(14.0, 6.0),
    };

    egui::Frame::none()
        .fill(LaunchTheme::status_fill(status))
        .stroke(Stroke::new(1.0, color.gamma_multiply(0.2)))
        .rounding(20.0)
        .inner_margin(margin)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 6.0;
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(dot_radius * 2.0, dot_radius * 2.0),
                    Sense::hover(),
                );
                if style.pulses {
                    ui.painter().circle_stroke(
                        rect.center(),
                        dot_radius + 2.0,
                        Stroke::new(1.0, color.gamma_multiply(0.4)),
                    );
                }
                ui.painter().circle_filled(rect.center(), dot_radius, color);
                ui.label(
                    RichText::new(style.label)
                        .monospace()
                        .size(scale.badge_text())
                        .color(color),
                );
            });
        })
        .response
        .on_hover_text(format!("Status: {}", style.label))
}

/// Countdown readout for a launch, following the hold/hidden display policy.
pub fn countdown_readout(
    ui: &mut egui::Ui,
    status: &LaunchStatus,
    countdown: Countdown,
    scale: WidgetScale,
    theme: &LaunchTheme,
) {
    let display = CountdownDisplay::resolve(status, countdown);
    match display {
        CountdownDisplay::Hidden => {}
        CountdownDisplay::Hold => {
            ui.vertical_centered(|ui| {
                let size = match scale {
                    WidgetScale::Compact => 18.0,
                    WidgetScale::Large => 40.0,
                };
                ui.label(
                    RichText::new("T- HOLD")
                        .monospace()
                        .size(size)
                        .color(LaunchTheme::status_color(&LaunchStatus::Hold)),
                );
            });
        }
        CountdownDisplay::Running(countdown) => {
            let segments = display.segments();
            let response = ui
                .vertical_centered(|ui| {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 4.0;
                        ui.label(
                            RichText::new("T–")
                                .monospace()
                                .size(scale.digits() * 0.4)
                                .color(theme.text_muted),
                        );
                        for (index, segment) in segments.iter().enumerate() {
                            if index > 0 {
                                ui.label(
                                    RichText::new(":")
                                        .monospace()
                                        .size(scale.digits() * 0.7)
                                        .color(theme.text_muted.gamma_multiply(0.6)),
                                );
                            }
                            ui.vertical(|ui| {
                                ui.label(
                                    RichText::new(&segment.value)
                                        .monospace()
                                        .size(scale.digits())
                                        .color(theme.text_primary),
                                );
                                ui.label(
                                    RichText::new(segment.unit.to_uppercase())
                                        .size(scale.units())
                                        .color(theme.text_muted),
                                );
                            });
                        }
                    });
                })
                .response;
            response.on_hover_text(countdown.describe());
        }
    }
}

/// Pill toggle. Returns the click response; the caller flips the state.
pub fn toggle_switch(ui: &mut egui::Ui, on: bool, theme: &LaunchTheme) -> egui::Response {
    let (rect, mut response) = ui.allocate_exact_size(egui::vec2(40.0, 22.0), Sense::click());

    if ui.is_rect_visible(rect) {
        let how_on = ui.ctx().animate_bool(response.id, on);
        let radius = rect.height() / 2.0;
        let (fill, stroke, knob) = if on {
            (
                theme.toggle_on.gamma_multiply(0.25),
                theme.toggle_on.gamma_multiply(0.4),
                theme.toggle_on,
            )
        } else {
            (
                theme.toggle_off.gamma_multiply(0.3),
                theme.toggle_off.gamma_multiply(0.5),
                theme.toggle_off,
            )
        };

        ui.painter().rect(rect, radius, fill, Stroke::new(1.0, stroke));
        let knob_x = egui::lerp((rect.left() + radius)..=(rect.right() - radius), how_on);
        ui.painter()
            .circle_filled(egui::pos2(knob_x, rect.center().y), radius - 3.0, knob);
    }

    if response.clicked() {
        response.mark_changed();
    }
    response
}

/// Small upper-case caption above a section.
pub fn section_caption(ui: &mut egui::Ui, text: &str, theme: &LaunchTheme) {
    ui.label(
        RichText::new(text.to_uppercase())
            .size(10.0)
            .color(theme.text_muted),
    );
}

/// A frame with the card look used by list rows and detail sections.
pub fn card_frame(fill: Color32, border: Color32) -> egui::Frame {
    egui::Frame::none()
        .fill(fill)
        .stroke(Stroke::new(1.0, border))
        .rounding(12.0)
        .inner_margin(egui::Margin::same(14.0))
}
