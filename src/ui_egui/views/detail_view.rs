//! Detail view for a single launch.

use std::time::Instant;

use chrono_tz::Tz;
use egui::RichText;

use super::widgets::{
    card_frame, countdown_readout, section_caption, status_badge, toggle_switch, WidgetScale,
};
use super::TimerSurface;
use crate::models::launch::LaunchRecord;
use crate::models::notification::{NotificationOffset, NotificationPreferences};
use crate::services::clock::Clock;
use crate::services::countdown::CountdownTimers;
use crate::ui_egui::theme::LaunchTheme;
use crate::utils::date::ScheduleSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    None,
    Back,
    Toggle(NotificationOffset),
}

pub struct DetailFrame<'a, C: Clock> {
    pub theme: &'a LaunchTheme,
    pub timezone: Tz,
    pub timers: &'a mut CountdownTimers<TimerSurface>,
    pub clock: &'a C,
    pub now: Instant,
}

pub fn render_detail<C: Clock>(
    ui: &mut egui::Ui,
    launch: &LaunchRecord,
    notifications: &NotificationPreferences,
    frame: &mut DetailFrame<'_, C>,
) -> DetailAction {
    let theme = frame.theme;
    let mut action = DetailAction::None;

    let back = ui.add(
        egui::Button::new(RichText::new("← All Launches").size(14.0).color(theme.accent))
            .frame(false),
    );
    if back.on_hover_text("Back to launch list").clicked() {
        action = DetailAction::Back;
    }
    ui.add_space(12.0);

    ui.label(
        RichText::new(launch.provider.to_uppercase())
            .size(12.0)
            .color(theme.text_secondary),
    );
    ui.label(
        RichText::new(&launch.mission)
            .size(30.0)
            .color(theme.text_primary),
    );
    ui.add_space(6.0);
    status_badge(ui, &launch.status, WidgetScale::Large);
    ui.add_space(10.0);

    let countdown = frame.timers.observe(
        TimerSurface::Detail(launch.id.clone()),
        launch.launch_time,
        frame.now,
        frame.clock,
    );
    countdown_readout(ui, &launch.status, countdown, WidgetScale::Large, theme);
    ui.add_space(10.0);

    render_schedule(ui, launch, frame.timezone, theme);
    ui.add_space(16.0);

    section_caption(ui, "Mission", theme);
    ui.label(
        RichText::new(&launch.description)
            .size(14.0)
            .color(theme.text_secondary),
    );
    ui.add_space(16.0);

    ui.columns(2, |columns| {
        fact_card(&mut columns[0], "Vehicle", &launch.vehicle, None, theme);
        fact_card(&mut columns[1], "Launch Pad", &launch.pad, None, theme);
    });
    ui.add_space(8.0);
    fact_card(ui, "Location", &launch.site, Some(&launch.state), theme);
    ui.add_space(16.0);

    section_caption(ui, "Notifications", theme);
    if let Some(offset) = render_notification_toggles(ui, notifications, theme) {
        action = DetailAction::Toggle(offset);
    }

    action
}

fn render_schedule(ui: &mut egui::Ui, launch: &LaunchRecord, tz: Tz, theme: &LaunchTheme) {
    let summary = ScheduleSummary::for_launch(launch, tz);

    card_frame(theme.card_background, theme.card_border).show(ui, |ui| {
        ui.set_width(ui.available_width());
        section_caption(ui, summary.heading, theme);
        ui.label(
            RichText::new(&summary.date)
                .size(16.0)
                .color(theme.text_primary),
        );
        ui.label(
            RichText::new(summary.time_line())
                .monospace()
                .size(14.0)
                .color(theme.text_secondary),
        );
    });
}

fn fact_card(
    ui: &mut egui::Ui,
    caption: &str,
    value: &str,
    detail: Option<&str>,
    theme: &LaunchTheme,
) {
    card_frame(theme.card_background, theme.card_border).show(ui, |ui| {
        ui.set_width(ui.available_width());
        section_caption(ui, caption, theme);
        ui.label(RichText::new(value).size(15.0).color(theme.text_primary));
        if let Some(detail) = detail {
            ui.label(RichText::new(detail).size(12.0).color(theme.text_muted));
        }
    });
}

/// Returns the offset whose switch was clicked this frame, if any.
fn render_notification_toggles(
    ui: &mut egui::Ui,
    notifications: &NotificationPreferences,
    theme: &LaunchTheme,
) -> Option<NotificationOffset> {
    let mut clicked = None;

    for offset in NotificationOffset::ALL {
        let enabled = notifications.is_enabled(offset);
        ui.horizontal(|ui| {
            ui.label(RichText::new(offset.label()).size(14.0).color(theme.text_secondary));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let response = toggle_switch(ui, enabled, theme).on_hover_text(format!(
                    "{}: {}",
                    offset.label(),
                    if enabled { "enabled" } else { "disabled" }
                ));
                if response.clicked() {
                    clicked = Some(offset);
                }
            });
        });
        ui.separator();
    }

    clicked
}
