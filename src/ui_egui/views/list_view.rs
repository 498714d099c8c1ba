//! Launch list: "Next Launch" hero card, launch cards and the empty state.

use std::time::Instant;

use egui::{RichText, Sense};

use super::widgets::{card_frame, countdown_readout, status_badge, WidgetScale};
use super::TimerSurface;
use crate::models::launch::LaunchRecord;
use crate::services::clock::Clock;
use crate::services::countdown::CountdownTimers;
use crate::services::filter::ListLayout;
use crate::ui_egui::theme::LaunchTheme;

/// What the user asked for while the list was on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    None,
    Open(String),
}

/// Everything the list needs for one frame.
pub struct ListFrame<'a, C: Clock> {
    pub theme: &'a LaunchTheme,
    pub timers: &'a mut CountdownTimers<TimerSurface>,
    pub clock: &'a C,
    pub now: Instant,
}

pub fn render_list<C: Clock>(
    ui: &mut egui::Ui,
    layout: &ListLayout<'_>,
    frame: &mut ListFrame<'_, C>,
) -> ListAction {
    let mut action = ListAction::None;

    if layout.is_empty() {
        render_empty_state(ui, frame.theme);
        return action;
    }

    if let Some(hero) = layout.hero {
        if render_hero(ui, hero, frame) {
            action = ListAction::Open(hero.id.clone());
        }
        ui.add_space(12.0);
    }

    for launch in &layout.cards {
        if render_card(ui, launch, frame) {
            action = ListAction::Open(launch.id.clone());
        }
        ui.add_space(8.0);
    }

    action
}

fn render_hero<C: Clock>(
    ui: &mut egui::Ui,
    launch: &LaunchRecord,
    frame: &mut ListFrame<'_, C>,
) -> bool {
    let theme = frame.theme;
    let countdown = frame.timers.observe(
        TimerSurface::Hero(launch.id.clone()),
        launch.launch_time,
        frame.now,
        frame.clock,
    );

    let inner = card_frame(theme.hero_background, theme.accent.gamma_multiply(0.3))
        .inner_margin(egui::Margin::same(20.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new("NEXT LAUNCH")
                    .size(10.0)
                    .color(theme.accent),
            );
            ui.label(
                RichText::new(&launch.mission)
                    .size(24.0)
                    .color(theme.text_primary),
            );
            ui.label(
                RichText::new(format!("{} · {}", launch.provider, launch.vehicle))
                    .size(13.0)
                    .color(theme.text_secondary),
            );
            ui.add_space(6.0);
            countdown_readout(ui, &launch.status, countdown, WidgetScale::Compact, theme);
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                status_badge(ui, &launch.status, WidgetScale::Compact);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new("Tap for details →")
                            .size(11.0)
                            .color(theme.text_muted),
                    );
                });
            });
        });

    let response = ui.interact(
        inner.response.rect,
        ui.id().with(("hero", &launch.id)),
        Sense::click(),
    );
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
        .on_hover_text(format!("Next launch: {}", launch.mission))
        .clicked()
}

fn render_card<C: Clock>(
    ui: &mut egui::Ui,
    launch: &LaunchRecord,
    frame: &mut ListFrame<'_, C>,
) -> bool {
    let theme = frame.theme;
    let countdown = frame.timers.observe(
        TimerSurface::Card(launch.id.clone()),
        launch.launch_time,
        frame.now,
        frame.clock,
    );
    let quick = countdown.quick_label();

    let (fill, border) = if countdown.is_within_day() {
        (theme.imminent_background, theme.imminent_border)
    } else {
        (theme.card_background, theme.card_border)
    };

    let inner = card_frame(fill, border).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(&launch.provider)
                        .size(11.0)
                        .color(theme.text_secondary),
                );
                ui.label(
                    RichText::new(&launch.mission)
                        .size(17.0)
                        .color(theme.text_primary),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                status_badge(ui, &launch.status, WidgetScale::Compact);
            });
        });
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(&launch.vehicle)
                        .size(12.0)
                        .color(theme.text_secondary),
                );
                ui.label(
                    RichText::new(launch.location_label())
                        .size(11.0)
                        .color(theme.text_muted),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let color = if countdown.is_within_day() {
                    theme.toggle_on
                } else {
                    theme.text_primary
                };
                ui.label(RichText::new(&quick).monospace().size(15.0).color(color));
            });
        });
    });

    let response = ui.interact(
        inner.response.rect,
        ui.id().with(("card", &launch.id)),
        Sense::click(),
    );
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
        .on_hover_text(format!(
            "{} by {}, {}. {}",
            launch.mission, launch.provider, launch.vehicle, quick
        ))
        .clicked()
}

fn render_empty_state(ui: &mut egui::Ui, theme: &LaunchTheme) {
    ui.add_space(60.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("No launches found")
                .size(16.0)
                .color(theme.text_secondary),
        );
        ui.label(
            RichText::new("Try adjusting your filters")
                .size(12.0)
                .color(theme.text_muted),
        );
    });
}
