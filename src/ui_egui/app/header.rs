//! List header: title, launch count, sync stamp and the filter chips.

use super::LaunchApp;
use crate::services::filter::LaunchFilter;
use crate::utils::date::format_short_time;
use egui::{Color32, RichText};

const NOTICE_COLOR: Color32 = Color32::from_rgb(0xFF, 0xAB, 0x40);

impl LaunchApp {
    pub(super) fn render_header(&mut self, ctx: &egui::Context) {
        let theme = &self.theme;
        let mut picked: Option<LaunchFilter> = None;

        let panel = egui::Frame::none()
            .fill(theme.app_background)
            .inner_margin(egui::Margin::symmetric(16.0, 12.0));

        egui::TopBottomPanel::top("launch_header")
            .frame(panel)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new("◈").size(20.0).color(theme.accent));
                            ui.label(
                                RichText::new("U.S. Launches")
                                    .size(20.0)
                                    .strong()
                                    .color(theme.text_primary),
                            );
                        });
                        ui.label(
                            RichText::new(format!("{} UPCOMING", self.snapshot.len()))
                                .monospace()
                                .size(10.0)
                                .color(theme.text_muted),
                        );
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let synced = format_short_time(self.sync.last_synced(), self.timezone);
                        ui.vertical(|ui| {
                            ui.label(RichText::new("SYNCED").size(9.0).color(theme.text_muted));
                            ui.label(
                                RichText::new(synced)
                                    .monospace()
                                    .size(11.0)
                                    .color(theme.text_secondary),
                            )
                            .on_hover_text(format!("Data: {}", self.board.origin()));
                        });
                    });
                });

                if let Some(notice) = &self.startup_notice {
                    ui.add_space(4.0);
                    ui.label(RichText::new(notice).size(11.0).color(NOTICE_COLOR));
                }

                ui.add_space(8.0);
                ui.horizontal_wrapped(|ui| {
                    for option in &self.filter_options {
                        let selected = self.view.filter == option.filter;
                        let text = RichText::new(&option.label).size(12.0).color(if selected {
                            theme.accent
                        } else {
                            theme.text_secondary
                        });
                        if ui.selectable_label(selected, text).clicked() {
                            picked = Some(option.filter.clone());
                        }
                    }
                });
            });

        if let Some(filter) = picked {
            self.apply_filter(filter);
        }
    }
}
