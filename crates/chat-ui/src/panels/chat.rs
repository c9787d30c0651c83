//! Chat panel: displays the conversation and the input field.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};

use chat_types::message::Sender;

use crate::state::{DisplayMessage, UiState};
use crate::theme::*;

/// Render the chat panel. Returns Some(message) when the user submits input.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<String> {
    let mut submitted = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("Chat").color(TEXT_PRIMARY).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let status_color = if state.is_busy() { ACCENT } else { SUCCESS };
                        ui.label(
                            RichText::new(&state.status_text)
                                .color(status_color)
                                .small(),
                        );
                    });
                });

                ui.separator();

                // Messages area
                let available_height = ui.available_height() - 60.0;
                let scroll_requested = state.take_scroll_request();
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if state.messages.is_empty() {
                            ui.centered_and_justified(|ui| {
                                ui.label(
                                    RichText::new("Start a conversation...")
                                        .color(TEXT_SECONDARY)
                                        .small(),
                                );
                            });
                            return;
                        }

                        for entry in &state.messages {
                            render_message(ui, entry);
                            ui.add_space(4.0);
                        }

                        if scroll_requested {
                            ui.scroll_to_cursor(Some(Align::BOTTOM));
                        }
                    });

                ui.add_space(8.0);

                // Input area
                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .hint_text("Type your message...")
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add(input);

                    // Sending is allowed while a turn is in flight: the
                    // submission queues behind it.
                    let send_enabled = !state.input_text.trim().is_empty();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(TEXT_INVERTED))
                            .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    // Submit on Enter or button click
                    if (response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        && !state.input_text.trim().is_empty())
                        || send_btn.clicked()
                    {
                        submitted = Some(state.input_text.trim().to_string());
                        state.input_text.clear();
                        response.request_focus();
                    }
                });
            });
        });

    submitted
}

fn render_message(ui: &mut egui::Ui, entry: &DisplayMessage) {
    // User on the right, assistant on the left, like any chat client.
    let (label, align, bubble_fill, text_color) = match entry.sender {
        Sender::User => ("You", Align::Max, ACCENT, TEXT_INVERTED),
        Sender::Assistant => ("Assistant", Align::Min, BG_SECONDARY, TEXT_PRIMARY),
    };

    ui.with_layout(Layout::top_down(align), |ui| {
        egui::Frame::default()
            .fill(bubble_fill)
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_max_width(ui.available_width() * 0.7);
                ui.label(RichText::new(label).color(text_color).strong().small());
                ui.label(RichText::new(&entry.text).color(text_color));
            });
        ui.label(
            RichText::new(&entry.timestamp)
                .color(TEXT_SECONDARY)
                .small(),
        );
    });
}
