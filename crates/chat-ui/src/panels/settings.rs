//! Settings panel. Edits a draft copy; nothing touches the committed
//! settings until the user clicks Save. Cancel throws the draft away.

use egui::{self, RichText, Vec2};

use chat_types::settings::{ChatModel, SettingsDraft, TEMPERATURE_MAX, TEMPERATURE_MIN, TEMPERATURE_STEP};

use crate::theme::*;

/// What the caller should do after rendering the settings panel
pub enum SettingsAction {
    /// Keep editing
    None,
    /// Commit the draft as the new settings
    Save,
    /// Discard the draft, committed settings stay as they were
    Cancel,
}

/// Render the settings panel over the given draft.
pub fn settings_panel(ui: &mut egui::Ui, draft: &mut SettingsDraft) -> SettingsAction {
    let mut action = SettingsAction::None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Settings").color(TEXT_PRIMARY));
            ui.separator();

            // API Key (masked)
            ui.label(RichText::new("API Key").color(TEXT_SECONDARY).small());
            let api_key_edit = egui::TextEdit::singleline(draft.api_key_mut())
                .password(true)
                .hint_text("sk-...");
            ui.add(api_key_edit);

            ui.add_space(4.0);

            // Model: fixed set of known identifiers
            ui.label(RichText::new("Model").color(TEXT_SECONDARY).small());
            let selected = draft.model();
            egui::ComboBox::from_id_salt("chat_model")
                .selected_text(selected.label())
                .show_ui(ui, |ui| {
                    for m in ChatModel::all() {
                        ui.selectable_value(draft.model_mut(), *m, m.label());
                    }
                });

            ui.add_space(4.0);

            // Temperature: the control enforces range and step
            ui.label(
                RichText::new(format!("Temperature ({:.1})", draft.temperature()))
                    .color(TEXT_SECONDARY)
                    .small(),
            );
            ui.add(
                egui::Slider::new(draft.temperature_mut(), TEMPERATURE_MIN..=TEMPERATURE_MAX)
                    .step_by(TEMPERATURE_STEP as f64),
            );

            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let save_btn = ui.add(
                    egui::Button::new(
                        RichText::new("Save Changes").color(TEXT_INVERTED).strong(),
                    )
                    .fill(ACCENT)
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(120.0, 28.0)),
                );
                if save_btn.clicked() {
                    action = SettingsAction::Save;
                }

                if ui
                    .add(
                        egui::Button::new(RichText::new("Cancel").color(TEXT_PRIMARY))
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(80.0, 28.0)),
                    )
                    .clicked()
                {
                    action = SettingsAction::Cancel;
                }
            });
        });

    action
}
