//! File panel: shows the current selection and offers the picker.

use egui::{self, RichText};

use chat_types::selection::FileSelection;

use crate::theme::*;

/// What the caller should do after rendering the file panel
pub enum FileAction {
    None,
    /// Open the native file picker
    PickClicked,
}

pub fn file_panel(ui: &mut egui::Ui, selection: &FileSelection) -> FileAction {
    let mut action = FileAction::None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.label(RichText::new("Document").color(TEXT_PRIMARY).strong());
            ui.add_space(2.0);

            match selection.display_name() {
                Some(name) => {
                    ui.label(RichText::new(name).color(SUCCESS).small())
                        .on_hover_text(selection.path());
                }
                None => {
                    ui.label(
                        RichText::new("No file selected")
                            .color(TEXT_SECONDARY)
                            .small()
                            .italics(),
                    );
                }
            }

            ui.add_space(4.0);
            if ui.button("Select File...").clicked() {
                action = FileAction::PickClicked;
            }
        });

    action
}
