//! Main eframe application: composes the panels and talks to the worker.
//!
//! The committed settings and the UI projection live here, passed down to
//! panels explicitly; panels hand mutations back as actions. Session state
//! is owned by the worker's lifecycle and observed through the event bus.

use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};

use chat_core::event_bus::EventBus;
use chat_types::settings::{ChatSettings, SettingsDraft};
use chat_ui::panels::chat::chat_panel;
use chat_ui::panels::files::{file_panel, FileAction};
use chat_ui::panels::settings::{settings_panel, SettingsAction};
use chat_ui::state::UiState;
use chat_ui::theme;
use tokio::sync::mpsc;

use crate::worker::{self, AppCommand};

const TRANSCRIPT_PATH: &str = "chat-transcript.html";

pub struct ChatApp {
    ui_state: UiState,
    settings: ChatSettings,
    bus: EventBus,
    commands: mpsc::UnboundedSender<AppCommand>,
    first_frame: bool,
    // Keeps the worker alive for the life of the app.
    _runtime: tokio::runtime::Runtime,
}

impl ChatApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, std::io::Error> {
        let settings = ChatSettings::default();
        let bus = EventBus::new();

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        let commands = worker::spawn(&runtime, bus.clone(), cc.egui_ctx.clone(), settings.clone());

        Ok(Self {
            ui_state: UiState::new(),
            settings,
            bus,
            commands,
            first_frame: true,
            _runtime: runtime,
        })
    }

    fn send(&self, command: AppCommand) {
        if self.commands.send(command).is_err() {
            log::error!("worker task is gone; command dropped");
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Drain events from the worker
        let events = self.bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        if self.ui_state.is_busy() {
            ctx.request_repaint();
        }

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("RagChat")
                        .strong()
                        .color(theme::ACCENT)
                        .size(16.0),
                );
                ui.separator();
                ui.label(
                    RichText::new(format!(
                        "Model: {} | Temperature: {:.1}",
                        self.settings.model.label(),
                        self.settings.temperature
                    ))
                    .color(theme::TEXT_SECONDARY)
                    .small(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let settings_open = self.ui_state.settings_draft.is_some();
                    if ui.selectable_label(settings_open, "Settings").clicked() {
                        self.ui_state.settings_draft = if settings_open {
                            None
                        } else {
                            Some(SettingsDraft::open(&self.settings))
                        };
                    }
                    if ui.button("Save Transcript").clicked() {
                        self.send(AppCommand::SaveTranscript(TRANSCRIPT_PATH.into()));
                    }
                });
            });
        });

        // ── Settings side panel (draft; committed on Save only) ──
        if let Some(mut draft) = self.ui_state.settings_draft.take() {
            let mut keep_open = true;
            SidePanel::right("settings_panel")
                .min_width(280.0)
                .max_width(350.0)
                .show(ctx, |ui| match settings_panel(ui, &mut draft) {
                    SettingsAction::Save => {
                        self.settings = draft.clone().commit();
                        self.send(AppCommand::UpdateSettings(self.settings.clone()));
                        keep_open = false;
                    }
                    SettingsAction::Cancel => {
                        keep_open = false;
                    }
                    SettingsAction::None => {}
                });
            if keep_open {
                self.ui_state.settings_draft = Some(draft);
            }
        }

        // ── File side panel ──────────────────────────────────
        SidePanel::left("file_panel")
            .min_width(180.0)
            .max_width(240.0)
            .show(ctx, |ui| {
                if let FileAction::PickClicked = file_panel(ui, &self.ui_state.selection) {
                    self.send(AppCommand::PickFile);
                }
            });

        // ── Main content ─────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| {
            if let Some(text) = chat_panel(ui, &mut self.ui_state) {
                self.send(AppCommand::Submit(text));
            }
        });
    }
}
