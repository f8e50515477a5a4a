//! Chat panel — welcome screen, transcript, typing indicator, input field.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use chatboard_types::block::ContentBlock;
use chatboard_types::event::DisplayState;
use chatboard_types::message::Role;
use crate::state::{ChatEntry, UiState};
use crate::theme::*;

/// Clickable prompts shown on the welcome screen.
const SUGGESTIONS: [&str; 3] = [
    "What can you help me with?",
    "Summarize my recent conversations",
    "Draft a short status update",
];

/// Render the chat panel. Returns Some(message) when the user submits
/// input or clicks a suggestion.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<String> {
    let mut submitted = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("Chatboard").color(TEXT_PRIMARY).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let status_color = if state.is_busy() { WARNING } else { SUCCESS };
                        ui.label(
                            RichText::new(&state.status_text)
                                .color(status_color)
                                .small(),
                        );
                    });
                });

                ui.separator();

                let available_height = ui.available_height() - 60.0;
                match state.display {
                    DisplayState::Empty => {
                        if let Some(text) = welcome_screen(ui, available_height) {
                            submitted = Some(text);
                        }
                    }
                    DisplayState::Active => {
                        transcript_view(ui, state, available_height);
                    }
                }

                ui.add_space(8.0);

                // Input area
                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .hint_text("Type a message...")
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add(input);

                    let send_enabled =
                        !state.input_text.trim().is_empty() && !state.is_busy();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                            .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    // Submit on Enter or button click
                    if (response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        && send_enabled)
                        || send_btn.clicked()
                    {
                        let text = state.input_text.trim().to_string();
                        submitted = Some(text);
                        state.input_text.clear();
                        response.request_focus();
                    }
                });
            });
        });

    submitted
}

/// Welcome screen shown while the session is empty.
fn welcome_screen(ui: &mut egui::Ui, height: f32) -> Option<String> {
    let mut picked = None;

    ui.allocate_ui(Vec2::new(ui.available_width(), height), |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(height * 0.25);
            ui.label(
                RichText::new("How can I help you today?")
                    .color(TEXT_PRIMARY)
                    .size(20.0)
                    .strong(),
            );
            ui.add_space(12.0);
            for suggestion in SUGGESTIONS {
                if ui
                    .add(
                        egui::Button::new(
                            RichText::new(suggestion).color(TEXT_SECONDARY),
                        )
                        .fill(BG_SECONDARY)
                        .corner_radius(PANEL_ROUNDING),
                    )
                    .clicked()
                {
                    picked = Some(suggestion.to_string());
                }
            }
        });
    });

    picked
}

/// The scrolling transcript, with the typing indicator at the bottom.
fn transcript_view(ui: &mut egui::Ui, state: &UiState, height: f32) {
    ScrollArea::vertical()
        .max_height(height)
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for entry in &state.messages {
                render_message(ui, entry);
                ui.add_space(4.0);
            }

            if state.typing {
                egui::Frame::default()
                    .fill(BG_SECONDARY)
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        ui.label(RichText::new("AI").color(SUCCESS).strong().small());
                        ui.label(RichText::new("● ● ●").color(TEXT_SECONDARY));
                    });
            }
        });
}

fn render_message(ui: &mut egui::Ui, entry: &ChatEntry) {
    let (label, label_color) = match entry.role {
        Role::User => ("You", ACCENT),
        Role::Assistant => ("AI", SUCCESS),
    };

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(label).color(label_color).strong().small());
            for block in &entry.blocks {
                render_block(ui, block);
            }
        });
}

fn render_block(ui: &mut egui::Ui, block: &ContentBlock) {
    match block {
        ContentBlock::Paragraph { lines } => {
            ui.label(RichText::new(lines.join("\n")).color(TEXT_PRIMARY));
        }
        ContentBlock::List { items } => {
            for item in items {
                ui.horizontal_top(|ui| {
                    ui.label(RichText::new("•").color(TEXT_SECONDARY));
                    ui.label(RichText::new(item).color(TEXT_PRIMARY));
                });
            }
        }
    }
}
