//! Sidebar panel — New Chat button and the recent-history summary list.

use egui::{self, RichText};
use crate::state::UiState;
use crate::theme::*;

/// What the caller should do after rendering the sidebar
#[derive(Debug, PartialEq, Eq)]
pub enum SidebarAction {
    /// Nothing clicked
    None,
    /// The user asked for a fresh session
    NewChat,
}

/// Render the sidebar. Returns the action for the caller to handle.
pub fn sidebar_panel(ui: &mut egui::Ui, state: &UiState) -> SidebarAction {
    let mut action = SidebarAction::None;

    egui::Frame::default()
        .fill(SIDEBAR_BG)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                if ui
                    .add_sized(
                        [ui.available_width(), 32.0],
                        egui::Button::new(
                            RichText::new("+  New Chat").color(TEXT_PRIMARY),
                        )
                        .fill(ACCENT)
                        .corner_radius(PANEL_ROUNDING),
                    )
                    .clicked()
                {
                    action = SidebarAction::NewChat;
                }

                ui.add_space(12.0);
                ui.label(RichText::new("Recent").color(TEXT_SECONDARY).small());
                ui.separator();

                for entry in &state.sidebar_entries {
                    let fill = if entry.active { BG_SURFACE } else { SIDEBAR_BG };
                    let color = if entry.active { TEXT_PRIMARY } else { TEXT_SECONDARY };
                    egui::Frame::default()
                        .fill(fill)
                        .corner_radius(PANEL_ROUNDING)
                        .inner_margin(6.0)
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(RichText::new(&entry.label).color(color));
                        });
                }
            });
        });

    action
}
