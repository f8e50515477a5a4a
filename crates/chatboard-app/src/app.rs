//! Main egui application — composes the panels and manages the session.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, CentralPanel, SidePanel};

use chatboard_core::event_bus::EventBus;
use chatboard_core::ports::{ChatApiPort, NavigationPort};
use chatboard_core::redirect::LoginRedirect;
use chatboard_core::session::SessionController;
use chatboard_platform::nav::{self, BrowserNavigator};
use chatboard_platform::HttpChatApi;
use chatboard_types::config::ClientConfig;
use chatboard_types::event::SessionEvent;
use chatboard_ui::panels::{chat, sidebar};
use chatboard_ui::panels::sidebar::SidebarAction;
use chatboard_ui::state::UiState;
use chatboard_ui::theme;

/// The main application state
pub struct ChatboardApp {
    ui_state: UiState,
    config: ClientConfig,
    event_bus: EventBus,
    session: Rc<RefCell<SessionController>>,
    api: Rc<dyn ChatApiPort>,
    /// One-shot: repeated auth failures never stack navigations
    login_redirect: Rc<LoginRedirect>,
    first_frame: bool,
}

impl ChatboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = ClientConfig::default();
        let event_bus = EventBus::new();
        let session = Rc::new(RefCell::new(SessionController::new(
            config.clone(),
            event_bus.clone(),
        )));

        let api: Rc<dyn ChatApiPort> = Rc::new(HttpChatApi::new(config.api.clone()));
        let nav: Rc<dyn NavigationPort> = Rc::new(BrowserNavigator);
        let login_redirect = Rc::new(LoginRedirect::new(nav, config.auth.login_path.clone()));

        // Restore the persisted transcript on session start
        Self::load_history(session.clone(), api.clone());

        Self {
            ui_state: UiState::new(),
            config,
            event_bus,
            session,
            api,
            login_redirect,
            first_frame: true,
        }
    }

    /// Fetch remote history (async, failure handled inside the controller)
    fn load_history(session: Rc<RefCell<SessionController>>, api: Rc<dyn ChatApiPort>) {
        wasm_bindgen_futures::spawn_local(async move {
            SessionController::load_history_shared(session, api).await;
        });
    }

    /// Dispatch a user message to the session controller (async)
    fn dispatch_message(&self, text: String, ctx: &egui::Context) {
        let session = self.session.clone();
        let api = self.api.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let result = SessionController::submit_shared(session, &text, api).await;
            if let Err(e) = result {
                // Already rendered as an inline notice; keep a diagnostic
                log::error!("Chat exchange failed: {}", e);
            }
            ctx.request_repaint();
        });
    }

    /// Reset the session: clear remote history and restore the welcome
    /// screen (async)
    fn dispatch_reset(&self, ctx: &egui::Context) {
        let session = self.session.clone();
        let api = self.api.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            SessionController::reset_shared(session, api).await;
            ctx.request_repaint();
        });
    }

    /// Arm the login redirect after the configured notice delay.
    fn schedule_redirect(&mut self) {
        nav::redirect_after(
            self.login_redirect.clone(),
            self.config.auth.redirect_delay_ms,
        );
    }
}

impl eframe::App for ChatboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Drain events from the session controller
        let events = self.event_bus.drain();
        if !events.is_empty() {
            if events
                .iter()
                .any(|e| matches!(e, SessionEvent::AuthExpired))
            {
                self.schedule_redirect();
            }
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        if self.ui_state.is_busy() {
            ctx.request_repaint();
        }

        // ── History sidebar ──────────────────────────────────
        SidePanel::left("history_sidebar")
            .min_width(200.0)
            .max_width(280.0)
            .show(ctx, |ui| {
                if sidebar::sidebar_panel(ui, &self.ui_state) == SidebarAction::NewChat {
                    self.dispatch_reset(ctx);
                }
            });

        // ── Chat panel ───────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| {
            if let Some(user_msg) = chat::chat_panel(ui, &mut self.ui_state) {
                self.dispatch_message(user_msg, ctx);
            }
        });
    }
}
