use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::GenerationSettings;
use crate::session::ChatSession;

/// Shared application state, provided via Leptos context.
#[derive(Clone, Copy)]
pub struct AppState {
    pub session: RwSignal<ChatSession>,
    pub settings: RwSignal<GenerationSettings>,
    pub show_settings: RwSignal<bool>,
}

impl AppState {
    /// Create a new `AppState` and provide it in the current Leptos context.
    pub fn provide() -> Self {
        let state = Self {
            session: RwSignal::new(ChatSession::default()),
            settings: RwSignal::new(GenerationSettings::default()),
            show_settings: RwSignal::new(false),
        };
        provide_context(state);
        state
    }

    pub fn is_busy(&self) -> bool {
        self.session.with(|s| s.is_busy())
    }

    /// Submit a message. Ignored while a request is pending.
    pub fn send_message(&self, text: String) {
        let settings = self.settings.get_untracked();
        let mut request = None;
        self.session.update(|s| request = s.begin_turn(&text, &settings));
        let Some(request) = request else {
            return;
        };

        let session = self.session;
        spawn_local(async move {
            let outcome = api::send_chat(&request).await;
            session.update(|s| s.complete_turn(outcome));
        });
    }

    pub fn clear(&self) {
        self.session.update(|s| s.reset());
    }
}
