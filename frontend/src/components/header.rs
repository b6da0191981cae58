use leptos::prelude::*;

use crate::models::MODEL_OPTIONS;
use crate::state::AppState;

/// Title bar with the settings toggle and the clear button.
#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <header class="app-header">
            <h1>"Chat Relay"</h1>
            <div class="header-actions">
                <button on:click=move |_| state.show_settings.update(|open| *open = !*open)>
                    "⚙️ Settings"
                </button>
                <button on:click=move |_| state.clear()>"🗑️ Clear"</button>
            </div>
        </header>
        <Show when=move || state.show_settings.get()>
            <SettingsPanel />
        </Show>
    }
}

#[component]
fn SettingsPanel() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="settings-panel">
            <label>
                "Model"
                <select
                    prop:value=move || state.settings.with(|s| s.model.clone())
                    on:change=move |ev| {
                        let model = event_target_value(&ev);
                        state.settings.update(|s| s.model = model);
                    }
                >
                    {MODEL_OPTIONS
                        .iter()
                        .map(|(id, label)| view! { <option value=*id>{*label}</option> })
                        .collect_view()}
                </select>
            </label>
            <label>
                {move || format!("Temperature: {:.1}", state.settings.with(|s| s.temperature))}
                <input
                    type="range"
                    min="0"
                    max="1"
                    step="0.1"
                    prop:value=move || state.settings.with(|s| s.temperature.to_string())
                    on:input=move |ev| {
                        if let Ok(t) = event_target_value(&ev).parse::<f64>() {
                            state.settings.update(|s| s.temperature = t);
                        }
                    }
                />
            </label>
        </div>
    }
}
