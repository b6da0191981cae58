use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::models::{Message, MessageRole};
use crate::state::AppState;

/// Message history, pending indicator and input.
#[component]
pub fn ChatArea() -> impl IntoView {
    let state = expect_context::<AppState>();
    let bottom = NodeRef::<html::Div>::new();

    // Keep the newest message (or the pending indicator) in view.
    Effect::new(move |_| {
        state.session.track();
        if let Some(el) = bottom.get() {
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    });

    view! {
        <main class="chat-area">
            <div class="messages-container">
                {move || {
                    state
                        .session
                        .with(|s| {
                            s.messages()
                                .iter()
                                .cloned()
                                .map(|msg| view! { <MessageBubble msg=msg /> })
                                .collect_view()
                        })
                }}
                // Pending request (assistant thinking)
                <Show when=move || state.is_busy()>
                    <div class="message assistant">
                        <div class="role-label">"assistant"</div>
                        <div class="typing-indicator">"Thinking…"</div>
                    </div>
                </Show>
                <div class="scroll-anchor" node_ref=bottom></div>
            </div>

            <ChatInput />
        </main>
    }
}

/// A single chat message bubble. Content is markdown, shown as preformatted
/// text.
#[component]
fn MessageBubble(msg: Message) -> impl IntoView {
    let css_class = match msg.role {
        MessageRole::User => "message user",
        MessageRole::Assistant | MessageRole::System => "message assistant",
    };
    let time = msg.timestamp.format("%H:%M").to_string();

    view! {
        <div class=css_class>
            <div class="role-label">{msg.role.as_str()} " · " {time}</div>
            <div class="content">{msg.content}</div>
        </div>
    }
}

/// Chat input form with textarea and send button.
#[component]
fn ChatInput() -> impl IntoView {
    let state = expect_context::<AppState>();
    let (input, set_input) = signal(String::new());

    let is_sending = move || state.is_busy();

    let send = move || {
        let text = input.get_untracked();
        if text.trim().is_empty() || state.is_busy() {
            return;
        }
        set_input.set(String::new());
        state.send_message(text);
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send();
        }
    };

    view! {
        <div class="input-area">
            <div class="input-row">
                <textarea
                    rows="1"
                    placeholder="Type a message… (Enter to send, Shift+Enter for newline)"
                    prop:value=input
                    on:input=move |ev| {
                        set_input.set(event_target_value(&ev));
                    }
                    on:keydown=on_keydown
                    disabled=is_sending
                />
                <button
                    class="send-btn"
                    on:click=move |_| send()
                    disabled=move || is_sending() || input.get().trim().is_empty()
                >
                    {move || if is_sending() { "Sending…" } else { "Send" }}
                </button>
            </div>
        </div>
    }
}
