//! Error Banner Component
//!
//! Dismissible message that hides itself after a timeout.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ErrorBanner(message: RwSignal<Option<String>>, timeout_ms: u32) -> impl IntoView {
    // Bumped per message so an older timer never hides a newer one
    let generation = StoredValue::new(0u32);

    Effect::new(move |_| {
        if message.get().is_none() {
            return;
        }
        generation.update_value(|g| *g += 1);
        let current = generation.get_value();
        spawn_local(async move {
            TimeoutFuture::new(timeout_ms).await;
            // The view may be gone by now
            if generation.try_get_value() == Some(current) {
                message.try_set(None);
            }
        });
    });

    view! {
        {move || message.get().map(|text| view! {
            <div class="error-banner" role="alert">
                <span>{text}</span>
                <button class="banner-close" on:click=move |_| message.set(None)>"×"</button>
            </div>
        })}
    }
}
