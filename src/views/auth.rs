//! Login and Signup Pages

use leptos::prelude::*;

use admin_core::forms::{FormErrors, LoginDraft, SignupDraft};
use admin_core::routes::Route;

use crate::context::{use_router, use_session};

fn error_line(errors: RwSignal<FormErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors.with(|e| {
            e.get(field).map(|msg| {
                let msg = msg.to_string();
                view! { <p class="field-error">{msg}</p> }
            })
        })
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let draft = RwSignal::new(LoginDraft::default());
    let errors = RwSignal::new(FormErrors::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match session.login(&draft.get_untracked()) {
            Ok(()) => {
                errors.set(FormErrors::new());
                router.navigate(Route::Dashboard(None));
            }
            Err(e) => errors.set(e),
        }
    };

    view! {
        <section class="auth-card">
            <h1>"Welcome back"</h1>
            <form on:submit=submit>
                <label>
                    "Email"
                    <input
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || draft.with(|d| d.email.clone())
                        on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                    />
                    {error_line(errors, "email")}
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=move || draft.with(|d| d.password.clone())
                        on:input=move |ev| draft.update(|d| d.password = event_target_value(&ev))
                    />
                    {error_line(errors, "password")}
                </label>
                <button type="submit" class="btn full-width">"Login"</button>
            </form>
            <p class="auth-switch">
                "Don't have an account? "
                <a href="/signup" on:click=move |ev| {
                    ev.prevent_default();
                    router.navigate(Route::Signup);
                }>"Register"</a>
            </p>
        </section>
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let draft = RwSignal::new(SignupDraft::default());
    let errors = RwSignal::new(FormErrors::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        let result = current.validate().and_then(|_| session.login(&current.credentials()));
        match result {
            Ok(()) => router.navigate(Route::Dashboard(None)),
            Err(e) => errors.set(e),
        }
    };

    view! {
        <section class="auth-card">
            <h1>"Create an account"</h1>
            <form on:submit=submit>
                <label>
                    "Name"
                    <input
                        type="text"
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                    {error_line(errors, "name")}
                </label>
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=move || draft.with(|d| d.email.clone())
                        on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                    />
                    {error_line(errors, "email")}
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=move || draft.with(|d| d.password.clone())
                        on:input=move |ev| draft.update(|d| d.password = event_target_value(&ev))
                    />
                    {error_line(errors, "password")}
                </label>
                <label>
                    "Confirm password"
                    <input
                        type="password"
                        prop:value=move || draft.with(|d| d.confirm.clone())
                        on:input=move |ev| draft.update(|d| d.confirm = event_target_value(&ev))
                    />
                    {error_line(errors, "confirm")}
                </label>
                <button type="submit" class="btn full-width">"Register"</button>
            </form>
            <p class="auth-switch">
                "Already have an account? "
                <a href="/login" on:click=move |ev| {
                    ev.prevent_default();
                    router.navigate(Route::Login);
                }>"Login"</a>
            </p>
        </section>
    }
}
