//! Add Category Modal

use leptos::prelude::*;

use admin_core::forms::{CategoryDraft, FormErrors};

#[component]
pub fn AddCategoryModal(
    open: RwSignal<bool>,
    /// Receives the validated draft
    #[prop(into)]
    on_submit: Callback<CategoryDraft>,
) -> impl IntoView {
    let draft = RwSignal::new(CategoryDraft::default());
    let errors = RwSignal::new(FormErrors::new());

    let close = move || {
        draft.set(CategoryDraft::default());
        errors.set(FormErrors::new());
        open.set(false);
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        match current.validate() {
            Ok(_) => {
                on_submit.run(current);
                close();
            }
            Err(e) => errors.set(e),
        }
    };

    let error_for = move |field: &'static str| {
        move || errors.with(|e| e.get(field).map(|msg| {
            let msg = msg.to_string();
            view! { <p class="field-error">{msg}</p> }
        }))
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div class="modal modal-small" on:click=|ev| ev.stop_propagation()>
                    <header class="modal-header">
                        <h2>"Add Category"</h2>
                        <button class="modal-close" on:click=move |_| close()>"×"</button>
                    </header>
                    <form on:submit=submit>
                        <label>
                            "Name"
                            <input
                                type="text"
                                prop:value=move || draft.with(|d| d.name.clone())
                                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                            />
                            {error_for("name")}
                        </label>
                        <label>
                            "Description"
                            <textarea
                                prop:value=move || draft.with(|d| d.description.clone())
                                on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                            />
                            {error_for("description")}
                        </label>
                        <footer class="modal-footer">
                            <button type="button" class="btn btn-outline" on:click=move |_| close()>"Cancel"</button>
                            <button type="submit" class="btn">"Save"</button>
                        </footer>
                    </form>
                </div>
            </div>
        </Show>
    }
}
