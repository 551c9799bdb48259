//! Add Product Modal
//!
//! Collects a product draft, validates it on submit and previews attached
//! images through object URLs. Every URL is revoked when its image is
//! removed or the modal closes.

use leptos::prelude::*;

use admin_core::domain::SellingOption;
use admin_core::forms::{FormErrors, NewProduct, ProductDraft};

use crate::browser;

#[derive(Debug, Clone, PartialEq)]
struct ImagePreview {
    name: String,
    url: String,
}

fn field_error(errors: RwSignal<FormErrors>, field: &'static str) -> impl IntoView {
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
pub fn AddProductModal(
    open: RwSignal<bool>,
    #[prop(into)] categories: Signal<Vec<String>>,
    #[prop(into)] brands: Signal<Vec<String>>,
    #[prop(into)] on_submit: Callback<NewProduct>,
) -> impl IntoView {
    let draft = RwSignal::new(ProductDraft::new());
    let errors = RwSignal::new(FormErrors::new());
    let previews = RwSignal::new(Vec::<ImagePreview>::new());

    let reset = move || {
        previews.update(|list| {
            for preview in list.drain(..) {
                browser::revoke_object_url(&preview.url);
            }
        });
        draft.set(ProductDraft::new());
        errors.set(FormErrors::new());
    };

    let close = move || {
        reset();
        open.set(false);
    };

    let on_files = move |ev: web_sys::Event| {
        let files = browser::selected_files(&ev);
        browser::reset_file_input(&ev);
        for file in files {
            match browser::object_url(&file) {
                Ok(url) => previews.update(|list| list.push(ImagePreview { name: file.name(), url })),
                Err(e) => log::warn!("Could not preview {}: {}", file.name(), e),
            }
        }
    };

    let remove_image = move |index: usize| {
        previews.update(|list| {
            if index < list.len() {
                let removed = list.remove(index);
                browser::revoke_object_url(&removed.url);
            }
        });
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut current = draft.get_untracked();
        current.image_names = previews.with_untracked(|list| list.iter().map(|p| p.name.clone()).collect());
        match current.validate() {
            Ok(product) => {
                on_submit.run(product);
                close();
            }
            Err(e) => {
                log::debug!("Product form invalid: {}", e);
                errors.set(e);
            }
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <header class="modal-header">
                        <h2>"Add New Product"</h2>
                        <button class="modal-close" on:click=move |_| close()>"×"</button>
                    </header>
                    <form class="product-form" on:submit=submit>
                        <label>
                            "Name"
                            <input
                                type="text"
                                prop:value=move || draft.with(|d| d.name.clone())
                                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                            />
                            {field_error(errors, "name")}
                        </label>
                        <label>
                            "Price"
                            <input
                                type="number"
                                step="0.01"
                                prop:value=move || draft.with(|d| d.price.clone())
                                on:input=move |ev| draft.update(|d| d.price = event_target_value(&ev))
                            />
                            {field_error(errors, "price")}
                        </label>
                        <label>
                            "Category"
                            <input
                                type="text"
                                list="product-categories"
                                prop:value=move || draft.with(|d| d.category.clone())
                                on:input=move |ev| draft.update(|d| d.category = event_target_value(&ev))
                            />
                            <datalist id="product-categories">
                                {move || categories.get().into_iter().map(|c| view! { <option value=c /> }).collect_view()}
                            </datalist>
                            {field_error(errors, "category")}
                        </label>
                        <label>
                            "Brand"
                            <input
                                type="text"
                                list="product-brands"
                                prop:value=move || draft.with(|d| d.brand.clone())
                                on:input=move |ev| draft.update(|d| d.brand = event_target_value(&ev))
                            />
                            <datalist id="product-brands">
                                {move || brands.get().into_iter().map(|b| view! { <option value=b /> }).collect_view()}
                            </datalist>
                            {field_error(errors, "brand")}
                        </label>
                        <label class="full-width">
                            "Description"
                            <textarea
                                prop:value=move || draft.with(|d| d.description.clone())
                                on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                            />
                            {field_error(errors, "description")}
                        </label>

                        <fieldset class="dimensions">
                            <legend>"Shipping"</legend>
                            <label>
                                "Weight (kg)"
                                <input
                                    type="number"
                                    step="0.01"
                                    prop:value=move || draft.with(|d| d.weight.clone())
                                    on:input=move |ev| draft.update(|d| d.weight = event_target_value(&ev))
                                />
                                {field_error(errors, "weight")}
                            </label>
                            <label>
                                "Length (cm)"
                                <input
                                    type="number"
                                    prop:value=move || draft.with(|d| d.length.clone())
                                    on:input=move |ev| draft.update(|d| d.length = event_target_value(&ev))
                                />
                                {field_error(errors, "length")}
                            </label>
                            <label>
                                "Breadth (cm)"
                                <input
                                    type="number"
                                    prop:value=move || draft.with(|d| d.breadth.clone())
                                    on:input=move |ev| draft.update(|d| d.breadth = event_target_value(&ev))
                                />
                                {field_error(errors, "breadth")}
                            </label>
                            <label>
                                "Width (cm)"
                                <input
                                    type="number"
                                    prop:value=move || draft.with(|d| d.width.clone())
                                    on:input=move |ev| draft.update(|d| d.width = event_target_value(&ev))
                                />
                                {field_error(errors, "width")}
                            </label>
                        </fieldset>

                        <fieldset class="selling-options">
                            <legend>"Selling type"</legend>
                            {SellingOption::ALL
                                .into_iter()
                                .map(|option| view! {
                                    <label class="radio">
                                        <input
                                            type="radio"
                                            name="selling-option"
                                            value=option.as_str()
                                            prop:checked=move || draft.with(|d| d.selling_option == option.as_str())
                                            on:change=move |_| draft.update(|d| d.selling_option = option.as_str().to_string())
                                        />
                                        {option.label()}
                                    </label>
                                })
                                .collect_view()}
                            {field_error(errors, "selling_option")}
                        </fieldset>

                        <label>
                            "Schedule (optional)"
                            <input
                                type="datetime-local"
                                prop:value=move || draft.with(|d| d.scheduled_at.clone())
                                on:input=move |ev| draft.update(|d| d.scheduled_at = event_target_value(&ev))
                            />
                            {field_error(errors, "scheduled_at")}
                        </label>

                        <div class="image-upload full-width">
                            <label class="btn btn-outline">
                                "Add images"
                                <input type="file" accept="image/*" multiple class="hidden-input" on:change=on_files />
                            </label>
                            <div class="image-previews">
                                {move || previews
                                    .get()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, preview)| {
                                        let ImagePreview { name, url } = preview;
                                        let alt = name.clone();
                                        view! {
                                            <figure class="image-preview">
                                                <img src=url alt=alt />
                                                <figcaption>{name}</figcaption>
                                                <button
                                                    type="button"
                                                    class="image-remove"
                                                    on:click=move |_| remove_image(index)
                                                >
                                                    "×"
                                                </button>
                                            </figure>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <footer class="modal-footer">
                            <button type="button" class="btn btn-outline" on:click=move |_| close()>"Cancel"</button>
                            <button type="submit" class="btn">"Add Product"</button>
                        </footer>
                    </form>
                </div>
            </div>
        </Show>
    }
}
