//! Labelled input with an inline validation message.

use leptos::prelude::*;

use crate::util::validation::{Field, ValidationErrors};

/// Text-like input bound to `value`, showing the message for `field` from `errors`.
#[component]
pub fn FormField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<ValidationErrors>,
    field: Field,
) -> impl IntoView {
    let error = move || errors.get().get(field);

    view! {
        <div class="form-field">
            <label class="form-field__label" for=id>
                {label}
            </label>
            <input
                id=id
                type=input_type
                class="form-field__input"
                class:form-field__input--invalid=move || error().is_some()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || error().is_some()>
                <p class="form-field__error">{move || error().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
