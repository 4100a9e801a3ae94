//! Add-pet modal dialog.
//!
//! Visibility and field values live in [`ModalState`]; this component only
//! binds inputs to it. Clicking the backdrop or the close icon closes the
//! dialog, clicks inside the dialog do not propagate to the backdrop.

use leptos::prelude::*;

use crate::state::modal::{ModalState, PetField};

#[component]
pub fn PetModal(modal: RwSignal<ModalState>, on_close: Callback<()>, on_submit: Callback<()>) -> impl IntoView {
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    view! {
        <Show when=move || modal.with(ModalState::is_open)>
            <div id="pet-modal" class="modal" on:click=move |_| on_close.run(())>
                <div
                    class="modal-content"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev| on_keydown.run(ev)
                    tabindex="0"
                >
                    <span class="close" title="Close" on:click=move |_| on_close.run(())>
                        "×"
                    </span>
                    <h2>"Add New Pet"</h2>
                    <form
                        id="pet-form"
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            on_submit.run(());
                        }
                    >
                        {PetField::ALL.into_iter().map(|field| view! { <FormInput modal=modal field=field/> }).collect_view()}
                        <button type="submit" class="btn btn-primary">"Add Pet"</button>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn FormInput(modal: RwSignal<ModalState>, field: PetField) -> impl IntoView {
    let input_id = format!("pet-{}", field.name());
    let min = (field == PetField::Age).then_some("0");

    view! {
        <div class="form-group">
            <label for=input_id.clone()>{field.label()}</label>
            <input
                id=input_id
                name=field.name()
                type=field.input_type()
                min=min
                required=field.required()
                prop:value=move || modal.with(|m| m.form.get(field).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    modal.update(|m| m.form.set(field, value));
                }
            />
        </div>
    }
}
