// web_app/components/draft.rs - Admin draft form
//
// Preview and edit the draft held by the admin panel, plus the password
// field and the publish button.

use leptos::prelude::*;
use crate::web_app::admin::{AdminPanel, AdminPhase};
use crate::web_app::model::DraftField;
use super::common::FormField;

/// Editable preview of the draft
#[component]
pub fn DraftForm(
    /// Admin state
    panel: RwSignal<AdminPanel>,
    /// Called when the form is submitted
    on_publish: Callback<()>,
) -> impl IntoView {
    let field_value = move |field: DraftField| {
        Signal::derive(move || panel.with(|p| field.get(&p.draft).to_string()))
    };
    let field_input = move |field: DraftField| {
        Callback::new(move |value: String| panel.update(|p| p.edit(field, value)))
    };

    let image_url = move || panel.with(|p| p.draft.image_url.clone());
    let publishing = move || panel.with(|p| p.phase == AdminPhase::Publishing);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_publish.run(());
    };

    view! {
        <form on:submit=on_submit class="space-y-4" autocomplete="off">
            // Decoys so the browser does not autofill the real fields
            <input type="text" name="fake-email" style="display: none" autocomplete="username" />
            <input type="password" name="fake-password" style="display: none" autocomplete="current-password" />

            <div class="p-4 border rounded-lg bg-gray-50">
                <Show when=move || !image_url().is_empty()>
                    <img
                        src=image_url
                        alt="Preview"
                        class="h-40 mx-auto object-contain mb-4 bg-white rounded p-2 border"
                    />
                </Show>

                <div class="grid grid-cols-2 gap-4">
                    <FormField
                        label=DraftField::Category.label()
                        value=field_value(DraftField::Category)
                        on_input=field_input(DraftField::Category)
                        class="font-medium"
                    />
                    <FormField
                        label=DraftField::Price.label()
                        value=field_value(DraftField::Price)
                        on_input=field_input(DraftField::Price)
                        class="font-medium text-green-700"
                    />
                </div>

                <div class="mt-3 space-y-3">
                    <FormField
                        label=DraftField::Title.label()
                        value=field_value(DraftField::Title)
                        on_input=field_input(DraftField::Title)
                        class="font-bold"
                    />
                    <FormField
                        label=DraftField::ImageUrl.label()
                        value=field_value(DraftField::ImageUrl)
                        on_input=field_input(DraftField::ImageUrl)
                    />
                    <FormField
                        label=DraftField::Link.label()
                        value=field_value(DraftField::Link)
                        on_input=field_input(DraftField::Link)
                    />
                    <FormField
                        label=DraftField::Description.label()
                        value=field_value(DraftField::Description)
                        on_input=field_input(DraftField::Description)
                        multiline=true
                    />
                </div>
            </div>

            <button
                type="submit"
                disabled=publishing
                class="w-full bg-green-600 text-white py-3 rounded-lg font-bold text-lg \
                       hover:bg-green-700 shadow-lg disabled:opacity-50 transition-all"
            >
                {move || if publishing() { "Publishing..." } else { "Publish Product 🚀" }}
            </button>
        </form>
    }
}

/// Shared admin password input
#[component]
pub fn SecretInput(
    /// Admin state
    panel: RwSignal<AdminPanel>,
) -> impl IntoView {
    view! {
        <div>
            <label class="text-sm font-bold text-red-500">"Admin Password"</label>
            <input
                type="password"
                class="w-full p-2 border border-red-200 rounded focus:border-red-500 outline-none"
                placeholder="Enter Secret Key"
                autocomplete="new-password"
                prop:value=move || panel.with(|p| p.secret.clone())
                on:input=move |ev| panel.update(|p| p.set_secret(event_target_value(&ev)))
            />
        </div>
    }
}
