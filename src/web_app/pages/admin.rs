// web_app/pages/admin.rs - Hidden admin page
//
// Paste a link, let the backend pre-fill the draft, edit, publish. Existing
// listings can be deleted. Both writes carry the admin password header and
// re-fetch the list only after the backend accepted them.

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::web_app::admin::{self, AdminNotice, AdminPanel, AdminPhase, MutationOutcome};
use crate::web_app::client::ApiClient;
use crate::web_app::components::*;
use crate::web_app::dialogs;
use crate::web_app::model::Product;

/// Admin panel page
#[component]
pub fn AdminPage() -> impl IntoView {
    let panel = RwSignal::new(AdminPanel::new());
    let client = ApiClient::default();

    let reload = {
        let client = client.clone();
        move || {
            let client = client.clone();
            spawn_local(async move {
                let result = client.list_products().await;
                panel.update(|p| p.finish_load(result));
            });
        }
    };

    Effect::new(move |_| reload());

    let on_analyze = {
        let client = client.clone();
        move |_| {
            let url = match panel.try_update(|p| p.begin_analyze()) {
                Some(Ok(url)) => url,
                Some(Err(notice)) => return dialogs::alert(&notice.to_string()),
                None => return,
            };
            let client = client.clone();
            spawn_local(async move {
                let result = admin::analyze(&client, &url).await;
                if let Some(notice) = panel.try_update(|p| p.finish_analyze(result)).flatten() {
                    dialogs::alert(&notice.to_string());
                }
            });
        }
    };

    let on_publish = Callback::new({
        let client = client.clone();
        move |()| {
            let request = match panel.try_update(|p| p.begin_publish()) {
                Some(Ok(request)) => request,
                Some(Err(notice)) => return dialogs::alert(&notice.to_string()),
                None => return,
            };
            let client = client.clone();
            spawn_local(async move {
                let outcome = admin::publish(&client, &request).await;
                if let Some(notice) = settle_publish(panel, outcome) {
                    dialogs::alert(&notice.to_string());
                }
            });
        }
    });

    let on_delete = Callback::new({
        let client = client.clone();
        move |product: Product| {
            let request = match panel.with_untracked(|p| p.prepare_delete(&product)) {
                Ok(request) => request,
                Err(notice) => return dialogs::alert(&notice.to_string()),
            };
            if !dialogs::confirm(&request.prompt) {
                return;
            }
            panel.update(|p| p.begin_delete(&request));

            let client = client.clone();
            spawn_local(async move {
                let outcome = admin::delete(&client, &request).await;
                if let Some(notice) = panel.try_update(|p| p.finish_delete(outcome)).flatten() {
                    dialogs::alert(&notice.to_string());
                }
            });
        }
    });

    let busy = Signal::derive(move || panel.with(|p| p.is_busy()));
    let analyzing = move || panel.with(|p| p.phase == AdminPhase::Analyzing);
    let products = Signal::derive(move || panel.with(|p| p.products.clone()));

    view! {
        <div class="max-w-xl mx-auto p-6 bg-white shadow-xl rounded-xl mt-10 space-y-8">
            <h1 class="text-3xl font-extrabold text-center text-indigo-600">"✨ AI Admin Panel"</h1>

            // 1. Link input
            <div class="p-6 bg-indigo-50 rounded-xl border border-indigo-100">
                <label class="block font-bold text-indigo-900 mb-2">"Paste Product Link"</label>
                <div class="flex gap-2">
                    <input
                        class="flex-grow p-3 border border-indigo-200 rounded-lg \
                               focus:ring-2 focus:ring-indigo-400 outline-none"
                        placeholder="Paste Amazon/Flipkart link here..."
                        prop:value=move || panel.with(|p| p.link_input.clone())
                        on:input=move |ev| panel.update(|p| p.set_link_input(event_target_value(&ev)))
                    />
                    <button
                        type="button"
                        class="bg-indigo-600 text-white px-6 rounded-lg font-bold \
                               hover:bg-indigo-700 disabled:opacity-50 transition-all shadow-md"
                        disabled=move || busy.get()
                        on:click=on_analyze
                    >
                        {move || if analyzing() { "Thinking..." } else { "Analyze 🪄" }}
                    </button>
                </div>
            </div>

            // 2. Password, shared by publish and delete
            <SecretInput panel=panel />

            // 3. Preview & edit
            <Show when=move || panel.with(|p| p.shows_form())>
                <DraftForm panel=panel on_publish=on_publish />
            </Show>

            // 4. Existing listings
            <section>
                <h2 class="text-xl font-bold text-gray-800 mb-3">"Published Products"</h2>
                {move || {
                    if panel.with(|p| p.loading_products) {
                        view! { <Loading message="Loading products..." /> }.into_any()
                    } else if products.with(|p| p.is_empty()) {
                        view! { <EmptyState title="No products yet." /> }.into_any()
                    } else {
                        view! {
                            <ul class="space-y-2">
                                <For
                                    each=move || products.get()
                                    key=|product| product.id
                                    children=move |product| view! {
                                        <ProductRow product=product on_delete=on_delete disabled=busy />
                                    }
                                />
                            </ul>
                        }.into_any()
                    }
                }}
            </section>
        </div>
    }
}

/// Apply a finished publish; `None` once the page has been unmounted
fn settle_publish(panel: RwSignal<AdminPanel>, outcome: MutationOutcome) -> Option<AdminNotice> {
    panel.try_update(|p| p.finish_publish(outcome))
}
