// web_app/components/search.rs - Storefront filter controls
//
// - SearchBar: live title search (no debounce)
// - CategoryFilter: "All" plus one pill per category

use leptos::prelude::*;
use super::common::TextInput;

/// Search input; every keystroke updates the filter
#[component]
pub fn SearchBar(
    /// Current search text
    query: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="relative flex-1">
            <TextInput
                value=query
                placeholder="Search deals..."
                input_type="search"
            />
        </div>
    }
}

/// Category pills
///
/// Exactly one category is selected at a time; "All" disables the filter.
#[component]
pub fn CategoryFilter(
    /// Options, "All" first
    options: Signal<Vec<String>>,
    /// Currently selected option
    selected: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            <For
                each=move || options.get()
                key=|option| option.clone()
                children=move |option| {
                    let value = option.clone();
                    let is_selected = {
                        let option = option.clone();
                        move || selected.get() == option
                    };
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if is_selected() {
                                    "px-4 py-1.5 rounded-full text-sm font-semibold bg-blue-600 text-white shadow"
                                } else {
                                    "px-4 py-1.5 rounded-full text-sm font-medium bg-white text-gray-700 \
                                     border border-gray-200 hover:bg-gray-50"
                                }
                            }
                            on:click=move |_| selected.set(value.clone())
                        >
                            {option}
                        </button>
                    }
                }
            />
        </div>
    }
}
