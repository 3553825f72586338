// web_app/components/common.rs - Reusable UI components
//
// Small, stateless pieces shared by the storefront and the admin panel.

use leptos::prelude::*;

/// Loading message with a spinner
#[component]
pub fn Loading(
    /// Message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-20">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-blue-600"></div>
            <span class="mt-4 text-gray-400 font-medium">{message}</span>
        </div>
    }
}

/// Dashed box used for "nothing to show" states
#[component]
pub fn EmptyState(
    /// Main line
    title: &'static str,
    /// Secondary hint
    #[prop(default = "")]
    hint: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center py-20 bg-gray-50 rounded-lg border border-dashed">
            <p class="text-xl text-gray-500 font-medium">{title}</p>
            {(!hint.is_empty()).then(|| view! {
                <p class="text-gray-400">{hint}</p>
            })}
        </div>
    }
}

/// Small uppercase label for categories
#[component]
pub fn Badge(children: Children) -> impl IntoView {
    view! {
        <span class="text-xs font-semibold text-gray-500 mb-1 uppercase tracking-wider">
            {children()}
        </span>
    }
}

/// Text input bound to a string signal
#[component]
pub fn TextInput(
    /// The current value
    value: RwSignal<String>,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input type (text, search, password, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "w-full px-4 py-2 border border-gray-300 rounded-lg \
                      focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                      outline-none transition-shadow shadow-sm";

    view! {
        <input
            type=input_type
            placeholder=placeholder
            class=format!("{} {}", base_class, class)
            prop:value=move || value.get()
            on:input=move |ev| {
                value.set(event_target_value(&ev));
            }
        />
    }
}

/// Labelled text field whose value lives outside a plain signal
#[component]
pub fn FormField(
    /// Uppercase label above the field
    label: &'static str,
    /// Current value
    value: Signal<String>,
    /// Called with the new text on every keystroke
    on_input: Callback<String>,
    /// Render a textarea instead of a single-line input
    #[prop(default = false)]
    multiline: bool,
    /// Additional CSS classes for the input
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let input_class = format!("w-full p-2 border rounded {}", class);

    let field = if multiline {
        view! {
            <textarea
                class=format!("{} h-24 text-sm text-gray-700", input_class)
                autocomplete="off"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                class=input_class
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <div>
            <label class="text-xs font-bold text-gray-500 uppercase">{label}</label>
            {field}
        </div>
    }
}
