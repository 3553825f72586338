// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up the navigation bar and the two routes. "/admin" is not
// linked from the navigation.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::{AdminPage, HomePage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    view! {
        <Title text="My Deals App" />
        <Meta name="description" content="Hand-picked tech, fashion, and home deals" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        // Stylesheet link (Tailwind CSS)
        <Stylesheet id="leptos" href="/pkg/deals_storefront.css" />

        <Router>
            <div class="min-h-screen bg-gray-100 font-sans text-gray-900">
                <NavBar />
                <main>
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/admin") view=AdminPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Top navigation; only Home is linked
#[component]
fn NavBar() -> impl IntoView {
    view! {
        <nav class="bg-white shadow p-4 mb-6 flex justify-between items-center">
            <h1 class="text-xl font-bold text-blue-600">"My Deals App"</h1>
            <div class="space-x-4">
                <a href="/" class="hover:text-blue-500 font-medium">"Home"</a>
            </div>
        </nav>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="py-24 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "Back to Deals"
                </a>
            </div>
        </div>
    }
}
