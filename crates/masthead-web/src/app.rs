//! Demo page hosting the header

use leptos::prelude::*;

use crate::components::Header;

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    let (last_query, set_last_query) = signal(None::<String>);

    view! {
        <div class="app">
            <Header on_search=Callback::new(move |q: String| {
                leptos::logging::log!("Search submitted: {:?}", q);
                set_last_query.set(Some(q));
            }) />
            <main class="content">
                <Show
                    when=move || last_query.get().is_some()
                    fallback=|| view! { <p class="hint">"Введіть запит у полі пошуку"</p> }
                >
                    <p class="search-echo">
                        "Запит: " {move || last_query.get().unwrap_or_default()}
                    </p>
                </Show>
            </main>
        </div>
    }
}
