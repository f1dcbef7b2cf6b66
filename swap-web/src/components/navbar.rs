//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::hooks::viewport::use_viewport_width;
use crate::utils::constants::COMPACT_LAYOUT_MAX_WIDTH;

#[component]
pub fn Navbar() -> impl IntoView {
    let width = use_viewport_width();
    let compact = move || {
        let current = width.get();
        current > 0.0 && current < COMPACT_LAYOUT_MAX_WIDTH
    };

    view! {
        <nav>
            <div style="max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: flex-start; align-items: center;">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">
                        {move || if compact() {
                            view! { <span class="accent">"SD"</span> }.into_any()
                        } else {
                            view! { <span><span class="accent">"Swap"</span>"Deck"</span> }.into_any()
                        }}
                    </span>
                </A>
            </div>
        </nav>
    }
}
