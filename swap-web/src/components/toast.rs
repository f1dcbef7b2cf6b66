//! Transient notification banner

use leptos::prelude::*;

use crate::state::notify::use_notify_context;

#[component]
pub fn Toast() -> impl IntoView {
    let notify = use_notify_context();

    view! {
        {move || notify.message.get().map(|text| view! {
            <div class="toast" role="alert" on:click=move |_| notify.dismiss()>
                {text}
            </div>
        })}
    }
}
