//! Stacked transient notices, newest last.

use leptos::prelude::*;

use crate::state::notices::NoticeQueue;

#[component]
pub fn NoticeStack(notices: RwSignal<NoticeQueue>) -> impl IntoView {
    view! {
        <div class="messages" role="status" aria-live="polite">
            <For
                each=move || notices.with(|q| q.items().to_vec())
                key=|notice| notice.id
                children=|notice| {
                    view! {
                        <div class=format!("message {}", notice.level.css_class())>{notice.text}</div>
                    }
                }
            />
        </div>
    }
}
