//! Loading, empty, and error stand-ins for a collection section.

use leptos::prelude::*;

use crate::view::placeholder::PlaceholderView;

#[component]
pub fn CollectionPlaceholder(placeholder: PlaceholderView) -> impl IntoView {
    let class = placeholder.css_class();
    let icon_class = format!("fas fa-{}", placeholder.icon);
    let hint = placeholder.hint;
    let hint = (!hint.is_empty()).then(|| view! { <p>{hint}</p> });
    let title = placeholder.title;

    view! {
        <div class=class>
            <i class=icon_class></i>
            <h3>{title}</h3>
            {hint}
        </div>
    }
}
