//! Font Awesome icon element.

use leptos::*;

use crate::view::Icon;

#[component]
pub fn FaIcon(icon: Icon) -> impl IntoView {
    view! { <i class=icon.class() aria-hidden="true"></i> }
}
