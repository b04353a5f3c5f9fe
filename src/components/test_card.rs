//! Card for a published test on the home page.

use leptos::prelude::*;

use crate::util::guard::test_detail_href;

#[component]
pub fn TestCard(id: String, title: String, description: String) -> impl IntoView {
    let href = test_detail_href(&id);
    view! {
        <article class="test-card">
            <h3 class="test-card__title">{title}</h3>
            <p class="test-card__description">{description}</p>
            <a class="btn btn--primary test-card__link" href=href>
                "View Test"
            </a>
        </article>
    }
}
