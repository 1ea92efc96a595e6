//! Site footer.

use leptos::prelude::*;

use crate::util::routes::NAV_ROUTES;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <nav class="site-footer__links">
                {NAV_ROUTES
                    .iter()
                    .map(|route| view! { <a class="site-footer__link" href=route.path()>{route.label()}</a> })
                    .collect_view()}
            </nav>
            <p class="site-footer__copy">"© Partyn · Tartu, Estonia"</p>
        </footer>
    }
}
