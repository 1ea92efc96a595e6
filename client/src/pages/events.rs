//! Home page listing upcoming events.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. Fetches the event list once on mount and routes like clicks
//! through the debounced toggle; signed-out visitors are sent to log in.

use leptos::prelude::*;

use crate::components::event_card::EventCard;
use crate::config::ClientConfig;
use crate::state::auth_store::AuthStore;
use crate::state::events::EventsState;
use crate::state::likes::{LikeIntent, LikeToggle};
use crate::util::navigation::install_navigation_request;

/// Shown instead of the backend error detail when the list cannot load.
pub const LOAD_ERROR: &str = "Failed to load events. Please try again later.";
pub const EMPTY_MESSAGE: &str = "No events available";

#[component]
pub fn EventsPage() -> impl IntoView {
    let store = expect_context::<AuthStore>();
    let config = expect_context::<ClientConfig>();
    let events = RwSignal::new(EventsState::default());
    let navigate_to = install_navigation_request();
    let toggle = LikeToggle::default();

    #[cfg(feature = "hydrate")]
    {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_events(&config).await {
                Ok(list) => events.update(|state| state.load(list)),
                Err(e) => {
                    leptos::logging::error!("fetching events failed: {e}");
                    events.update(|state| state.load_failed(LOAD_ERROR));
                }
            }
        });
    }

    let on_like = Callback::new(move |event_id: i64| match toggle.invoke(&store.state().get_untracked(), event_id) {
        LikeIntent::Ignore => {}
        LikeIntent::RedirectToLogin(path) => navigate_to.set(Some(path.to_owned())),
        LikeIntent::Schedule(ticket) => {
            #[cfg(feature = "hydrate")]
            {
                let toggle = toggle.clone();
                let store = store.clone();
                let config = config.clone();
                leptos::task::spawn_local(async move {
                    if !toggle.settle(&ticket).await {
                        return;
                    }
                    crate::state::likes::send_like(events, event_id, || async move {
                        let token = store.id_token(false).await?;
                        crate::net::api::like_event(&config, event_id, &token).await
                    })
                    .await;
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (ticket, &config);
            }
        }
    });

    view! {
        <section class="events-page">
            <h1 class="events-page__title">"Upcoming Events"</h1>
            {move || {
                let state = events.get();
                if state.loading {
                    return view! { <p class="events-page__status">"Loading events..."</p> }.into_any();
                }
                if let Some(error) = state.error {
                    return view! { <p class="events-page__error">{error}</p> }.into_any();
                }
                if state.items.is_empty() {
                    return view! { <p class="events-page__status">{EMPTY_MESSAGE}</p> }.into_any();
                }
                view! {
                    <div class="events-page__list">
                        {state
                            .items
                            .into_iter()
                            .map(|item| view! { <EventCard item=item on_like=on_like /> })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            }}
        </section>
    }
}
