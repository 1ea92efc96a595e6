//! Signed-in user's profile card.

use leptos::prelude::*;

use crate::state::auth_store::AuthStore;

pub const PHOTO_PLACEHOLDER: &str = "https://via.placeholder.com/150";
pub const NO_DISPLAY_NAME: &str = "No display name";

/// Mounted behind `RequireAuth`; renders nothing if the user vanishes mid-render.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<AuthStore>().state();

    view! {
        <section class="profile-page">
            {move || {
                auth.with(|state| state.user.clone())
                    .map(|user| {
                        view! {
                            <div class="profile-card">
                                <h1 class="profile-card__title">"Profile"</h1>
                                <img
                                    class="profile-card__photo"
                                    src=user.photo_url.unwrap_or_else(|| PHOTO_PLACEHOLDER.to_owned())
                                    alt="Profile"
                                />
                                <p class="profile-card__name">
                                    {user.display_name.unwrap_or_else(|| NO_DISPLAY_NAME.to_owned())}
                                </p>
                                <p class="profile-card__email">{user.email.unwrap_or_default()}</p>
                            </div>
                        }
                    })
            }}
        </section>
    }
}
