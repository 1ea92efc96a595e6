//! Card component for one event in the home-page list.
//!
//! DESIGN
//! ======
//! Purely presentational: the like button reports the event id through
//! `on_like` and the page decides whether to send, redirect or ignore.

use leptos::prelude::*;

use crate::state::events::{EventItem, LikeStatus};
use crate::util::format::{DESCRIPTION_PREVIEW_CHARS, date_badge, price_label, time_range, truncate_description};

/// An event card with date badge, poster, details and like button.
#[component]
pub fn EventCard(item: EventItem, on_like: Callback<i64>) -> impl IntoView {
    let EventItem { event, liked, status } = item;
    let id = event.id;
    let (day, month) = date_badge(event.date_time);
    let hours = time_range(event.date_time, event.end_date_time);
    let price = price_label(event.ticket_price);
    let description = truncate_description(&event.description, DESCRIPTION_PREVIEW_CHARS);
    let like_label = if liked { "Unlike" } else { "Like" };

    view! {
        <article class="event-card" class:event-card--top-pick=event.top_pick>
            <div class="event-card__badge">
                <span class="event-card__day">{day}</span>
                <span class="event-card__month">{month}</span>
            </div>
            {event.image_url.map(|url| {
                view! { <img class="event-card__image" src=url alt=event.name.clone() /> }
            })}
            <div class="event-card__body">
                <h2 class="event-card__name">{event.name.clone()}</h2>
                <p class="event-card__description">{description}</p>
            </div>
            <div class="event-card__meta">
                <p class="event-card__location">{event.location}</p>
                <p class="event-card__time">{hours}</p>
                <p class="event-card__price">{price}</p>
                <button
                    class="event-card__like"
                    class:event-card__like--liked=liked
                    class:event-card__like--pending=status == LikeStatus::Pending
                    class:event-card__like--failed=status == LikeStatus::Failed
                    aria-label=like_label
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        on_like.run(id);
                    }
                >
                    <span class="event-card__like-icon">{if liked { "♥" } else { "♡" }}</span>
                    <span class="event-card__like-count">{event.likes}</span>
                </button>
            </div>
        </article>
    }
}
