//! Static venue directory.

#[cfg(test)]
#[path = "locations_test.rs"]
mod locations_test;

use leptos::prelude::*;

/// A partner venue shown on the locations page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Venue {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
}

pub const VENUES: [Venue; 3] = [
    Venue {
        id: 1,
        name: "Genialistide Klubi",
        description: "Tartu's long-running home for indie gigs, club nights and late-night DJ sets.",
        image_url: "/assets/location1.jpg",
    },
    Venue {
        id: 2,
        name: "Naiiv",
        description: "A relaxed bar with craft drinks and small concerts in the old town.",
        image_url: "/assets/location2.jpg",
    },
    Venue {
        id: 3,
        name: "Kivi Baar",
        description: "Cellar bar hosting jam sessions, stand-up evenings and weekend parties.",
        image_url: "/assets/location3.jpg",
    },
];

#[component]
pub fn LocationsPage() -> impl IntoView {
    view! {
        <section class="locations-page">
            <h1 class="locations-page__title">"Locations"</h1>
            <div class="locations-page__list">
                {VENUES
                    .iter()
                    .map(|venue| {
                        view! {
                            <article class="location-card">
                                <img class="location-card__image" src=venue.image_url alt=venue.name />
                                <div class="location-card__body">
                                    <h2 class="location-card__name">{venue.name}</h2>
                                    <p class="location-card__description">{venue.description}</p>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
