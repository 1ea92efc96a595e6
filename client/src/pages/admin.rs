//! Event-posting form for administrators.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind `RequirePrivileged`, so the page body assumes a privileged
//! session. Submission sends the event JSON and poster image as one multipart
//! request with a freshly refreshed bearer token.
//!
//! ERROR HANDLING
//! ==============
//! Any backend or token failure shows the fixed [`POST_FAILED`] message; the
//! underlying error is logged.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use chrono::NaiveDateTime;
use leptos::prelude::*;

use crate::net::types::NewEvent;
use crate::state::auth_store::AuthStore;
use crate::util::navigation::install_navigation_request;

pub const POST_SUCCEEDED: &str = "Event posted successfully!";
pub const POST_FAILED: &str = "Failed to post event";
pub const MISSING_IMAGE: &str = "Choose an image for the event.";

/// Raw values of the admin form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventForm {
    pub name: String,
    pub date_time: String,
    pub end_date_time: String,
    pub ticket_price: String,
    pub description: String,
    pub location: String,
    pub top_pick: bool,
}

/// Parse a `datetime-local` input value (seconds optional).
#[must_use]
pub fn parse_local_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

impl EventForm {
    /// Validate the form into the payload the backend expects.
    ///
    /// # Errors
    ///
    /// Returns the message to display for the first invalid field.
    pub fn to_new_event(&self) -> Result<NewEvent, &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Event name is required.");
        }
        let date_time = parse_local_datetime(&self.date_time).ok_or("Enter a valid start date and time.")?;
        let end_date_time = parse_local_datetime(&self.end_date_time).ok_or("Enter a valid end date and time.")?;
        if end_date_time <= date_time {
            return Err("The event must end after it starts.");
        }
        let ticket_price: i64 = self
            .ticket_price
            .trim()
            .parse()
            .map_err(|_| "Ticket price must be a whole number.")?;
        if ticket_price < 0 {
            return Err("Ticket price cannot be negative.");
        }
        let location = self.location.trim();
        if location.is_empty() {
            return Err("Location is required.");
        }
        Ok(NewEvent {
            name: name.to_owned(),
            date_time,
            end_date_time,
            ticket_price,
            description: self.description.trim().to_owned(),
            location: location.to_owned(),
            top_pick: self.top_pick,
        })
    }
}

fn text_field(id: &'static str, label: &'static str, kind: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label for=id>{label}</label>
        <input
            id=id
            type=kind
            required=true
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let store = expect_context::<AuthStore>();
    let config = expect_context::<crate::config::ClientConfig>();
    let navigate_to = install_navigation_request();

    let name = RwSignal::new(String::new());
    let date_time = RwSignal::new(String::new());
    let end_date_time = RwSignal::new(String::new());
    let ticket_price = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let top_pick = RwSignal::new(false);
    let file_input = NodeRef::<leptos::html::Input>::new();

    let error = RwSignal::new(None::<&'static str>);
    let success = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        success.set(None);
        let form = EventForm {
            name: name.get_untracked(),
            date_time: date_time.get_untracked(),
            end_date_time: end_date_time.get_untracked(),
            ticket_price: ticket_price.get_untracked(),
            description: description.get_untracked(),
            location: location.get_untracked(),
            top_pick: top_pick.get_untracked(),
        };
        let event = match form.to_new_event() {
            Ok(event) => event,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        #[cfg(feature = "hydrate")]
        {
            let Some(image) = file_input.get_untracked().and_then(|input| input.files()).and_then(|files| files.get(0))
            else {
                error.set(Some(MISSING_IMAGE));
                return;
            };
            error.set(None);
            busy.set(true);
            let store = store.clone();
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let result: Result<(), crate::net::api::ApiError> = async {
                    let token = store.id_token(true).await?;
                    crate::net::api::create_event(&config, &token, &event, Some(&image)).await
                }
                .await;
                busy.set(false);
                match result {
                    Ok(()) => {
                        error.set(None);
                        success.set(Some(POST_SUCCEEDED));
                        navigate_to.set(Some("/".to_owned()));
                    }
                    Err(e) => {
                        leptos::logging::error!("posting event failed: {e}");
                        error.set(Some(POST_FAILED));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (event, &store, &config, navigate_to, file_input);
        }
    };

    view! {
        <section class="admin-page">
            <div class="admin-card">
                <h1 class="admin-card__title">"Post a New Event"</h1>
                <Show when=move || error.get().is_some()>
                    <p class="admin-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || success.get().is_some()>
                    <p class="admin-card__success">{move || success.get().unwrap_or_default()}</p>
                </Show>
                <form class="admin-form" on:submit=on_submit>
                    {text_field("name", "Event Name", "text", name)}
                    {text_field("dateTime", "Start Date and Time", "datetime-local", date_time)}
                    {text_field("endDateTime", "End Date and Time", "datetime-local", end_date_time)}
                    {text_field("ticketPrice", "Ticket Price", "number", ticket_price)}
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                    {text_field("location", "Location", "text", location)}
                    <label class="admin-form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || top_pick.get()
                            on:change=move |ev| top_pick.set(event_target_checked(&ev))
                        />
                        "Top Pick"
                    </label>
                    <label for="file">"Event Image"</label>
                    <input id="file" type="file" accept="image/*" node_ref=file_input />
                    <button class="admin-form__submit" type="submit" disabled=move || busy.get()>
                        "Post Event"
                    </button>
                </form>
            </div>
        </section>
    }
}
