//! Venue-owner enquiry form.
//!
//! There is no backend endpoint for enquiries yet, so a valid submission is
//! logged to the console and acknowledged in place.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

pub const CONTACT_THANKS: &str = "Thanks for reaching out! We will get back to you soon.";

/// Values of the enquiry form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub venue_name: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    /// Check required fields; phone is optional.
    ///
    /// # Errors
    ///
    /// Returns the message for the first missing or malformed field.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Please enter your name.");
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err("Please enter a valid email address.");
        }
        if self.venue_name.trim().is_empty() {
            return Err("Please enter your venue name.");
        }
        if self.message.trim().is_empty() {
            return Err("Please enter a message.");
        }
        Ok(())
    }
}

fn field(id: &'static str, label: &'static str, kind: &'static str, required: bool, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label for=id>{label}</label>
        <input
            id=id
            name=id
            type=kind
            required=required
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let venue_name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let sent = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            venue_name: venue_name.get_untracked(),
            phone: phone.get_untracked(),
            message: message.get_untracked(),
        };
        match form.validate() {
            Ok(()) => {
                leptos::logging::log!("contact enquiry submitted: {form:?}");
                error.set(None);
                sent.set(true);
            }
            Err(msg) => error.set(Some(msg)),
        }
    };

    view! {
        <section class="contact-page">
            <h1 class="contact-page__title">"List Your Venue"</h1>
            <p class="contact-page__intro">
                "Run a bar or club in Tartu? Tell us about it and we will help you get your events on Partyn."
            </p>
            <Show
                when=move || sent.get()
                fallback=move || {
                    view! {
                        <form class="contact-form" on:submit=on_submit>
                            <Show when=move || error.get().is_some()>
                                <p class="contact-form__error">{move || error.get().unwrap_or_default()}</p>
                            </Show>
                            {field("name", "Name", "text", true, name)}
                            {field("email", "Email", "email", true, email)}
                            {field("venueName", "Venue Name", "text", true, venue_name)}
                            {field("phone", "Phone (optional)", "tel", false, phone)}
                            <label for="message">"Message"</label>
                            <textarea
                                id="message"
                                name="message"
                                required=true
                                prop:value=move || message.get()
                                on:input=move |ev| message.set(event_target_value(&ev))
                            ></textarea>
                            <button class="contact-form__submit" type="submit">"Send"</button>
                        </form>
                    }
                }
            >
                <p class="contact-page__thanks">{CONTACT_THANKS}</p>
            </Show>
        </section>
    }
}
