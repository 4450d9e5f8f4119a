// Contact section and inquiry form
// Developed by the W Tech IT Solution web team (c)2025

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use tracing::debug;
use wtech_core::forms::{ContactForm, Field, FormStatus};
use wtech_core::glyph::Glyph;
use wtech_core::reveal::ElementId;

use crate::icons::GlyphIcon;
use crate::reveal::Reveal;
use crate::{use_site_config, use_submitter};

/// `aria-invalid` for `field` under the current status.
pub(crate) fn invalid(status: &FormStatus, field: Field) -> &'static str {
    match status {
        FormStatus::Invalid(errors) if errors.get(field).is_some() => "true",
        _ => "false",
    }
}

/// The "Send Inquiry" form.
#[component]
pub fn InquiryForm() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let status = RwSignal::new(FormStatus::Idle);
    let submitter = use_submitter();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let next = FormStatus::submit(form.with_untracked(ContactForm::validate), submitter.as_ref());
        debug!(status = ?next, "contact form submitted");
        if matches!(next, FormStatus::Sent(_)) {
            form.set(ContactForm::default());
        }
        status.set(next);
    };

    view! {
        <form class="contact-form" novalidate=true on:submit=on_submit>
            <div class="form-row">
                <div class="form-field">
                    <label for="contact-name">{Field::Name.label()}</label>
                    <input
                        id="contact-name"
                        type="text"
                        placeholder="John Doe"
                        aria-invalid=move || status.with(|s| invalid(s, Field::Name))
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <label for="contact-email">{Field::Email.label()}</label>
                    <input
                        id="contact-email"
                        type="email"
                        placeholder="john@company.com"
                        aria-invalid=move || status.with(|s| invalid(s, Field::Email))
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </div>
            </div>
            <div class="form-field">
                <label for="contact-message">{Field::Message.label()}</label>
                <textarea
                    id="contact-message"
                    rows="4"
                    placeholder="Tell us about your project goals..."
                    aria-invalid=move || status.with(|s| invalid(s, Field::Message))
                    prop:value=move || form.with(|f| f.message.clone())
                    on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                ></textarea>
            </div>
            <button type="submit" class="btn btn-primary btn-block">"Send Inquiry"</button>
            <p class=move || status.with(FormStatus::class) role="status">
                {move || status.with(FormStatus::message)}
            </p>
        </form>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let contact = use_site_config().contact;

    view! {
        <section id="contact" class="section contact">
            <div class="container">
                <div class="contact-panel">
                    <div class="contact-glow" aria-hidden="true"></div>
                    <div class="contact-grid">
                        <Reveal id=ElementId::new("contact", "details")>
                            <h2 class="section-title">
                                "Ready to " <br /> <span class="text-accent">"Innovate?"</span>
                            </h2>
                            <p class="section-lead">
                                "Let's discuss how we can help your business grow with our expert IT solutions."
                            </p>
                            <div class="contact-items">
                                <div class="contact-item">
                                    <div class="contact-item-icon">
                                        <GlyphIcon glyph=Glyph::Phone size=28 />
                                    </div>
                                    <div>
                                        <div class="contact-item-label">"Direct Line"</div>
                                        <a class="contact-item-value" href=format!("tel:{}", contact.phone)>
                                            {contact.phone.clone()}
                                        </a>
                                    </div>
                                </div>
                                <div class="contact-item">
                                    <div class="contact-item-icon">
                                        <GlyphIcon glyph=Glyph::Mail size=28 />
                                    </div>
                                    <div>
                                        <div class="contact-item-label">"Support Email"</div>
                                        <a class="contact-item-value" href=format!("mailto:{}", contact.email)>
                                            {contact.email.clone()}
                                        </a>
                                    </div>
                                </div>
                            </div>
                        </Reveal>
                        <Reveal id=ElementId::new("contact", "form") delay=std::time::Duration::from_millis(200)>
                            <InquiryForm />
                        </Reveal>
                    </div>
                </div>
            </div>
        </section>
    }
}
