use gloo_timers::future::TimeoutFuture;
use log::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::notification::{notify, ToastContext, ToastVariant};
use crate::components::reveal::Reveal;
use crate::config;
use crate::content::ACADEMY_PERKS;
use crate::pages::about::SectionHeader;
use crate::state::contact::{ContactField, ContactForm, SubmitStarted};
use crate::state::navigation::NavSection;

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_mut_ref(ContactForm::default);
    let redraw = use_force_update();
    let is_mounted = use_is_mounted();
    let toasts = use_context::<ToastContext>();

    let on_input = |field: ContactField| {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                ContactField::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            form.borrow_mut().update_field(field, value);
            redraw.force_update();
        })
    };

    let onsubmit = {
        let form = form.clone();
        let redraw = redraw.clone();
        let toasts = toasts.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let started = form.borrow_mut().submit();
            match started {
                Ok(SubmitStarted::Sending) => {
                    redraw.force_update();
                    let form = form.clone();
                    let redraw = redraw.clone();
                    let toasts = toasts.clone();
                    let is_mounted = is_mounted.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(config::SEND_DELAY_MS).await;
                        if !is_mounted() {
                            debug!("Contact form unmounted before the send finished");
                            return;
                        }
                        let sent = form.borrow_mut().complete();
                        if sent.is_some() {
                            notify(
                                &toasts,
                                "Success!",
                                "Your message has been sent successfully!",
                                ToastVariant::Default,
                            );
                            redraw.force_update();
                        }
                    });
                }
                Ok(SubmitStarted::AlreadySubmitting) => {}
                Err(err) => notify(&toasts, "Error", &err.to_string(), ToastVariant::Destructive),
            }
        })
    };

    let state = form.borrow().clone();
    let submitting = state.is_submitting();

    html! {
        <section id={NavSection::Contact.anchor()} class="page-section">
            <style>
                {r#"
                .contact-inner {
                    max-width: 56rem;
                }
                .contact-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 3rem;
                }
                .contact-form label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    margin-bottom: 0.5rem;
                }
                .contact-form > div {
                    margin-bottom: 1.5rem;
                }
                .form-input {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.75rem 1rem;
                    border-radius: 8px;
                    font-size: 1rem;
                    font-family: inherit;
                }
                .form-input:focus {
                    outline: none;
                    border-color: #ef4444;
                    box-shadow: 0 0 0 3px rgba(239, 68, 68, 0.25);
                }
                .contact-form .btn-primary {
                    width: 100%;
                }
                .social-links {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                }
                .social-link {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    background: #ef4444;
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 700;
                    text-decoration: none;
                    transition: transform 0.2s;
                }
                .social-link:hover {
                    transform: scale(1.1);
                }
                .join-card {
                    margin-top: 2rem;
                    padding: 1.5rem;
                    border-radius: 0.5rem;
                }
                .join-card ul {
                    list-style: none;
                    padding: 0;
                    font-size: 0.875rem;
                }
                .join-card li {
                    margin-bottom: 0.5rem;
                }
                @media (max-width: 768px) {
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <div class="section-inner contact-inner">
                <SectionHeader
                    id="contact-header"
                    title="Get In"
                    accent="Touch"
                    intro="Ready to join the TFR family? Have questions about our academy or sponsorship opportunities? We'd love to hear from you."
                />

                <div class="contact-grid">
                    <Reveal id="contact-form">
                        <form class="contact-form" {onsubmit}>
                            <div>
                                <label>{"Name"}</label>
                                <input
                                    type="text"
                                    class="form-input"
                                    placeholder="Your full name"
                                    value={state.field(ContactField::Name).to_string()}
                                    oninput={on_input(ContactField::Name)}
                                />
                            </div>
                            <div>
                                <label>{"Email"}</label>
                                <input
                                    type="email"
                                    class="form-input"
                                    placeholder="your.email@example.com"
                                    value={state.field(ContactField::Email).to_string()}
                                    oninput={on_input(ContactField::Email)}
                                />
                            </div>
                            <div>
                                <label>{"Message"}</label>
                                <textarea
                                    rows="5"
                                    class="form-input"
                                    placeholder="Tell us about yourself or your inquiry..."
                                    value={state.field(ContactField::Message).to_string()}
                                    oninput={on_input(ContactField::Message)}
                                />
                            </div>
                            <button type="submit" class="btn-primary" disabled={submitting}>
                                { if submitting { "Sending..." } else { "Send Message" } }
                            </button>
                        </form>
                    </Reveal>

                    <Reveal id="contact-links">
                        <h3>{"Connect With Us"}</h3>
                        <div class="social-links">
                            <a href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer" class="social-link" title="Instagram">
                                {"IG"}
                            </a>
                            <a href={config::DISCORD_URL} target="_blank" rel="noopener noreferrer" class="social-link" title="Discord">
                                {"D"}
                            </a>
                            <a href={format!("mailto:{}", config::CONTACT_EMAIL)} class="social-link" title="Email">
                                {"✉"}
                            </a>
                        </div>

                        <div class="join-card surface">
                            <h4>{"Join Our Academy"}</h4>
                            <p class="muted">
                                {"Looking to take your gaming to the next level? Our academy is always looking for talented players who share our passion for excellence."}
                            </p>
                            <ul class="muted">
                                { for ACADEMY_PERKS.iter().map(|perk| html! { <li key={*perk}>{"• "}{*perk}</li> }) }
                            </ul>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
