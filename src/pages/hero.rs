use yew::prelude::*;

use crate::config;
use crate::content;
use crate::state::navigation::{go_to, DocumentScroller, NavContext, NavSection};

#[function_component(Hero)]
pub fn hero() -> Html {
    let nav = use_context::<NavContext>();

    let discover = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(action) = go_to(NavSection::AboutUs, &DocumentScroller) {
            if let Some(nav) = &nav {
                nav.dispatch(action);
            }
        }
    });

    html! {
        <section id={NavSection::Home.anchor()} class="hero">
            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }
                .hero-image {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    z-index: -2;
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.6);
                    z-index: -1;
                }
                .hero-content {
                    text-align: center;
                    color: #fff;
                    padding: 0 1rem;
                    animation: heroIn 1s ease-out;
                }
                .hero-logo {
                    height: 16rem;
                    width: auto;
                    margin-bottom: 1.5rem;
                }
                .hero h1 {
                    font-size: 4.5rem;
                    font-weight: 800;
                    margin: 0 0 1.5rem;
                    text-shadow: 0 4px 20px rgba(239, 68, 68, 0.4);
                }
                .hero p {
                    font-size: 1.5rem;
                    margin-bottom: 2rem;
                }
                .accent {
                    color: #ef4444;
                }
                .btn-primary {
                    background: linear-gradient(135deg, #ef4444, #b91c1c);
                    color: #fff;
                    border: none;
                    border-radius: 8px;
                    font-weight: 600;
                    padding: 1rem 2rem;
                    font-size: 1.125rem;
                    cursor: pointer;
                    transition: transform 0.2s, box-shadow 0.2s;
                }
                .btn-primary:hover:not(:disabled) {
                    transform: translateY(-2px);
                    box-shadow: 0 10px 25px rgba(239, 68, 68, 0.4);
                }
                .btn-primary:disabled {
                    opacity: 0.6;
                    cursor: not-allowed;
                }
                @keyframes heroIn {
                    from { opacity: 0; transform: translateY(50px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @media (max-width: 768px) {
                    .hero-logo { height: 10rem; }
                    .hero h1 { font-size: 3rem; }
                }
                "#}
            </style>
            <img class="hero-image" src={config::HERO_IMAGE_URL} alt="TFR esports arena with gaming setup" />
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <img class="hero-logo" src={config::LOGO_URL} alt="The First Rulers Logo" />
                <h1>{"THE FIRST "}<span class="accent">{"RULERS"}</span></h1>
                <p>{content::TAGLINE}</p>
                <button class="btn-primary" onclick={discover}>
                    {"Discover Our Legacy"}
                </button>
            </div>
        </section>
    }
}
