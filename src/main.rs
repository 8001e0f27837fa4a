use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_hooks::prelude::*;

mod config;
mod content;
mod state {
    pub mod contact;
    pub mod navigation;
    pub mod roster;
    pub mod theme;
}
mod components {
    pub mod nav;
    pub mod notification;
    pub mod reveal;
    pub mod theme_style;
}
mod pages {
    pub mod about;
    pub mod academy;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod media;
    pub mod pro_team;
}

use components::{
    nav::Nav,
    notification::{ToastContext, ToastQueue, Toaster},
    theme_style::ThemeStyle,
};
use pages::{
    about::About,
    academy::Academy,
    contact::Contact,
    footer::Footer,
    hero::Hero,
    media::Media,
    pro_team::ProTeam,
};
use state::navigation::{NavAction, NavContext, Navigation, ScrollSnapshot};
use state::theme::{apply as apply_theme, LocalStore, ThemeController, ThemeState};

#[function_component]
fn App() -> Html {
    use_title(config::PAGE_TITLE.to_string());

    let theme_controller = use_mut_ref(|| ThemeController::init(LocalStore));
    let theme = use_state(|| theme_controller.borrow().theme());
    let nav = use_reducer(Navigation::default);
    let toasts = use_reducer(ToastQueue::default);

    use_effect_with_deps(
        |theme: &ThemeState| {
            apply_theme(*theme);
            || ()
        },
        *theme,
    );

    // Compact navbar and reveal-on-scroll both come from one scroll listener.
    {
        let nav = nav.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let observe = move || {
                    if let Some(snapshot) = ScrollSnapshot::capture() {
                        nav.dispatch(NavAction::Observe(snapshot));
                    }
                };
                // Reveal whatever is already on screen before the first scroll.
                observe();

                let scroll_callback = Closure::wrap(Box::new(observe) as Box<dyn FnMut()>);
                if let Some(window) = &window {
                    if window
                        .add_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .is_err()
                    {
                        debug!("Could not register scroll listener");
                    }
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let next = theme_controller.borrow_mut().toggle();
            theme.set(next);
        })
    };

    html! {
        <ContextProvider<NavContext> context={nav}>
            <ContextProvider<ToastContext> context={toasts}>
                <ThemeStyle theme={*theme} />
                <style>
                    {r#"
                    html {
                        scroll-behavior: smooth;
                    }
                    .page-section {
                        padding: 5rem 1rem;
                    }
                    .section-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .section-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .section-header h2 {
                        font-size: 3rem;
                        font-weight: 800;
                        margin: 0 0 1.5rem;
                    }
                    .section-header p {
                        font-size: 1.125rem;
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    .card-grid {
                        display: grid;
                        gap: 2rem;
                    }
                    .card-grid.three {
                        grid-template-columns: repeat(3, 1fr);
                    }
                    .card-grid.four {
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                    }
                    .card {
                        padding: 2rem;
                        border-radius: 0.75rem;
                        transition: transform 0.3s, box-shadow 0.3s;
                    }
                    .card:hover {
                        transform: translateY(-6px);
                        box-shadow: 0 16px 32px rgba(239, 68, 68, 0.2);
                    }
                    .pillar {
                        text-align: center;
                    }
                    .pillar-icon {
                        font-size: 2.25rem;
                        margin-bottom: 1rem;
                    }
                    .scroll-reveal {
                        opacity: 0;
                        transform: translateY(50px);
                        transition: opacity 0.8s ease, transform 0.8s ease;
                    }
                    .scroll-reveal.revealed {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    @media (max-width: 1024px) {
                        .card-grid.four {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (max-width: 768px) {
                        .card-grid.three,
                        .card-grid.four {
                            grid-template-columns: 1fr;
                        }
                        .section-header h2 {
                            font-size: 2.25rem;
                        }
                    }
                    "#}
                </style>
                <div class="site">
                    <Nav theme={*theme} {on_toggle_theme} />
                    <Hero />
                    <About />
                    <Academy />
                    <ProTeam />
                    <Media />
                    <Contact />
                    <Footer />
                    <Toaster />
                </div>
            </ContextProvider<ToastContext>>
        </ContextProvider<NavContext>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting TFR site");
    yew::Renderer::<App>::new().render();
}
