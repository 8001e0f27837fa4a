use yew::prelude::*;

use crate::config;
use crate::state::navigation::{go_to, DocumentScroller, NavAction, NavContext, NavSection};
use crate::state::theme::ThemeState;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub theme: ThemeState,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { theme, on_toggle_theme } = props;
    let nav = use_context::<NavContext>();
    let Some(nav) = nav else {
        return html! {};
    };

    let navigate = |section: NavSection| {
        let nav = nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(action) = go_to(section, &DocumentScroller) {
                nav.dispatch(action);
            }
        })
    };

    let toggle_menu = {
        let nav = nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            nav.dispatch(NavAction::ToggleMenu);
        })
    };

    let toggle_theme = {
        let on_toggle_theme = on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    html! {
        <nav class={classes!("top-nav", nav.compact().then_some("navbar-scrolled"))}>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    background: transparent;
                    transition: all 0.3s ease;
                }
                .top-nav.navbar-scrolled {
                    background: rgba(0, 0, 0, 0.9);
                    backdrop-filter: blur(10px);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.4);
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    height: 4rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo img {
                    height: 2.5rem;
                    width: auto;
                }
                .nav-links {
                    display: flex;
                    gap: 1rem;
                }
                .nav-link {
                    background: none;
                    border: none;
                    color: inherit;
                    font-size: 0.875rem;
                    font-weight: 500;
                    padding: 0.5rem 0.75rem;
                    cursor: pointer;
                    transition: color 0.2s;
                }
                .nav-link:hover {
                    color: #ef4444;
                }
                .nav-actions {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .icon-button {
                    background: none;
                    border: none;
                    color: inherit;
                    font-size: 1.25rem;
                    padding: 0.5rem;
                    border-radius: 6px;
                    cursor: pointer;
                }
                .burger-menu {
                    display: none;
                }
                .mobile-menu {
                    background: rgba(0, 0, 0, 0.95);
                    padding: 0.5rem;
                }
                .mobile-menu .nav-link {
                    display: block;
                    width: 100%;
                    text-align: left;
                    color: #fff;
                    font-size: 1rem;
                }
                @media (min-width: 769px) {
                    .mobile-menu {
                        display: none;
                    }
                }
                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }
                    .burger-menu {
                        display: block;
                    }
                }
                "#}
            </style>
            <div class="nav-content">
                <div class="nav-logo">
                    <img src={config::LOGO_URL} alt="TFR Logo" />
                </div>

                <div class="nav-links">
                    { for NavSection::ALL.iter().map(|section| html! {
                        <button key={section.anchor()} class="nav-link" onclick={navigate(*section)}>
                            {section.label()}
                        </button>
                    }) }
                </div>

                <div class="nav-actions">
                    <button class="icon-button" onclick={toggle_theme}>
                        { if theme.is_dark() { "☀" } else { "☾" } }
                    </button>
                    <button class="icon-button burger-menu" onclick={toggle_menu}>
                        { if nav.menu_open() { "✕" } else { "☰" } }
                    </button>
                </div>
            </div>

            if nav.menu_open() {
                <div class="mobile-menu">
                    { for NavSection::ALL.iter().map(|section| html! {
                        <button key={section.anchor()} class="nav-link" onclick={navigate(*section)}>
                            {section.label()}
                        </button>
                    }) }
                </div>
            }
        </nav>
    }
}
