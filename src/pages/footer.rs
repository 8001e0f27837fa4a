use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config;
use crate::content::TAGLINE;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer {
                    background: #000;
                    color: #fff;
                    padding: 2rem 1rem;
                    text-align: center;
                }
                .site-footer .tagline {
                    color: #9ca3af;
                    margin-bottom: 1rem;
                }
                .footer-row {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 1rem;
                }
                .footer-row img {
                    height: 3rem;
                    width: auto;
                }
                .footer-row p {
                    font-size: 0.875rem;
                    color: #6b7280;
                }
                "#}
            </style>
            <p class="tagline">{TAGLINE}</p>
            <div class="footer-row">
                <img src={config::LOGO_URL} alt="TFR Logo" />
                <p>{format!("© {} The First Rulers (TFR). All rights reserved.", year)}</p>
            </div>
        </footer>
    }
}
