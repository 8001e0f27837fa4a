use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::content::MEDIA;
use crate::pages::about::SectionHeader;
use crate::state::navigation::NavSection;

#[function_component(Media)]
pub fn media() -> Html {
    html! {
        <section id={NavSection::Media.anchor()} class="page-section surface-alt">
            <style>
                {r#"
                .media-tile {
                    overflow: hidden;
                    border-radius: 0.5rem;
                }
                .media-tile img {
                    width: 100%;
                    height: 16rem;
                    object-fit: cover;
                    display: block;
                    transition: transform 0.4s ease;
                }
                .media-tile:hover img {
                    transform: scale(1.08);
                }
                "#}
            </style>
            <div class="section-inner">
                <SectionHeader
                    id="media-header"
                    title="Media"
                    accent="Gallery"
                    intro="Highlights from our tournaments, training sessions, and championship moments."
                />
                <div class="card-grid three">
                    { for MEDIA.iter().enumerate().map(|(i, descriptor)| html! {
                        <Reveal
                            key={*descriptor}
                            id={format!("media-{}", i)}
                            class="media-tile"
                            delay_ms={i as u32 * 200}
                        >
                            <img
                                src={config::MEDIA_IMAGE_URL}
                                alt={format!("TFR media {}", i + 1)}
                                title={*descriptor}
                            />
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
