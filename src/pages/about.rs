use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{ABOUT_INTRO, PILLARS};
use crate::state::navigation::NavSection;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub id: AttrValue,
    pub title: AttrValue,
    pub accent: AttrValue,
    pub intro: AttrValue,
}

/// Title with a red accent word and a short intro paragraph, shared by every section.
#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <Reveal id={props.id.clone()} class="section-header">
            <h2>{&props.title}{" "}<span class="accent">{&props.accent}</span></h2>
            <p>{&props.intro}</p>
        </Reveal>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={NavSection::AboutUs.anchor()} class="page-section">
            <div class="section-inner">
                <SectionHeader id="about-header" title="About" accent="TFR" intro={ABOUT_INTRO} />
                <div class="card-grid three">
                    { for PILLARS.iter().enumerate().map(|(i, pillar)| html! {
                        <Reveal
                            key={pillar.title}
                            id={format!("about-pillar-{}", i)}
                            class="card surface pillar"
                            delay_ms={i as u32 * 200}
                        >
                            <div class="pillar-icon">{pillar.icon}</div>
                            <h3 class="accent">{pillar.title}</h3>
                            <p class="muted">{pillar.description}</p>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
