use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::content::PRO_TEAM;
use crate::pages::about::SectionHeader;
use crate::state::navigation::NavSection;

#[function_component(ProTeam)]
pub fn pro_team() -> Html {
    html! {
        <section id={NavSection::ProTeam.anchor()} class="page-section">
            <style>
                {r#"
                .pro-card {
                    background: linear-gradient(135deg, #ef4444, #b91c1c);
                    color: #fff;
                    text-align: center;
                }
                .pro-photo {
                    width: 8rem;
                    height: 8rem;
                    border-radius: 50%;
                    border: 4px solid #fff;
                    object-fit: cover;
                    margin: 0 auto 1.5rem;
                    display: block;
                }
                .pro-card h3 {
                    font-size: 1.5rem;
                    margin: 0 0 0.5rem;
                }
                .pro-card p {
                    color: #fee2e2;
                }
                .pro-role {
                    font-weight: 600;
                }
                "#}
            </style>
            <div class="section-inner">
                <SectionHeader
                    id="pro-team-header"
                    title="Pro"
                    accent="Team"
                    intro="Meet our elite professional players who compete at the highest level of esports competition."
                />
                <div class="card-grid three">
                    { for PRO_TEAM.iter().enumerate().map(|(i, player)| html! {
                        <Reveal
                            key={player.name}
                            id={format!("pro-player-{}", i)}
                            class="card pro-card"
                            delay_ms={i as u32 * 200}
                        >
                            <img
                                class="pro-photo"
                                src={config::PRO_PLAYER_IMAGE_URL}
                                alt={format!("{} - {}", player.name, player.role)}
                                title={player.image_descriptor}
                            />
                            <h3>{player.name}</h3>
                            <p class="pro-role">{player.role}</p>
                            <p>{player.stats}</p>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
