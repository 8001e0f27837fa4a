use yew::prelude::*;

use crate::config;
use crate::pages::about::SectionHeader;
use crate::state::navigation::NavSection;
use crate::state::roster::{load_academy, Member, RosterCategory, RosterSelector};

#[derive(Properties, PartialEq)]
struct MemberCardProps {
    member: Member,
    index: usize,
}

#[function_component(MemberCard)]
fn member_card(props: &MemberCardProps) -> Html {
    let Member {
        name,
        role,
        image_descriptor,
        description,
    } = &props.member;

    html! {
        <div class="card surface member-card" style={format!("animation-delay: {}ms;", props.index * 100)}>
            <img
                class="member-photo"
                src={config::MEMBER_IMAGE_URL}
                alt={format!("{} - {}", name, role)}
                title={image_descriptor.clone()}
            />
            <h3>{name}</h3>
            <p class="accent member-role">{role}</p>
            <p class="muted member-description">{description}</p>
        </div>
    }
}

#[function_component(Academy)]
pub fn academy() -> Html {
    let selector = use_reducer(|| RosterSelector::new(load_academy()));
    let active = selector.active_category();

    html! {
        <section id={NavSection::TfrAcademy.anchor()} class="page-section surface-alt">
            <style>
                {r#"
                .academy-tabs {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-bottom: 3rem;
                }
                .tab-button {
                    background: transparent;
                    color: inherit;
                    border: 2px solid #ef4444;
                    border-radius: 9999px;
                    padding: 0.6rem 1.5rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: background 0.2s, color 0.2s;
                }
                .tab-button.active,
                .tab-button:hover {
                    background: #ef4444;
                    color: #fff;
                }
                .member-card {
                    text-align: center;
                    animation: memberIn 0.5s ease-out both;
                }
                .member-photo {
                    width: 6rem;
                    height: 6rem;
                    border-radius: 50%;
                    object-fit: cover;
                    margin: 0 auto 1rem;
                    display: block;
                }
                .member-card h3 {
                    font-size: 1.25rem;
                    margin: 0 0 0.5rem;
                }
                .member-role {
                    font-weight: 600;
                    margin-bottom: 0.75rem;
                }
                .member-description {
                    font-size: 0.875rem;
                }
                @keyframes memberIn {
                    from { opacity: 0; transform: scale(0.9); }
                    to { opacity: 1; transform: scale(1); }
                }
                "#}
            </style>
            <div class="section-inner">
                <SectionHeader
                    id="academy-header"
                    title="TFR"
                    accent="Academy"
                    intro="Our academy is where champions are forged. Meet our talented players and dedicated staff across multiple gaming disciplines."
                />

                <div class="academy-tabs">
                    { for RosterCategory::ALL.iter().map(|category| {
                        let category = *category;
                        let onclick = {
                            let selector = selector.clone();
                            Callback::from(move |_: MouseEvent| selector.dispatch(category))
                        };
                        html! {
                            <button
                                key={category.key()}
                                class={classes!("tab-button", (category == active).then_some("active"))}
                                {onclick}
                            >
                                {category.label()}
                            </button>
                        }
                    }) }
                </div>

                <div class="academy-grid">
                    // Keyed on the category so switching tabs replays the entry animation.
                    <div key={active.key()} class="card-grid four">
                        { for selector.active_members().iter().enumerate().map(|(index, member)| html! {
                            <MemberCard key={member.name.clone()} member={member.clone()} {index} />
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
