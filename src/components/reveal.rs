use yew::prelude::*;

use crate::state::navigation::NavContext;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub children: Children,
}

/// Block that fades in the first time it scrolls into view and stays visible afterwards.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let revealed = use_context::<NavContext>()
        .map(|nav| nav.is_revealed(&props.id))
        .unwrap_or(true);

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div
            data-reveal={props.id.clone()}
            class={classes!("scroll-reveal", props.class.clone(), revealed.then_some("revealed"))}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}
