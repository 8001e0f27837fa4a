use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

use crate::state::theme::ThemeState;

struct Palette {
    background: &'static str,
    text: &'static str,
    muted: &'static str,
    surface: &'static str,
    surface_alt: &'static str,
    border: &'static str,
}

impl Palette {
    fn for_theme(theme: ThemeState) -> Self {
        match theme {
            ThemeState::Dark => Palette {
                background: "#0a0a0a",
                text: "#f5f5f5",
                muted: "#d1d5db",
                surface: "#1f2937",
                surface_alt: "#111827",
                border: "#374151",
            },
            ThemeState::Light => Palette {
                background: "#ffffff",
                text: "#111827",
                muted: "#4b5563",
                surface: "#f3f4f6",
                surface_alt: "#f9fafb",
                border: "#d1d5db",
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeStyleProps {
    pub theme: ThemeState,
}

/// Page-wide colors for the active theme.
#[function_component(ThemeStyle)]
pub fn theme_style(props: &ThemeStyleProps) -> Html {
    let p = Palette::for_theme(props.theme);
    let style = css!(
        r#"
        body {
            margin: 0;
            font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            background-color: ${background};
            color: ${text};
            transition: background-color 0.3s ease, color 0.3s ease;
        }
        .surface {
            background-color: ${surface};
        }
        .surface-alt {
            background-color: ${surface_alt};
        }
        .muted {
            color: ${muted};
        }
        .form-input {
            background-color: ${surface};
            color: ${text};
            border: 1px solid ${border};
        }
        "#,
        background = p.background,
        text = p.text,
        muted = p.muted,
        surface = p.surface,
        surface_alt = p.surface_alt,
        border = p.border,
    );

    html! { <Global css={style} /> }
}
