use leptos::prelude::*;

use crate::content::model::Icon;

// 24x24 stroke glyphs in the outline style of the page.
fn paths(icon: Icon) -> &'static [&'static str] {
    match icon {
        Icon::Scholar => &[
            "M22 10 12 5 2 10l10 5 10-5z",
            "M6 12v5c3 3 9 3 12 0v-5",
        ],
        Icon::GitHub => &[
            "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65S8.93 17.38 9 18v4",
            "M9 18c-4.51 2-5-2-7-2",
        ],
        Icon::LinkedIn => &[
            "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z",
            "M2 9h4v12H2z",
            "M4 2a2 2 0 1 0 0 4 2 2 0 1 0 0-4z",
        ],
        Icon::Mail => &["M2 4h20v16H2z", "m22 7-10 6L2 7"],
        Icon::FileText => &[
            "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7z",
            "M14 2v5h5",
            "M16 13H8",
            "M16 17H8",
            "M10 9H8",
        ],
        Icon::Code => &["m16 18 6-6-6-6", "m8 6-6 6 6 6"],
        Icon::MapPin => &[
            "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z",
            "M12 7a3 3 0 1 0 0 6 3 3 0 1 0 0-6z",
        ],
        Icon::ChevronDown => &["m6 9 6 6 6-6"],
        Icon::User => &[
            "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
            "M12 3a4 4 0 1 0 0 8 4 4 0 1 0 0-8z",
        ],
    }
}

/// Inline SVG glyph; decorative, hidden from assistive technology.
#[component]
pub fn Glyph(icon: Icon, #[prop(into)] class: String) -> impl IntoView {
    view! {
        <svg
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=format!("icon {class}")
        >
            {paths(icon).iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}

/// SVG path data for an icon, for the preview rasterizer.
pub(crate) fn path_data(icon: Icon) -> &'static [&'static str] {
    paths(icon)
}

#[cfg(test)]
#[path = "../../tests/unit/markup/icons.rs"]
mod tests;
