use super::*;
use crate::content::dsl::{PortfolioBuilder, project, publication};
use crate::content::model::{ResumeEntry, SocialLinkEntry};

fn sample() -> Portfolio {
    PortfolioBuilder::new("Hi, I'm Ada.", "Ada Example")
        .title("Ada Example | Research")
        .plain("Researcher in ")
        .emphasis("plasma physics")
        .paragraph_break()
        .plain("Tools for simulation data.")
        .link(SocialLinkEntry::new(Icon::GitHub, "GitHub", "https://github.com/ada"))
        .link(SocialLinkEntry::new(Icon::Mail, "Email", "mailto:ada@example.org"))
        .publication(publication(
            "2024",
            "A paper",
            "https://doi.example/1",
            [("A. Example", true)],
            "A Journal",
        ))
        .project(project("Tool", "https://example.org/tool", "Rust", "Does a thing."))
        .education("Uni", "Ph.D.", "2022 — Present")
        .skills(["Rust"])
        .press("Headline", "Magazine", "https://press.example")
        .talks("Conf", [("2024", "https://conf.example/2024")])
        .resume_section(
            "Research Experience",
            [ResumeEntry::new("Lab", "2021").location("New York, NY")],
        )
        .resume_section(
            "Teaching",
            [
                ResumeEntry::new("Teaching Assistant", "2020 — 2023"),
                ResumeEntry::new("Mentor", "2025"),
            ],
        )
        .about("/portrait.jpg", "Ada", ["First."])
        .caption("Two-stream instability.")
        .build()
        .unwrap()
}

fn doc(p: &Portfolio) -> String {
    document_html(p, &describe_all(&p.config), 2026)
}

fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|n| html.find(n).unwrap_or_else(|| panic!("missing {n}")))
        .collect()
}

fn is_ascending(v: &[usize]) -> bool {
    v.windows(2).all(|w| w[0] < w[1])
}

/// Text of every element opened by `open`, in document order.
fn texts_after(html: &str, open: &str, close: &str) -> Vec<String> {
    html.match_indices(open)
        .filter_map(|(at, _)| {
            let start = at + open.len();
            html[start..]
                .find(close)
                .map(|end| html[start..start + end].to_string())
        })
        .collect()
}

#[test]
fn one_video_block_per_device_class() {
    let d = doc(&sample());
    assert_eq!(d.matches("class=\"hero-video ").count(), 2);
    assert!(d.contains("class=\"hero-video hero-video--narrow only-narrow\""));
    assert!(d.contains("class=\"hero-video hero-video--wide only-wide\""));

    let sources = positions(
        &d,
        &[
            "src=\"/simulation_mobile_4000kbps.mp4\"",
            "src=\"/simulation2_4000kbps.mp4\"",
        ],
    );
    assert!(is_ascending(&sources));
    assert_eq!(d.matches("<video").count(), 2);
    for flag in [" autoplay", " loop", " muted", " playsinline"] {
        assert_eq!(d.matches(flag).count(), 2, "{flag}");
    }
}

#[test]
fn narrow_video_precedes_text_and_wide_follows_it() {
    let d = doc(&sample());
    let order = positions(
        &d,
        &[
            "data-breakpoint=\"narrow\"",
            "class=\"hero-text\"",
            "data-breakpoint=\"wide\"",
        ],
    );
    assert!(is_ascending(&order));
}

#[test]
fn every_anchor_is_external() {
    let p = sample();
    let d = doc(&p);
    let anchors = d.matches("<a ").count();
    assert_eq!(anchors, 6);
    assert_eq!(d.matches("target=\"_blank\"").count(), anchors);
    assert_eq!(d.matches("rel=\"noopener noreferrer\"").count(), anchors);
}

#[test]
fn entrance_classes_appear_once_and_page_has_no_script() {
    let page = render_page_for_year(&sample(), 2026).unwrap();
    assert_eq!(page.html.matches("animate-draw-rect").count(), 1);
    assert_eq!(page.html.matches("animate-trace-fade-out").count(), 1);
    // hero grid and scroll hint
    assert_eq!(page.html.matches("animate-fade-in-delayed").count(), 2);
    assert_eq!(page.html.matches("animate-bounce").count(), 1);
    assert!(!page.html.contains("<script"));
    assert!(page.html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
    assert!(page.html.contains("<link rel=\"stylesheet\" href=\"style.css\""));
    assert!(page.html.contains("<title>Ada Example | Research</title>"));
}

#[test]
fn panel_sections_keep_order() {
    let d = doc(&sample());
    let order = positions(
        &d,
        &[
            "class=\"panel glass-panel\"",
            "class=\"divider\"",
            "id=\"publications\"",
            "id=\"projects\"",
            "id=\"resume\"",
            "id=\"about\"",
            "<footer",
        ],
    );
    assert!(is_ascending(&order));
}

#[test]
fn resume_sections_are_separated_by_dividers() {
    let d = doc(&sample());
    assert_eq!(d.matches("class=\"resume-divider\"").count(), 1);
    assert_eq!(d.matches("class=\"resume-item\"").count(), 3);
    let order = positions(
        &d,
        &[
            ">Research Experience</h3>",
            "class=\"resume-divider\"",
            ">Teaching</h3>",
        ],
    );
    assert!(is_ascending(&order));
}

#[test]
fn resume_entries_render_in_input_order() {
    let titles = ["Zeta Lab", "Alpha Lab", "Mid Lab", "Beta Lab", "Omega Lab"];
    let p = PortfolioBuilder::new("Hi", "Ada")
        .resume_section(
            "Research Experience",
            titles.iter().map(|t| ResumeEntry::new(*t, "2020")),
        )
        .build()
        .unwrap();
    let rendered = texts_after(&doc(&p), "<h4 class=\"resume-item__title\">", "</h4>");
    assert_eq!(rendered, titles);
}

#[test]
fn footer_uses_fallback_year_unless_pinned() {
    let mut p = sample();
    assert!(doc(&p).contains("<p>\u{a9} 2026 Ada Example.</p>"));

    p.footer.year = Some(2025);
    let d = doc(&p);
    assert!(d.contains("<p>\u{a9} 2025 Ada Example.</p>"));
    assert!(!d.contains("2026"));
    assert!(d.contains("Two-stream instability."));
}

#[test]
fn tagline_splits_on_breaks_and_emphasises() {
    let p = sample();
    let d = doc(&p);
    let start = d.find("class=\"hero-text__inner\"").unwrap();
    let end = d[start..].find("class=\"social-links\"").unwrap() + start;
    let inner = &d[start..end];
    assert_eq!(inner.matches("<p>").count(), 2);
    assert!(inner.contains("<p>Researcher in <strong>plasma physics</strong>"));
    assert!(inner.contains("<p>Tools for simulation data."));
    assert_eq!(
        tagline_plain(&p),
        vec!["Researcher in plasma physics", "Tools for simulation data."]
    );
}

#[test]
fn empty_optional_sections_are_omitted() {
    let p = PortfolioBuilder::new("Hi", "Ada").build().unwrap();
    let d = doc(&p);
    assert!(!d.contains("id=\"publications\""));
    assert!(!d.contains("id=\"projects\""));
    assert!(!d.contains("id=\"about\""));
    assert!(!d.contains("Technical Skills"));
    assert_eq!(d.matches("<footer").count(), 1);
}

#[test]
fn clock_year_is_plausible() {
    assert!(current_year() >= 2024);
}
