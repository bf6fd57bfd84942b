use std::fmt::Write as _;

use crate::{
    content::model::{HeroArrangement, PageConfig},
    layout::breakpoint::Breakpoint,
    layout::descriptor::RenderDescriptor,
};

pub const GLASS_PANEL_CLASS: &str = "glass-panel";

/// Complete stylesheet: base rules, entrance motion, then one block per device class.
pub fn stylesheet(config: &PageConfig, descriptors: &[RenderDescriptor]) -> String {
    let mut css = String::new();
    css.push_str(&base_rules(config));
    css.push_str(&config.entrance.css());
    for d in descriptors {
        let rules = variant_rules(d);
        match &d.media {
            None => css.push_str(&rules),
            Some(cond) => {
                let _ = writeln!(css, "@media {cond} {{");
                for line in rules.lines() {
                    if line.is_empty() {
                        css.push('\n');
                    } else {
                        let _ = writeln!(css, "  {line}");
                    }
                }
                css.push_str("}\n");
            }
        }
    }
    css
}

/// Rules that only hold for one device class.
pub fn variant_rules(d: &RenderDescriptor) -> String {
    let mut css = String::new();

    for bp in Breakpoint::ALL {
        let display = if bp == d.breakpoint { "block" } else { "none" };
        let _ = writeln!(css, ".{} {{ display: {display}; }}", bp.only_class());
    }

    match d.arrangement {
        HeroArrangement::Stacked { video_band_vh } => {
            let text_vh = 100.0 - video_band_vh;
            let _ = writeln!(
                css,
                ".hero-grid {{ display: flex; flex-direction: column; }}"
            );
            let _ = writeln!(
                css,
                ".hero-video {{ width: 100%; height: {video_band_vh}vh; background: var(--hero-fallback); }}"
            );
            let _ = writeln!(
                css,
                ".hero-text {{ height: {text_vh}vh; padding: 0 2rem 20vh; background: var(--bg); }}"
            );
        }
        HeroArrangement::Columns => {
            let _ = writeln!(
                css,
                ".hero-grid {{ display: grid; grid-template-columns: 1fr 1fr; }}"
            );
            let _ = writeln!(
                css,
                ".hero-video {{ width: 100%; height: 100%; background: transparent; }}"
            );
            let _ = writeln!(css, ".scroll-hint {{ bottom: 3rem; left: 8rem; }}");
            let _ = writeln!(
                css,
                ".hero-text {{ height: 100%; padding: 0 3rem 0 8rem; background: transparent; }}"
            );
        }
    }

    let columns = match d.breakpoint {
        Breakpoint::Narrow => ("1fr", "column"),
        Breakpoint::Wide => ("1fr 2fr", "row"),
    };
    let _ = writeln!(
        css,
        ".resume-grid {{ grid-template-columns: {}; }}\n.about, .footer__inner {{ flex-direction: {}; }}",
        columns.0, columns.1
    );

    let _ = writeln!(
        css,
        ".hero-video--{} video {{ {} }}",
        d.breakpoint.name(),
        video_fit(d)
    );

    let blur = d.blend.backdrop_blur_px;
    let _ = writeln!(
        css,
        ".{GLASS_PANEL_CLASS} {{\n  backdrop-filter: blur({blur}px);\n  -webkit-backdrop-filter: blur({blur}px);\n  background: {};\n}}",
        d.blend.css_background()
    );
    css
}

fn video_fit(d: &RenderDescriptor) -> String {
    if d.video_rotation_deg == 0.0 {
        return "width: 100%; height: 100%; object-fit: cover;".to_string();
    }
    format!(
        "width: 100vh; height: auto; max-width: none; position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%) rotate({}deg);",
        d.video_rotation_deg
    )
}

fn base_rules(config: &PageConfig) -> String {
    let t = &config.theme;
    let mut css = String::new();
    let _ = writeln!(
        css,
        ":root {{\n  --bg: {};\n  --hero-fallback: {};\n  --text: {};\n  --muted: {};\n  --divider: {};\n  --footer-bg: {};\n}}",
        t.background.css(),
        t.hero_fallback.css(),
        t.text.css(),
        t.muted.css(),
        t.divider.css(),
        t.footer_background.css()
    );
    css.push_str(BASE_CSS);
    let _ = writeln!(
        css,
        ".frame {{ position: fixed; inset: {}px; z-index: 50; pointer-events: none; }}",
        t.border_inset_px
    );
    css
}

const BASE_CSS: &str = r#"html, body {
  overscroll-behavior-y: none;
  margin: 0;
  padding: 0;
}
body {
  background: var(--bg);
  color: var(--text);
  font-family: ui-sans-serif, system-ui, sans-serif;
  overflow-x: hidden;
}
a { color: inherit; text-decoration: none; }
.mono { font-family: ui-monospace, SFMono-Regular, Menlo, monospace; }
.icon { display: inline-block; vertical-align: middle; }
.icon-xs { width: 0.75rem; height: 0.75rem; }
.icon-md { width: 1.25rem; height: 1.25rem; }
.icon-lg { width: 1.5rem; height: 1.5rem; }
.frame svg { width: 100%; height: 100%; }
.hero { position: fixed; inset: 0; width: 100%; height: 100vh; z-index: 0; }
.hero-grid { height: 100%; width: 100%; }
.hero-video { position: relative; overflow: hidden; }
.hero-text { display: flex; flex-direction: column; justify-content: center; box-sizing: border-box; z-index: 10; }
.hero-text h1 { font-size: 2.5rem; font-weight: 700; letter-spacing: -0.025em; margin: 0 0 1.5rem; }
.hero-text p { font-size: 1.25rem; line-height: 1.6; font-weight: 300; color: var(--muted); max-width: 36rem; }
.hero-text strong { font-weight: 600; color: var(--text); }
.social-links { display: flex; flex-wrap: wrap; gap: 0.75rem 1.5rem; padding-top: 1rem; }
.social-link { display: flex; align-items: center; gap: 0.5rem; color: var(--muted); }
.social-link__label { font-weight: 500; }
.scroll-hint { position: absolute; bottom: 2rem; left: 2rem; color: #a8a29e; z-index: 20; }
@keyframes bounce {
  0%, 100% { transform: translateY(-25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
  50% { transform: none; animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
}
.animate-bounce { animation: bounce 1s infinite; }
.panel { position: relative; z-index: 10; margin-top: 100vh; }
.divider { width: 100%; height: 1px; background: var(--divider); margin-bottom: 3rem; }
.section { max-width: 56rem; margin: 0 auto; padding: 0 1.5rem 3rem; }
.section-heading { font-size: 1.75rem; font-weight: 700; display: flex; align-items: center; gap: 0.75rem; margin: 0 0 2rem; }
.column-heading { font-size: 0.875rem; font-weight: 700; text-transform: uppercase; letter-spacing: 0.05em; color: #a8a29e; margin: 0 0 1.5rem; }
.publication { margin-bottom: 2rem; }
.publication__year { font-size: 0.875rem; color: #a8a29e; }
.publication__title { font-size: 1.2rem; font-weight: 600; margin: 0.25rem 0; }
.publication__authors { color: var(--muted); }
.author--self { font-weight: 700; color: var(--text); }
.publication__venue { font-size: 0.875rem; font-style: italic; color: #78716c; }
.card { padding: 2rem; background: rgba(255, 255, 255, 0.6); border: 1px solid #e7e5e4; border-radius: 0.75rem; }
.project__head { display: flex; justify-content: space-between; align-items: flex-start; gap: 1rem; }
.tags { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.tag { padding: 0.25rem 0.5rem; background: #f5f5f4; border: 1px solid #e7e5e4; border-radius: 0.25rem; font-size: 0.75rem; color: var(--muted); }
.resume { background: rgba(255, 255, 255, 0.6); border-top: 1px solid #e7e5e4; border-bottom: 1px solid #e7e5e4; padding: 6rem 0; }
.resume-grid { display: grid; gap: 3rem; }
.resume-column > * + * { margin-top: 3rem; }
.education { margin-bottom: 1.5rem; }
.education__institution, .talks__venue, .press__title { font-weight: 700; }
.education__degree { font-size: 0.875rem; color: var(--muted); }
.education__years { font-size: 0.75rem; color: #a8a29e; margin-top: 0.25rem; }
.press__outlet { font-size: 0.875rem; font-style: italic; color: #78716c; margin-top: 0.25rem; }
.talks { margin-bottom: 1rem; }
.talks__links { display: flex; gap: 0.5rem; font-size: 0.875rem; color: #78716c; margin-top: 0.25rem; }
.talks__link { text-decoration: underline; text-decoration-color: #d6d3d1; }
.resume-divider { width: 100%; height: 1px; background: #f5f5f4; margin: 3rem 0; }
.resume-item { margin-bottom: 2rem; }
.resume-item:last-child { margin-bottom: 0; }
.resume-item__head, .resume-item__meta { display: flex; justify-content: space-between; align-items: baseline; gap: 1rem; }
.resume-item__head { margin-bottom: 0.5rem; }
.resume-item__title { font-size: 1.125rem; font-weight: 700; margin: 0; }
.resume-item__date { font-size: 0.875rem; color: #78716c; flex-shrink: 0; }
.resume-item__meta { margin-bottom: 0.75rem; color: var(--muted); }
.resume-item__subtitle { font-weight: 500; font-style: italic; }
.resume-item__location { font-size: 0.875rem; display: flex; align-items: center; gap: 0.25rem; }
.resume-item__body { font-size: 0.875rem; line-height: 1.6; color: var(--muted); }
.bullets { list-style: disc outside; margin: 0 0 0 1rem; padding: 0; }
.about { display: flex; gap: 3rem; align-items: flex-start; padding-top: 6rem; padding-bottom: 6rem; }
.about__portrait { width: 16rem; height: 16rem; flex-shrink: 0; overflow: hidden; border-radius: 0.25rem; border: 2px solid #f5f5f4; }
.about__portrait img { width: 100%; height: 100%; object-fit: cover; }
.about__text p { color: var(--muted); line-height: 1.6; }
.footer { background: var(--footer-bg); color: #a8a29e; padding: 3rem 0; font-size: 0.875rem; }
.footer__inner { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; display: flex; justify-content: space-between; align-items: flex-end; gap: 1.5rem; }
.footer__caption { max-width: 32rem; font-size: 0.75rem; line-height: 1.6; color: #78716c; opacity: 0.8; text-align: right; }
"#;

#[cfg(test)]
#[path = "../../tests/unit/markup/style.rs"]
mod tests;
