use chrono::Datelike;
use leptos::prelude::*;

use crate::{
    animation::entrance::EntranceConfig,
    content::model::{
        About, Footer, Hero, Icon, Portfolio, ProjectEntry, PublicationEntry, Resume,
        ResumeSection, RichText,
    },
    foundation::error::VitrineResult,
    layout::descriptor::{RenderDescriptor, describe_all},
    markup::icons::Glyph,
    markup::style::{GLASS_PANEL_CLASS, stylesheet},
    markup::templates::{
        ColumnHeading, Education, Press, Project, Publication, ResumeItem, SectionHeading,
        SkillTags, SocialLink, Talks, render_html,
    },
};

/// Generated page: one HTML document and its stylesheet.
#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    pub html: String,
    pub css: String,
}

/// File name the document links its stylesheet from.
pub const STYLESHEET_HREF: &str = "style.css";

/// Render the complete page, stamping the footer with the current year
/// unless the content pins one.
pub fn render_page(portfolio: &Portfolio) -> VitrineResult<Page> {
    render_page_for_year(portfolio, current_year())
}

/// Render the complete page. Nothing here depends on viewport, scroll or time.
#[tracing::instrument(skip(portfolio), fields(title = portfolio.page_title()))]
pub fn render_page_for_year(portfolio: &Portfolio, year: i32) -> VitrineResult<Page> {
    portfolio.validate()?;
    let descriptors = describe_all(&portfolio.config);

    let mut html = String::from("<!DOCTYPE html>\n");
    html.push_str(&document_html(portfolio, &descriptors, year));
    html.push('\n');

    let css = stylesheet(&portfolio.config, &descriptors);
    tracing::debug!(html_bytes = html.len(), css_bytes = css.len(), "page rendered");
    Ok(Page { html, css })
}

/// Gregorian year of the system clock (UTC).
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// `<html>` element of the page, server-rendered.
pub fn document_html(portfolio: &Portfolio, descriptors: &[RenderDescriptor], year: i32) -> String {
    let portfolio = portfolio.clone();
    let descriptors = descriptors.to_vec();
    render_html(view! { <Document portfolio=portfolio descriptors=descriptors year=year /> })
}

#[component]
fn Document(portfolio: Portfolio, descriptors: Vec<RenderDescriptor>, year: i32) -> impl IntoView {
    let title = portfolio.page_title().to_string();
    let stroke = portfolio.config.theme.border_stroke.css();
    let stroke_width = portfolio.config.theme.border_stroke_width.to_string();
    let Portfolio {
        hero,
        publications,
        projects,
        resume,
        about,
        footer,
        ..
    } = portfolio;

    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <link rel="stylesheet" href=STYLESHEET_HREF />
            </head>
            <body>
                <BorderOverlay stroke=stroke stroke_width=stroke_width />
                <HeroSection hero=hero descriptors=descriptors />
                <Panel
                    publications=publications
                    projects=projects
                    resume=resume
                    about=about
                    footer=footer
                    year=year
                />
            </body>
        </html>
    }
}

/// Fixed outline that traces itself once, then fades.
#[component]
fn BorderOverlay(stroke: String, stroke_width: String) -> impl IntoView {
    view! {
        <div class=format!("frame {}", EntranceConfig::BORDER_FADE_CLASS) aria-hidden="true">
            <svg>
                <rect
                    x="1"
                    y="1"
                    width="99.8%"
                    height="99.8%"
                    fill="none"
                    stroke=stroke
                    stroke-width=stroke_width
                    class=EntranceConfig::BORDER_TRACE_CLASS
                />
            </svg>
        </div>
    }
}

#[component]
fn HeroSection(hero: Hero, descriptors: Vec<RenderDescriptor>) -> impl IntoView {
    let fade = EntranceConfig::CONTENT_FADE_CLASS;
    let (leading, trailing): (Vec<_>, Vec<_>) =
        descriptors.into_iter().partition(|d| d.video_leads());

    view! {
        <section class="hero">
            <div class=format!("hero-grid {fade}")>
                {leading
                    .into_iter()
                    .map(|d| view! { <HeroVideo descriptor=d /> })
                    .collect_view()}
                <HeroText hero=hero />
                {trailing
                    .into_iter()
                    .map(|d| view! { <HeroVideo descriptor=d /> })
                    .collect_view()}
            </div>
            <div class=format!("scroll-hint {fade}") aria-hidden="true">
                <Glyph icon=Icon::ChevronDown class="icon-lg animate-bounce" />
            </div>
        </section>
    }
}

/// Background video for one device class; the other class never displays it.
#[component]
fn HeroVideo(descriptor: RenderDescriptor) -> impl IntoView {
    let bp = descriptor.breakpoint;
    let class = format!("hero-video hero-video--{} {}", bp.name(), bp.only_class());
    view! {
        <div class=class data-breakpoint=bp.name()>
            <video autoplay loop muted playsinline preload="auto">
                <source src=descriptor.video.src type=descriptor.video.mime />
            </video>
        </div>
    }
}

/// Tagline paragraphs split on breaks. Neighbouring plain runs are merged so
/// each paragraph is element-separated text.
fn tagline_paragraphs(tagline: &[RichText]) -> Vec<Vec<AnyView>> {
    let mut paragraphs: Vec<Vec<AnyView>> = vec![Vec::new()];
    let mut plain = String::new();
    for run in tagline {
        match run {
            RichText::Plain(s) => plain.push_str(s),
            RichText::Emphasis(s) => {
                if let Some(p) = paragraphs.last_mut() {
                    if !plain.is_empty() {
                        p.push(std::mem::take(&mut plain).into_any());
                    }
                    let s = s.clone();
                    p.push(view! { <strong>{s}</strong> }.into_any());
                }
            }
            RichText::Break => {
                if let Some(p) = paragraphs.last_mut()
                    && !plain.is_empty()
                {
                    p.push(std::mem::take(&mut plain).into_any());
                }
                paragraphs.push(Vec::new());
            }
        }
    }
    if let Some(p) = paragraphs.last_mut()
        && !plain.is_empty()
    {
        p.push(plain.into_any());
    }
    paragraphs.retain(|p| !p.is_empty());
    paragraphs
}

#[component]
fn HeroText(hero: Hero) -> impl IntoView {
    let paragraphs = tagline_paragraphs(&hero.tagline);
    let Hero { heading, links, .. } = hero;
    view! {
        <div class="hero-text">
            <div class="hero-text__inner">
                <h1>{heading}</h1>
                {paragraphs.into_iter().map(|runs| view! { <p>{runs}</p> }).collect_view()}
                <div class="social-links">
                    {links
                        .into_iter()
                        .map(|entry| view! { <SocialLink entry=entry /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

/// Scrolling panel: starts one viewport down and slides over the hero.
#[component]
fn Panel(
    publications: Vec<PublicationEntry>,
    projects: Vec<ProjectEntry>,
    resume: Resume,
    about: Option<About>,
    footer: Footer,
    year: i32,
) -> impl IntoView {
    let publications = (!publications.is_empty()).then(move || {
        view! {
            <section class="section publications" id="publications">
                <SectionHeading label="Select Publications" glyph=Icon::FileText />
                {publications
                    .into_iter()
                    .map(|entry| view! { <Publication entry=entry /> })
                    .collect_view()}
            </section>
        }
    });
    let projects = (!projects.is_empty()).then(move || {
        view! {
            <section class="section projects" id="projects">
                <SectionHeading label="Software Projects" glyph=Icon::Code />
                {projects
                    .into_iter()
                    .map(|entry| view! { <Project entry=entry /> })
                    .collect_view()}
            </section>
        }
    });
    let about = about.map(|about| view! { <AboutSection about=about /> });

    view! {
        <main class=format!("panel {GLASS_PANEL_CLASS}")>
            <div class="divider"></div>
            {publications}
            {projects}
            <ResumeBlock resume=resume />
            {about}
            <PageFooter footer=footer year=year />
        </main>
    }
}

#[component]
fn AboutSection(about: About) -> impl IntoView {
    let About {
        portrait,
        paragraphs,
    } = about;
    view! {
        <section class="section about" id="about">
            <div class="about__portrait">
                <img src=portrait.src alt=portrait.alt />
            </div>
            <div class="about__text">
                <h2 class="section-heading">"About Me"</h2>
                {paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ResumeBlock(resume: Resume) -> impl IntoView {
    let Resume {
        education,
        skills,
        press,
        talks,
        sections,
    } = resume;

    let education = (!education.is_empty()).then(move || {
        view! {
            <div>
                <ColumnHeading label="Education" />
                {education
                    .into_iter()
                    .map(|entry| view! { <Education entry=entry /> })
                    .collect_view()}
            </div>
        }
    });
    let skills = (!skills.is_empty()).then(move || {
        view! {
            <div>
                <ColumnHeading label="Technical Skills" />
                <SkillTags skills=skills />
            </div>
        }
    });
    let press = (!press.is_empty()).then(move || {
        view! {
            <div>
                <ColumnHeading label="Press" />
                {press.into_iter().map(|entry| view! { <Press entry=entry /> }).collect_view()}
            </div>
        }
    });
    let talks = (!talks.is_empty()).then(move || {
        view! {
            <div>
                <ColumnHeading label="Select Talks & Posters" />
                {talks.into_iter().map(|series| view! { <Talks series=series /> }).collect_view()}
            </div>
        }
    });
    let sections = sections
        .into_iter()
        .enumerate()
        .map(|(i, ResumeSection { heading, entries })| {
            view! {
                {(i > 0).then(|| view! { <div class="resume-divider"></div> })}
                <ColumnHeading label=heading />
                {entries
                    .into_iter()
                    .map(|entry| view! { <ResumeItem entry=entry /> })
                    .collect_view()}
            }
        })
        .collect_view();

    view! {
        <section class="resume" id="resume">
            <div class="section">
                <h2 class="section-heading">"Resume"</h2>
                <div class="resume-grid">
                    <div class="resume-column resume-column--side">
                        {education}
                        {skills}
                        {press}
                        {talks}
                    </div>
                    <div class="resume-column resume-column--main">{sections}</div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PageFooter(footer: Footer, year: i32) -> impl IntoView {
    let Footer {
        owner,
        year: pinned,
        rights,
        caption,
    } = footer;
    let copyright = format!("\u{a9} {} {owner}.", pinned.unwrap_or(year));
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__copyright">
                    <p>{copyright}</p>
                    <p>{rights}</p>
                </div>
                {caption
                    .map(|c| {
                        view! {
                            <div class="footer__caption mono">
                                <p>{c}</p>
                            </div>
                        }
                    })}
            </div>
        </footer>
    }
}

/// Plain-text rendering of the tagline, used where markup is unavailable.
pub fn tagline_plain(portfolio: &Portfolio) -> Vec<String> {
    let mut out = vec![String::new()];
    for run in &portfolio.hero.tagline {
        match run {
            RichText::Plain(s) | RichText::Emphasis(s) => {
                if let Some(last) = out.last_mut() {
                    last.push_str(s);
                }
            }
            RichText::Break => out.push(String::new()),
        }
    }
    out.retain(|p| !p.trim().is_empty());
    out
}

#[cfg(test)]
#[path = "../../tests/unit/markup/page.rs"]
mod tests;
