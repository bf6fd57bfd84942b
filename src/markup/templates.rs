//! Leaf components: one content record in, one fragment of markup out.

use leptos::prelude::*;

use crate::{
    content::model::{
        EducationEntry, EntryBody, Icon, PressMention, ProjectEntry, PublicationEntry,
        ResumeEntry, SocialLinkEntry, TalkSeries,
    },
    markup::icons::Glyph,
};

/// `rel` carried by every outbound link: no opener back-reference, no referrer.
pub const EXTERNAL_REL: &str = "noopener noreferrer";

/// Server-render a view to an HTML string.
pub fn render_html(view: impl IntoView + 'static) -> String {
    let owner = Owner::new();
    owner.with(move || view.to_html())
}

/// Anchor that opens `href` in a new browsing context. `href` is not interpreted.
#[component]
pub fn ExternalLink(
    #[prop(into)] href: String,
    #[prop(into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href target="_blank" rel=EXTERNAL_REL class=class>
            {children()}
        </a>
    }
}

#[component]
pub fn SocialLink(entry: SocialLinkEntry) -> impl IntoView {
    let SocialLinkEntry { icon, label, href } = entry;
    view! {
        <ExternalLink href=href class="social-link">
            <Glyph icon=icon class="icon-md" />
            <span class="social-link__label">{label}</span>
        </ExternalLink>
    }
}

/// Title/date line, optional subtitle/location line, then the body.
#[component]
pub fn ResumeItem(entry: ResumeEntry) -> impl IntoView {
    let ResumeEntry {
        title,
        subtitle,
        date,
        location,
        body,
    } = entry;

    let meta = (subtitle.is_some() || location.is_some()).then(move || {
        view! {
            <div class="resume-item__meta">
                {subtitle.map(|s| view! { <span class="resume-item__subtitle">{s}</span> })}
                {location
                    .map(|l| {
                        view! {
                            <span class="resume-item__location">
                                <Glyph icon=Icon::MapPin class="icon-xs" />
                                {l}
                            </span>
                        }
                    })}
            </div>
        }
    });

    let body = match body {
        EntryBody::Empty => None,
        EntryBody::Paragraph(p) => Some(view! { <p>{p}</p> }.into_any()),
        EntryBody::Bullets(items) => Some(
            view! {
                <ul class="bullets">
                    {items.into_iter().map(|i| view! { <li>{i}</li> }).collect_view()}
                </ul>
            }
            .into_any(),
        ),
    };

    view! {
        <div class="resume-item">
            <div class="resume-item__head">
                <h4 class="resume-item__title">{title}</h4>
                <span class="resume-item__date mono">{date}</span>
            </div>
            {meta}
            <div class="resume-item__body">{body}</div>
        </div>
    }
}

/// Author list with highlighted names; adjacent plain names share one text run.
fn author_runs(entry: &PublicationEntry) -> Vec<AnyView> {
    let mut runs = Vec::new();
    let mut plain = String::new();
    for (i, author) in entry.authors.iter().enumerate() {
        if i > 0 {
            plain.push_str(", ");
        }
        if author.highlight {
            if !plain.is_empty() {
                runs.push(std::mem::take(&mut plain).into_any());
            }
            let name = author.name.clone();
            runs.push(view! { <span class="author--self">{name}</span> }.into_any());
        } else {
            plain.push_str(&author.name);
        }
    }
    if let Some(suffix) = &entry.authors_suffix {
        plain.push_str(", ");
        plain.push_str(suffix);
    }
    if !plain.is_empty() {
        runs.push(plain.into_any());
    }
    runs
}

#[component]
pub fn Publication(entry: PublicationEntry) -> impl IntoView {
    let authors = author_runs(&entry);
    let PublicationEntry {
        year,
        title,
        href,
        venue,
        ..
    } = entry;
    view! {
        <article class="publication">
            <div class="publication__year mono">{year}</div>
            <h3 class="publication__title">
                <ExternalLink href=href class="publication__link">
                    {title}
                </ExternalLink>
            </h3>
            <p class="publication__authors">{authors}</p>
            <p class="publication__venue">{venue}</p>
        </article>
    }
}

#[component]
pub fn Project(entry: ProjectEntry) -> impl IntoView {
    let ProjectEntry {
        title,
        href,
        tag,
        description,
    } = entry;
    view! {
        <div class="project card">
            <div class="project__head">
                <h3 class="project__title">
                    <ExternalLink href=href class="project__link">
                        {title}
                    </ExternalLink>
                </h3>
                <span class="tag mono">{tag}</span>
            </div>
            <p class="project__description">{description}</p>
        </div>
    }
}

#[component]
pub fn Education(entry: EducationEntry) -> impl IntoView {
    view! {
        <div class="education">
            <div class="education__institution">{entry.institution}</div>
            <div class="education__degree">{entry.degree}</div>
            <div class="education__years mono">{entry.years}</div>
        </div>
    }
}

#[component]
pub fn SkillTags(skills: Vec<String>) -> impl IntoView {
    view! {
        <div class="tags">
            {skills.into_iter().map(|s| view! { <span class="tag">{s}</span> }).collect_view()}
        </div>
    }
}

#[component]
pub fn Press(entry: PressMention) -> impl IntoView {
    let PressMention { title, outlet, href } = entry;
    let title = format!("\u{201c}{title}\u{201d}");
    view! {
        <ExternalLink href=href class="press">
            <div class="press__title">{title}</div>
            <div class="press__outlet">{outlet}</div>
        </ExternalLink>
    }
}

#[component]
pub fn Talks(series: TalkSeries) -> impl IntoView {
    view! {
        <div class="talks">
            <div class="talks__venue">{series.venue}</div>
            <div class="talks__links mono">
                {series
                    .links
                    .into_iter()
                    .map(|l| {
                        view! {
                            <ExternalLink href=l.href class="talks__link">
                                {l.label}
                            </ExternalLink>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Small uppercase heading used inside the resume columns.
#[component]
pub fn ColumnHeading(#[prop(into)] label: String) -> impl IntoView {
    view! { <h3 class="column-heading">{label}</h3> }
}

/// Section title with an optional leading glyph.
#[component]
pub fn SectionHeading(
    #[prop(into)] label: String,
    #[prop(optional)] glyph: Option<Icon>,
) -> impl IntoView {
    view! {
        <h2 class="section-heading">
            {glyph.map(|g| view! { <Glyph icon=g class="icon-lg" /> })}
            {label}
        </h2>
    }
}

#[cfg(test)]
#[path = "../../tests/unit/markup/templates.rs"]
mod tests;
