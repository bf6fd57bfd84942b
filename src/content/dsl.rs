use crate::{
    content::model::{
        About, Author, EducationEntry, Footer, Hero, ImageRef, PageConfig, Portfolio,
        PressMention, ProjectEntry, PublicationEntry, Resume, ResumeEntry, ResumeSection,
        RichText, SocialLinkEntry, TalkLink, TalkSeries,
    },
    foundation::error::VitrineResult,
};

/// Fluent construction of a [`Portfolio`]; `build` validates.
pub struct PortfolioBuilder {
    title: Option<String>,
    hero: Hero,
    publications: Vec<PublicationEntry>,
    projects: Vec<ProjectEntry>,
    resume: Resume,
    about: Option<About>,
    footer: Footer,
    config: PageConfig,
}

impl PortfolioBuilder {
    pub fn new(heading: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            title: None,
            hero: Hero {
                heading: heading.into(),
                tagline: Vec::new(),
                links: Vec::new(),
            },
            publications: Vec::new(),
            projects: Vec::new(),
            resume: Resume::default(),
            about: None,
            footer: Footer {
                owner: owner.into(),
                year: None,
                rights: "All rights reserved.".to_string(),
                caption: None,
            },
            config: PageConfig::default(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn plain(mut self, text: impl Into<String>) -> Self {
        self.hero.tagline.push(RichText::Plain(text.into()));
        self
    }

    pub fn emphasis(mut self, text: impl Into<String>) -> Self {
        self.hero.tagline.push(RichText::Emphasis(text.into()));
        self
    }

    pub fn paragraph_break(mut self) -> Self {
        self.hero.tagline.push(RichText::Break);
        self
    }

    pub fn link(mut self, link: SocialLinkEntry) -> Self {
        self.hero.links.push(link);
        self
    }

    pub fn publication(mut self, publication: PublicationEntry) -> Self {
        self.publications.push(publication);
        self
    }

    pub fn project(mut self, project: ProjectEntry) -> Self {
        self.projects.push(project);
        self
    }

    pub fn education(
        mut self,
        institution: impl Into<String>,
        degree: impl Into<String>,
        years: impl Into<String>,
    ) -> Self {
        self.resume.education.push(EducationEntry {
            institution: institution.into(),
            degree: degree.into(),
            years: years.into(),
        });
        self
    }

    pub fn skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resume.skills.extend(skills.into_iter().map(Into::into));
        self
    }

    pub fn press(
        mut self,
        title: impl Into<String>,
        outlet: impl Into<String>,
        href: impl Into<String>,
    ) -> Self {
        self.resume.press.push(PressMention {
            title: title.into(),
            outlet: outlet.into(),
            href: href.into(),
        });
        self
    }

    /// Talks at one venue as `(label, href)` pairs.
    pub fn talks<I, L, H>(mut self, venue: impl Into<String>, links: I) -> Self
    where
        I: IntoIterator<Item = (L, H)>,
        L: Into<String>,
        H: Into<String>,
    {
        self.resume.talks.push(TalkSeries {
            venue: venue.into(),
            links: links
                .into_iter()
                .map(|(label, href)| TalkLink {
                    label: label.into(),
                    href: href.into(),
                })
                .collect(),
        });
        self
    }

    pub fn resume_section<I>(mut self, heading: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = ResumeEntry>,
    {
        self.resume.sections.push(ResumeSection {
            heading: heading.into(),
            entries: entries.into_iter().collect(),
        });
        self
    }

    pub fn about<I, S>(
        mut self,
        portrait_src: impl Into<String>,
        portrait_alt: impl Into<String>,
        paragraphs: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.about = Some(About {
            portrait: ImageRef {
                src: portrait_src.into(),
                alt: portrait_alt.into(),
            },
            paragraphs: paragraphs.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn copyright_year(mut self, year: i32) -> Self {
        self.footer.year = Some(year);
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.footer.caption = Some(caption.into());
        self
    }

    pub fn config(mut self, config: PageConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> VitrineResult<Portfolio> {
        let portfolio = Portfolio {
            title: self.title,
            hero: self.hero,
            publications: self.publications,
            projects: self.projects,
            resume: self.resume,
            about: self.about,
            footer: self.footer,
            config: self.config,
        };
        portfolio.validate()?;
        Ok(portfolio)
    }
}

/// Publication with authors given as `(name, highlight)` pairs.
pub fn publication<I, S>(
    year: impl Into<String>,
    title: impl Into<String>,
    href: impl Into<String>,
    authors: I,
    venue: impl Into<String>,
) -> PublicationEntry
where
    I: IntoIterator<Item = (S, bool)>,
    S: Into<String>,
{
    PublicationEntry {
        year: year.into(),
        title: title.into(),
        href: href.into(),
        authors: authors
            .into_iter()
            .map(|(name, highlight)| Author {
                name: name.into(),
                highlight,
            })
            .collect(),
        authors_suffix: None,
        venue: venue.into(),
    }
}

pub fn project(
    title: impl Into<String>,
    href: impl Into<String>,
    tag: impl Into<String>,
    description: impl Into<String>,
) -> ProjectEntry {
    ProjectEntry {
        title: title.into(),
        href: href.into(),
        tag: tag.into(),
        description: description.into(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/dsl.rs"]
mod tests;
