use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    content::model::Portfolio,
    foundation::error::VitrineResult,
    markup::page::{Page, STYLESHEET_HREF, current_year, render_page_for_year},
    site::fingerprint::fingerprint_bytes,
};

/// Name of the generated document inside the output directory.
pub const INDEX_FILE: &str = "index.html";

#[derive(Clone, Debug, Default)]
pub struct BuildOptions {
    /// Rewrite files even when their content is unchanged.
    pub force: bool,
    /// Footer year when the content does not pin one; defaults to the clock.
    pub year: Option<i32>,
}

/// Outcome of one build: which files were written and which were already current.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub written: Vec<PathBuf>,
    pub unchanged: Vec<PathBuf>,
}

/// Render `portfolio` and write `index.html` + `style.css` into `out_dir`.
#[tracing::instrument(skip(portfolio, opts), fields(out_dir = %out_dir.display()))]
pub fn build_site(
    portfolio: &Portfolio,
    out_dir: &Path,
    opts: &BuildOptions,
) -> VitrineResult<BuildReport> {
    let Page { html, css } =
        render_page_for_year(portfolio, opts.year.unwrap_or_else(current_year))?;

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create output dir '{}'", out_dir.display()))?;

    let mut report = BuildReport::default();
    for (name, contents) in [(INDEX_FILE, html), (STYLESHEET_HREF, css)] {
        let path = out_dir.join(name);
        if !opts.force && is_current(&path, contents.as_bytes()) {
            tracing::debug!(path = %path.display(), "unchanged");
            report.unchanged.push(path);
            continue;
        }
        std::fs::write(&path, contents.as_bytes())
            .with_context(|| format!("write '{}'", path.display()))?;
        tracing::info!(path = %path.display(), bytes = contents.len(), "wrote");
        report.written.push(path);
    }
    Ok(report)
}

fn is_current(path: &Path, contents: &[u8]) -> bool {
    match std::fs::read(path) {
        Ok(existing) => fingerprint_bytes(&existing) == fingerprint_bytes(contents),
        Err(_) => false,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/build.rs"]
mod tests;
