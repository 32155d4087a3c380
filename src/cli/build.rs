//! Static build: render every registered topic into the output directory.

use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, Ordering},
};

use crate::{
    config::SiteConfig,
    content::Topic,
    core::{RouteKey, is_shutdown},
    embed,
    generator::sitemap::build_sitemap,
    log,
    logger::ProgressLine,
    registry::Registry,
    render::{RenderContext, render_topic},
};

/// Build the whole site: pages, 404, stylesheet, sitemap.
pub fn build_site(registry: &Registry, config: &SiteConfig) -> Result<()> {
    init_output(config)?;
    embed::write_embedded_assets(&config.build.output)?;

    let stylesheet = embed::stylesheet_href();
    let ctx = RenderContext {
        site_title: &config.site.title,
        stylesheet: &stylesheet,
    };

    // Registered pages plus the 404 page
    let progress = ProgressLine::new(&[("pages", registry.len() + 1)]);
    render_pages(registry, config, &ctx, &progress)?;

    let not_found = render_topic(registry.fallback(), &ctx);
    fs::write(config.build.output.join("404.html"), not_found)
        .context("Failed to write 404.html")?;
    progress.inc("pages");
    progress.finish();

    build_sitemap(registry, config)?;

    log!("build"; "done: {}", config.build.output.display());
    Ok(())
}

/// Prepare the output directory, clearing it first when `--clean` is set.
fn init_output(config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;

    if config.build.clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clear output directory: {}", output.display()))?;
    }

    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;
    Ok(())
}

/// Render all registered pages in parallel.
fn render_pages(
    registry: &Registry,
    config: &SiteConfig,
    ctx: &RenderContext<'_>,
    progress: &ProgressLine,
) -> Result<()> {
    let has_error = AtomicBool::new(false);
    let pages: Vec<&Topic> = registry.topics().collect();

    pages.par_iter().try_for_each(|topic| {
        if is_shutdown() || has_error.load(Ordering::Relaxed) {
            return Err(anyhow!("Aborted"));
        }
        if let Err(e) = write_page(topic, config, ctx) {
            if !has_error.swap(true, Ordering::Relaxed) {
                log!("error"; "{}: {:#}", topic.route, e);
            }
            return Err(anyhow!("Build failed"));
        }
        progress.inc("pages");
        Ok(())
    })
}

/// Render one topic and write it to its output file.
fn write_page(topic: &Topic, config: &SiteConfig, ctx: &RenderContext<'_>) -> Result<()> {
    let path = output_file(&config.build.output, &topic.route);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let html = render_topic(topic, ctx);
    fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Output file for a route: `/` -> `index.html`,
/// `/state/lift-state/` -> `state/lift-state/index.html`.
fn output_file(output_dir: &Path, route: &RouteKey) -> PathBuf {
    let mut path = output_dir.to_path_buf();
    for segment in route.segments() {
        path.push(segment);
    }
    path.push("index.html");
    path
}
