//! The export run: reset output, fetch, map, write.

use std::path::{Path, PathBuf};

use anyhow::Context;
use luis_botmock::BotmockClient;
use luis_config::{BotmockConfig, LuisConfig};
use luis_core::{Project, build_document};
use tokio::sync::mpsc;

use crate::progress::{Progress, report_fetch_events};
use crate::writer;

/// Where the project comes from.
#[derive(Debug, Clone)]
pub enum Source {
    Botmock,
    File(PathBuf),
}

/// Run one export and return the path of the written document.
///
/// The output directory is reset before anything is fetched and is left as
/// is if a later step fails.
pub async fn run(source: &Source, config: &LuisConfig, quiet: bool) -> anyhow::Result<PathBuf> {
    let output_dir = config.export.output_dir();
    tracing::info!(dir = %output_dir.display(), "recreating output directory");
    writer::reset_output_dir(&output_dir)?;

    let project = match source {
        Source::Botmock => fetch_project(&config.botmock, quiet).await?,
        Source::File(path) => read_project(path)?,
    };
    project.validate()?;

    let document = build_document(&project, &config.export.settings())
        .with_context(|| format!("failed to map project '{}'", project.name))?;

    let path = writer::destination(&output_dir, &project);
    tracing::info!(path = %path.display(), "generating json for project");
    writer::write_document(&path, &document)?;
    tracing::info!("done");
    Ok(path)
}

async fn fetch_project(config: &BotmockConfig, quiet: bool) -> anyhow::Result<Project> {
    let client = BotmockClient::new(config).context("failed to create botmock client")?;
    let progress = Progress::spinner("fetching botmock assets", quiet);
    tracing::info!("fetching botmock assets");

    let (tx, rx) = mpsc::unbounded_channel();
    let reporter = tokio::spawn(report_fetch_events(rx, progress.clone()));
    let result = client.fetch(Some(&tx)).await;
    drop(tx);
    let fetched = reporter.await.context("progress reporter task failed")?;

    match result {
        Ok(project) => {
            progress.finish_ok(&format!("fetched {fetched} assets"));
            Ok(project)
        }
        Err(error) => {
            progress.finish_err("fetch failed");
            Err(anyhow::Error::from(error).context("failed to fetch botmock project"))
        }
    }
}

fn read_project(path: &Path) -> anyhow::Result<Project> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read project file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("invalid project file {}", path.display()))
}
