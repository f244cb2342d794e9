use super::state::ImportableResource;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// How the resource collection is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One pretty-printed JSON array
    #[default]
    Json,
    /// One compact JSON object per line
    JsonLines,
}

/// Serialize `resources` to `writer` in the requested format
pub fn write_resources<W: Write>(
    resources: &[ImportableResource],
    format: OutputFormat,
    mut writer: W,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, resources)
                .context("Failed to serialize resources as JSON")?;
            writeln!(writer)?;
        }
        OutputFormat::JsonLines => {
            for resource in resources {
                serde_json::to_writer(&mut writer, resource)
                    .with_context(|| format!("Failed to serialize {}", resource.address()))?;
                writeln!(writer)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

/// Write to `path` when given, otherwise to stdout
pub fn write_resources_to(
    resources: &[ImportableResource],
    format: OutputFormat,
    path: Option<&Path>,
) -> Result<()> {
    match path {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file {:?}", path))?;
            write_resources(resources, format, std::io::BufWriter::new(file))
        }
        None => {
            let stdout = std::io::stdout();
            write_resources(resources, format, stdout.lock())
        }
    }
}
