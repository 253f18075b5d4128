//! Batch export: resolve requested names, derive output paths, render and
//! persist one icon at a time.
//!
//! Name resolution is a separate upfront pass ([`plan`]), so an unknown name
//! fails the whole batch before anything is rendered or written. Once
//! rendering starts, files already written stay written if a later icon
//! fails.

use crate::icons::{strip_prefix, IconTable};
use crate::rendering::{GlyphRasterizer, RasterResult, Rgba};
use crate::{Error, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Request sentinel that expands to every icon in the table.
pub const ALL_ICONS: &str = "ALL";

/// One resolved unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportJob {
    pub name: String,
    pub codepoint: char,
    pub path: PathBuf,
}

/// Destination for rendered icons.
pub trait IconWriter {
    fn write(&mut self, path: &Path, icon: &RasterResult) -> Result<()>;
}

/// Writes each icon as a PNG file at its derived path.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngFileWriter;

impl IconWriter for PngFileWriter {
    fn write(&mut self, path: &Path, icon: &RasterResult) -> Result<()> {
        icon.save_png(path)
    }
}

/// Keeps rendered icons in memory, keyed by their derived path.
#[derive(Debug, Default, Clone)]
pub struct MemoryWriter {
    pub written: Vec<(PathBuf, RasterResult)>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paths(&self) -> Vec<&Path> {
        self.written.iter().map(|(p, _)| p.as_path()).collect()
    }
}

impl IconWriter for MemoryWriter {
    fn write(&mut self, path: &Path, icon: &RasterResult) -> Result<()> {
        self.written.push((path.to_path_buf(), icon.clone()));
        Ok(())
    }
}

/// Output path for `name` in a batch of `count` icons.
///
/// A single icon uses `filename` verbatim (or `<name>.png`); with several
/// icons `filename` becomes a prefix: `<filename><name>.png`.
pub fn output_path(name: &str, count: usize, filename: Option<&str>) -> PathBuf {
    match (count, filename) {
        (1, Some(f)) => PathBuf::from(f),
        (1, None) => PathBuf::from(format!("{}.png", name)),
        (_, prefix) => PathBuf::from(format!("{}{}.png", prefix.unwrap_or(""), name)),
    }
}

/// Resolve `requests` against `table` and derive every output path.
///
/// `["ALL"]` expands to the whole table in lexicographic order. Otherwise
/// names may carry an `icon-` prefix; the first unknown name fails the plan.
pub fn plan<S: AsRef<str>>(
    table: &IconTable,
    requests: &[S],
    filename: Option<&str>,
) -> Result<Vec<ExportJob>> {
    if requests.is_empty() {
        return Err(Error::ConfigError("no icon names given".to_string()));
    }

    let resolved: Vec<(String, char)> = if requests.len() == 1 && requests[0].as_ref() == ALL_ICONS {
        table.iter().map(|e| (e.name.to_string(), e.codepoint)).collect()
    } else {
        requests
            .iter()
            .map(|req| {
                let name = strip_prefix(req.as_ref());
                table.lookup(name).map(|cp| (name.to_string(), cp))
            })
            .collect::<Result<_>>()?
    };

    let count = resolved.len();
    Ok(resolved
        .into_iter()
        .map(|(name, codepoint)| {
            let path = output_path(&name, count, filename);
            ExportJob {
                name,
                codepoint,
                path,
            }
        })
        .collect())
}

type ReportHandler<'a> = Box<dyn FnMut(&ExportJob, u32) + 'a>;

/// Drives the rasterizer over a batch of icons.
pub struct Exporter<'a> {
    table: &'a IconTable,
    rasterizer: &'a GlyphRasterizer,
    size: u32,
    color: Rgba,
    on_export: Option<ReportHandler<'a>>,
}

impl<'a> Exporter<'a> {
    pub fn new(table: &'a IconTable, rasterizer: &'a GlyphRasterizer, size: u32, color: Rgba) -> Self {
        Self {
            table,
            rasterizer,
            size,
            color,
            on_export: None,
        }
    }

    /// Register a callback invoked with each job (and the icon size)
    /// right before the icon is rendered and written.
    pub fn on_export<F>(&mut self, cb: F)
    where
        F: FnMut(&ExportJob, u32) + 'a,
    {
        self.on_export = Some(Box::new(cb));
    }

    pub fn plan<S: AsRef<str>>(&self, requests: &[S], filename: Option<&str>) -> Result<Vec<ExportJob>> {
        plan(self.table, requests, filename)
    }

    /// Render and write every job in order. Returns the number written.
    pub fn run(&mut self, jobs: &[ExportJob], writer: &mut dyn IconWriter) -> Result<usize> {
        info!("exporting {} icon(s) at {}px in {}", jobs.len(), self.size, self.color);
        for job in jobs {
            if let Some(cb) = self.on_export.as_mut() {
                cb(job, self.size);
            }
            let icon = self.rasterizer.render(job.codepoint, self.size, self.color)?;
            writer.write(&job.path, &icon)?;
            debug!("wrote {} to {}", job.name, job.path.display());
        }
        Ok(jobs.len())
    }

    /// [`Exporter::plan`] followed by [`Exporter::run`].
    pub fn export<S: AsRef<str>>(
        &mut self,
        requests: &[S],
        filename: Option<&str>,
        writer: &mut dyn IconWriter,
    ) -> Result<usize> {
        let jobs = self.plan(requests, filename)?;
        self.run(&jobs, writer)
    }
}
