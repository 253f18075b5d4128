//! fa2png
//!
//! Export glyphs from an icon font (Font Awesome and compatible fonts) as
//! individually sized, colored PNG images with a transparent background.
//!
//! An icon name is resolved to a code point through an [`IconTable`] (the
//! embedded Font Awesome table, or one rebuilt from the font's stylesheet),
//! rasterized by a [`GlyphRasterizer`], trimmed to its ink bounds and centered
//! in a square canvas.
//!
//! # Example
//!
//! ```no_run
//! use fa2png::{Exporter, GlyphRasterizer, IconTable, PngFileWriter, Rgba};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = IconTable::builtin();
//! let font = GlyphRasterizer::from_file("fontawesome-webfont.ttf")?;
//! let color: Rgba = "steelblue".parse()?;
//!
//! let mut exporter = Exporter::new(&table, &font, 32, color);
//! exporter.export(&["home", "user"], Some("icon-"), &mut PngFileWriter)?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod error;
pub use error::{Error, Result};

pub mod icons;
pub use icons::{IconEntry, IconTable};

// Stylesheet loader (rebuilds the icon table from `:before` rules)
#[cfg(feature = "stylesheet")]
pub mod stylesheet;

pub mod rendering;
pub use rendering::{GlyphRasterizer, RasterResult, Rgba};

pub mod export;
pub use export::{ExportJob, Exporter, IconWriter, MemoryWriter, PngFileWriter, ALL_ICONS};

/// Default font file, looked up relative to the working directory.
pub const DEFAULT_FONT: &str = "fontawesome-webfont.ttf";

/// Default icon size in pixels.
pub const DEFAULT_SIZE: u32 = 16;

/// Settings for one export run.
///
/// The defaults match the command-line defaults: the Font Awesome webfont in
/// the current directory, 16 pixels, black, names derived from icon names.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Font file to rasterize with
    pub font_path: PathBuf,
    /// Optional stylesheet replacing the built-in icon table
    pub stylesheet_path: Option<PathBuf>,
    /// Icon size in pixels (width and height)
    pub size: u32,
    /// Glyph color
    pub color: Rgba,
    /// Output filename, or filename prefix when exporting several icons
    pub filename: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from(DEFAULT_FONT),
            stylesheet_path: None,
            size: DEFAULT_SIZE,
            color: Rgba::BLACK,
            filename: None,
        }
    }
}

impl ExportConfig {
    /// Check that the font file exists and can be read and that the size is
    /// usable. Run before any icon is resolved or rendered.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::ConfigError("icon size must be positive".to_string()));
        }
        let readable = self.font_path.is_file() && std::fs::File::open(&self.font_path).is_ok();
        if !readable {
            return Err(Error::ConfigError(format!(
                "Font file ({}) can't be opened",
                self.font_path.display()
            )));
        }
        Ok(())
    }

    /// Build the icon table this configuration selects: the stylesheet's
    /// icons when one is given, the built-in table otherwise.
    pub fn build_table(&self) -> Result<IconTable> {
        match &self.stylesheet_path {
            #[cfg(feature = "stylesheet")]
            Some(path) => IconTable::from_stylesheet(path),
            #[cfg(not(feature = "stylesheet"))]
            Some(path) => Err(Error::ConfigError(format!(
                "cannot load {}: built without the `stylesheet` feature",
                path.display()
            ))),
            None => {
                log::info!("using built-in icon table");
                Ok(IconTable::builtin())
            }
        }
    }
}
