use anyhow::Context;
use clap::Parser;
use fa2png::{ExportConfig, Exporter, GlyphRasterizer, PngFileWriter, Rgba};
use std::path::PathBuf;

/// Exports Font Awesome icons as PNG images.
#[derive(Parser, Debug)]
#[command(name = "fa2png", version, about)]
struct Cli {
    /// The name(s) of the icon(s) to export (or "ALL" for all icons)
    #[arg(required_unless_present_any = ["list", "list_update"])]
    icon: Vec<String>,

    /// Color (HTML color code or name)
    #[arg(long, default_value = "black")]
    color: String,

    /// The name of the output file. If several icons are exported, it is
    /// used as a prefix.
    #[arg(long)]
    filename: Option<String>,

    /// Font file to use
    #[arg(long, default_value = fa2png::DEFAULT_FONT)]
    font: PathBuf,

    /// Stylesheet to read the icon name mapping from (e.g. font-awesome.css)
    #[arg(long, value_name = "FILE")]
    css: Option<PathBuf>,

    /// List available icon names and exit
    #[arg(long)]
    list: bool,

    /// Print the icon table as source literal lines and exit
    #[arg(long)]
    list_update: bool,

    /// Icon size in pixels
    #[arg(long, default_value_t = fa2png::DEFAULT_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    size: u32,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = ExportConfig {
        font_path: cli.font,
        stylesheet_path: cli.css,
        size: cli.size,
        filename: cli.filename,
        ..Default::default()
    };

    let table = config.build_table()?;

    if cli.list {
        for name in table.names() {
            println!("{}", name);
        }
        return Ok(());
    }
    if cli.list_update {
        for line in table.to_source_lines() {
            println!("{}", line);
        }
        return Ok(());
    }

    config.validate()?;
    config.color = cli.color.parse::<Rgba>()?;

    let rasterizer = GlyphRasterizer::from_file(&config.font_path)?;
    let mut exporter = Exporter::new(&table, &rasterizer, config.size, config.color);
    exporter.on_export(|job, size| {
        println!(
            "Exporting icon \"{}\" as {} ({}x{} pixels)",
            job.name,
            job.path.display(),
            size,
            size
        );
    });

    let jobs = exporter.plan(cli.icon.as_slice(), config.filename.as_deref())?;
    exporter
        .run(&jobs, &mut PngFileWriter)
        .context("export failed")?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
