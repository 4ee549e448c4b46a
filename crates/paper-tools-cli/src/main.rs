use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use paper_export::{ExportFormat, ExportOptions};
use paper_pattern::{
    JsonFileStore, Orientation, PageConfig, PaperConfig, PaperSize, PatternType, TemplateStore,
    TileCache, WatermarkConfig, compose_document,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "papr", about = "Printable paper template generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render paper to PNG, JPG or PDF
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Output format
        #[arg(long, default_value = "pdf", value_enum)]
        format: FormatArg,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,

        /// Raster resolution
        #[arg(long, default_value = "300")]
        dpi: f32,

        /// JPEG quality (1-100)
        #[arg(long, default_value = "95")]
        quality: u8,
    },

    /// Write a vector PDF for printing
    Print {
        #[command(flatten)]
        source: SourceArgs,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// List the built-in templates
    Templates,

    /// List the color themes
    Themes,

    /// Export or import configuration documents
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Manage saved templates
    Saved {
        #[command(subcommand)]
        command: SavedCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Write the configuration as a dated settings document
    Export {
        #[command(flatten)]
        source: SourceArgs,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
    /// Validate a settings document and print the merged configuration
    Import {
        /// Settings document
        input: PathBuf,
    },
}

#[derive(Subcommand)]
enum SavedCommands {
    /// List saved templates
    List {
        #[command(flatten)]
        store: StoreArgs,
    },
    /// Save the configuration under a name (into --store)
    Save {
        /// Display name
        name: String,

        #[command(flatten)]
        source: SourceArgs,
    },
    /// Delete a saved template by id
    Delete {
        id: String,

        #[command(flatten)]
        store: StoreArgs,
    },
}

#[derive(Args)]
struct StoreArgs {
    /// Directory holding the saved templates file
    #[arg(long, default_value = ".")]
    store: PathBuf,
}

impl StoreArgs {
    fn open(&self) -> JsonFileStore {
        JsonFileStore::in_dir(&self.store)
    }
}

/// Where the configuration comes from, plus field overrides
#[derive(Args)]
struct SourceArgs {
    /// Start from a built-in template id
    #[arg(short, long)]
    template: Option<String>,

    /// Start from a settings document (applied after --template)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start from a saved template id in --store
    #[arg(long)]
    saved: Option<String>,

    #[command(flatten)]
    store: StoreArgs,

    /// Apply a color theme
    #[arg(long)]
    theme: Option<String>,

    /// Pattern family (e.g. lined, grid, pinyin_tianzi)
    #[arg(long, value_parser = parse_pattern)]
    pattern: Option<PatternType>,

    /// Paper size (A3, A4, A5, B4, B5, Letter, Legal, Tabloid, Executive)
    #[arg(long, value_parser = parse_size)]
    size: Option<PaperSize>,

    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Pattern spacing in mm
    #[arg(long)]
    spacing: Option<f32>,

    /// Stroke color as #rrggbb
    #[arg(long)]
    color: Option<String>,

    /// Number of pages
    #[arg(long)]
    pages: Option<usize>,

    /// Print page numbers
    #[arg(long)]
    page_numbers: bool,

    /// Watermark text
    #[arg(long)]
    watermark: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Png,
    Jpg,
    Pdf,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Png => Self::Png,
            FormatArg::Jpg => Self::Jpg,
            FormatArg::Pdf => Self::Pdf,
        }
    }
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

fn parse_pattern(value: &str) -> std::result::Result<PatternType, String> {
    PatternType::ALL
        .into_iter()
        .find(|p| p.name() == value)
        .ok_or_else(|| format!("unknown pattern '{}'", value))
}

fn parse_size(value: &str) -> std::result::Result<PaperSize, String> {
    PaperSize::NAMED
        .into_iter()
        .find(|s| s.name().eq_ignore_ascii_case(value))
        .ok_or_else(|| format!("unknown paper size '{}'", value))
}

impl SourceArgs {
    async fn resolve(&self) -> Result<PaperConfig> {
        let mut config = PaperConfig::default();
        if let Some(id) = &self.template {
            config = config.with_template(id)?;
        }
        if let Some(path) = &self.config {
            config = PaperConfig::import_file(path)
                .await
                .with_context(|| format!("Failed to import {}", path.display()))?;
        }
        if let Some(id) = &self.saved {
            let saved = self.store.open().list().await?;
            config = match saved.into_iter().find(|t| &t.id == id) {
                Some(found) => found,
                None => bail!("No saved template with id {}", id),
            };
        }
        if let Some(key) = &self.theme {
            config = config.with_theme(key)?;
        }

        if let Some(pattern) = self.pattern {
            config.pattern = pattern;
        }
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(orientation) = self.orientation {
            config.orientation = orientation.into();
        }
        if let Some(spacing) = self.spacing {
            config.spacing = spacing;
        }
        if let Some(color) = &self.color {
            config.stroke_color = color.clone();
        }
        if self.pages.is_some() || self.page_numbers {
            config = config.with_pages(PageConfig {
                count: self.pages.unwrap_or(config.pages.count),
                show_numbers: self.page_numbers || config.pages.show_numbers,
                ..config.pages
            });
        }
        if let Some(text) = &self.watermark {
            config = config.with_watermark(WatermarkConfig {
                enabled: true,
                text: text.clone(),
                ..config.watermark.clone()
            });
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            source,
            format,
            out,
            dpi,
            quality,
        } => {
            let config = source.resolve().await?;
            let mut cache = TileCache::new();
            let scenes = compose_document(&config, &mut cache);
            let options = ExportOptions {
                dpi,
                jpeg_quality: quality,
            };
            let path =
                paper_export::export_to_dir(scenes, &config.name, format.into(), options, &out)
                    .await
                    .context("Export failed")?;
            println!("Rendered '{}' → {}", config.name, path.display());
        }

        Commands::Print { source, output } => {
            let config = source.resolve().await?;
            let mut cache = TileCache::new();
            let scenes = compose_document(&config, &mut cache);
            let pages = scenes.len();
            paper_export::save_print_document(scenes, &config.name, &output)
                .await
                .context("Print document failed")?;
            println!("Printed {} page(s) → {}", pages, output.display());
        }

        Commands::Templates => {
            for template in paper_pattern::templates() {
                println!(
                    "{:<22} {:<28} {}",
                    template.id,
                    template.name,
                    template.pattern.name()
                );
            }
        }

        Commands::Themes => {
            for theme in paper_pattern::themes() {
                println!(
                    "{:<12} stroke {}  background {}  pattern {}",
                    theme.key, theme.stroke_color, theme.background_color, theme.pattern_color
                );
            }
        }

        Commands::Config { command } => match command {
            ConfigCommands::Export { source, out } => {
                let config = source.resolve().await?;
                let path = out.join(paper_pattern::settings_file_name());
                config.save(&path).await?;
                println!("Exported settings → {}", path.display());
            }
            ConfigCommands::Import { input } => {
                let config = PaperConfig::import_file(&input)
                    .await
                    .with_context(|| format!("Failed to import {}", input.display()))?;
                println!("{}", config.to_json()?);
            }
        },

        Commands::Saved { command } => match command {
            SavedCommands::List { store } => {
                let templates = store.open();
                let saved = templates.list().await?;
                if saved.is_empty() {
                    println!("No saved templates in {}", templates.path().display());
                }
                for config in saved {
                    println!(
                        "{:<24} {:<28} {}",
                        config.id,
                        config.name,
                        config.pattern.name()
                    );
                }
            }
            SavedCommands::Save { name, source } => {
                let config = source.resolve().await?;
                let templates = source.store.open();
                let saved = paper_pattern::save_template(&templates, &config, &name).await?;
                println!("Saved '{}' as {}", saved.name, saved.id);
            }
            SavedCommands::Delete { id, store } => {
                if store.open().remove(&id).await? {
                    println!("Deleted {}", id);
                } else {
                    bail!("No saved template with id {}", id);
                }
            }
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_store_dir_reaches_every_source() {
        match parse(&["papr", "render", "--saved", "notes", "--store", "/tmp/papers"]).command {
            Commands::Render { source, .. } => {
                assert_eq!(source.saved.as_deref(), Some("notes"));
                assert_eq!(source.store.store, PathBuf::from("/tmp/papers"));
            }
            _ => panic!("expected render"),
        }
        match parse(&["papr", "print", "-o", "out.pdf", "--store", "/tmp/papers"]).command {
            Commands::Print { source, .. } => {
                assert_eq!(source.store.store, PathBuf::from("/tmp/papers"))
            }
            _ => panic!("expected print"),
        }
        match parse(&["papr", "config", "export"]).command {
            Commands::Config {
                command: ConfigCommands::Export { source, .. },
            } => assert_eq!(source.store.store, PathBuf::from(".")),
            _ => panic!("expected config export"),
        }
    }

    #[test]
    fn test_saved_subcommands_take_store() {
        match parse(&["papr", "saved", "save", "Mine", "--store", "s"]).command {
            Commands::Saved {
                command: SavedCommands::Save { name, source },
            } => {
                assert_eq!(name, "Mine");
                assert_eq!(source.store.store, PathBuf::from("s"));
            }
            _ => panic!("expected saved save"),
        }
        match parse(&["papr", "saved", "delete", "x", "--store", "s"]).command {
            Commands::Saved {
                command: SavedCommands::Delete { id, store },
            } => {
                assert_eq!(id, "x");
                assert_eq!(store.store, PathBuf::from("s"));
            }
            _ => panic!("expected saved delete"),
        }
    }

    #[tokio::test]
    async fn test_saved_source_reads_the_given_store() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = JsonFileStore::in_dir(dir.path());
        let saved = paper_pattern::save_template(
            &store,
            &PaperConfig {
                pattern: PatternType::Dot,
                ..PaperConfig::default()
            },
            "Dots",
        )
        .await
        .unwrap();

        let store_dir = dir.path().to_string_lossy().to_string();
        let cli = parse(&["papr", "render", "--saved", &saved.id, "--store", &store_dir]);
        let Commands::Render { source, .. } = cli.command else {
            panic!("expected render");
        };
        let config = source.resolve().await.unwrap();
        assert_eq!(config.pattern, PatternType::Dot);
        assert_eq!(config.id, saved.id);
    }
}
