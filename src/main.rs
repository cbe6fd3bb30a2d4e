use clap::Parser;
use onepager::{
    DEFAULT_MARKDOWN, EmojiFontChoice, GeneratorConfig, OnePagerBuilder, PipelineError,
    RenderOptions, save_png, segment,
};
use std::fs;
use std::path::PathBuf;

/// Turns a markdown outline into a two-column one-page PDF.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Markdown outline to render. The bundled sample is used when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Emoji font used for emoji runs.
    #[arg(long, value_enum, default_value_t = EmojiFontChoice::Variable)]
    font: EmojiFontChoice,

    /// Leave emoji in the text font instead of loading an emoji font.
    #[arg(long, conflicts_with = "font")]
    no_emoji_font: bool,

    /// Derive the font size from the amount of content (6-12pt). On by default.
    #[arg(long, overrides_with = "no_auto_size")]
    auto_size: bool,

    /// Use --font-size as is.
    #[arg(long, overrides_with = "auto_size")]
    no_auto_size: bool,

    /// Base font size in points, used with --no-auto-size.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(6..=16))]
    font_size: u32,

    /// Directory holding the NotoEmoji font files.
    #[arg(long, env = "ONEPAGER_FONT_DIR")]
    font_dir: Option<PathBuf>,

    /// Page title.
    #[arg(long)]
    title: Option<String>,

    /// JSON generator configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the PDF.
    #[arg(short, long, default_value = "ml_outline.pdf")]
    output: PathBuf,

    /// Also write the source markdown.
    #[arg(long, num_args = 0..=1, default_missing_value = "ml_outline.md")]
    save_markdown: Option<PathBuf>,

    /// Write a PNG preview of page 1.
    #[arg(long)]
    preview: Option<PathBuf>,

    /// Preview zoom factor; defaults to the configured scale.
    #[arg(long)]
    preview_scale: Option<f32>,

    /// Print the segmented columns as JSON and exit.
    #[arg(long)]
    dump_blocks: bool,

    /// Log debug output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), PipelineError> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let markdown = match &cli.input {
        Some(path) => fs::read_to_string(path)?,
        None => DEFAULT_MARKDOWN.to_string(),
    };

    if cli.dump_blocks {
        let (left, right) = segment(&markdown);
        let dump = serde_json::json!({ "left": left, "right": right });
        println!("{}", serde_json::to_string_pretty(&dump)?);
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(scale) = cli.preview_scale {
        config.preview_scale = scale;
    }

    let mut builder = OnePagerBuilder::new().with_config(config);
    if let Some(dir) = &cli.font_dir {
        builder = builder.with_font_dir(dir);
    }
    let emoji_font = (!cli.no_emoji_font).then_some(cli.font);
    if let Some(choice) = emoji_font {
        builder = builder.with_emoji_font(choice);
    }
    let generator = builder.build()?;

    let options = RenderOptions {
        base_font_size: cli.font_size,
        auto_size: cli.auto_size || !cli.no_auto_size,
        emoji_font,
        title: cli.title.clone(),
    };
    let document = generator.generate(&markdown, &options)?;
    if document.page_count > 1 {
        log::warn!(
            "Content did not fit on one page ({} pages); try a smaller --font-size",
            document.page_count
        );
    }

    document.write_pdf(&cli.output)?;
    println!("Wrote {}", cli.output.display());

    if let Some(path) = &cli.save_markdown {
        document.write_markdown(path)?;
        println!("Wrote {}", path.display());
    }

    if let Some(path) = &cli.preview {
        match generator.preview(&document).and_then(|image| save_png(&image, path)) {
            Ok(()) => println!("Wrote {}", path.display()),
            Err(e) => {
                eprintln!("Failed to render PDF preview: {}", e);
                eprintln!("Download the PDF to view it locally: {}", cli.output.display());
            }
        }
    }

    Ok(())
}
