use anyhow::{Context, Result};
use clap::Parser;
use md_lexical_config::Config;
use md_lexical_engine::markdown_to_lexical;
use std::{
    fs,
    path::{Path, PathBuf},
};

mod source;

use source::{PrepareOptions, prepare};

/// Convert a Markdown note into Lexical document JSON.
#[derive(Debug, Parser)]
#[command(name = "md-lexical", version, about)]
struct Cli {
    /// Markdown file to convert
    input: PathBuf,

    /// Write the JSON here instead of the configured output directory or stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,

    /// Use this config file instead of ~/.config/md-lexical/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Convert a leading frontmatter block as ordinary text
    #[arg(long)]
    keep_frontmatter: bool,

    /// Convert a leading image line as an ordinary image block
    #[arg(long)]
    keep_feature_image: bool,

    /// Write the extracted feature image as JSON here. Defaults to
    /// `<stem>.feature-image.json` beside the output file.
    #[arg(long, value_name = "FILE")]
    feature_image: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let config = load_config(cli.config.as_deref())?;
    log::debug!("Using config: {config:?}");

    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;

    let prepared = prepare(
        &text,
        PrepareOptions {
            strip_frontmatter: config.strip_frontmatter && !cli.keep_frontmatter,
            extract_feature_image: config.extract_feature_image && !cli.keep_feature_image,
        },
    );
    let doc = markdown_to_lexical(prepared.body);
    log::debug!("Converted {} top-level blocks", doc.root.children().len());

    let json = if cli.pretty || config.pretty {
        doc.to_json_pretty()?
    } else {
        doc.to_json()?
    };

    let output = output_path(&cli, &config);
    match &output {
        Some(path) => write_file(path, &json)?,
        None => println!("{json}"),
    }

    if let Some(image) = &prepared.feature_image {
        match feature_image_path(&cli, output.as_deref()) {
            Some(path) => write_file(&path, &serde_json::to_string_pretty(image)?)?,
            None => log::info!("Feature image: {} (alt: {:?})", image.src, image.alt),
        }
    }

    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("Config file not found: {}", path.display()))?,
        None => Config::load()?.unwrap_or_default(),
    };
    Ok(config)
}

/// Explicit `--output` wins; otherwise `<output_dir>/<stem>.json`; otherwise stdout.
fn output_path(cli: &Cli, config: &Config) -> Option<PathBuf> {
    if let Some(path) = &cli.output {
        return Some(path.clone());
    }
    let dir = config.output_dir.as_ref()?;
    let mut name = cli.input.file_stem()?.to_os_string();
    name.push(".json");
    Some(dir.join(name))
}

/// Explicit `--feature-image` wins; otherwise `<stem>.feature-image.json`
/// beside the JSON output. Stdout output has no sidecar.
fn feature_image_path(cli: &Cli, output: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = &cli.feature_image {
        return Some(path.clone());
    }
    let output = output?;
    let mut name = output.file_stem()?.to_os_string();
    name.push(".feature-image.json");
    Some(output.with_file_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("md-lexical").chain(args.iter().copied()))
    }

    #[test]
    fn explicit_output_wins() {
        let config = Config {
            output_dir: Some(PathBuf::from("/out")),
            ..Config::default()
        };
        let cli = cli(&["notes/post.md", "-o", "x.json"]);
        assert_eq!(output_path(&cli, &config), Some(PathBuf::from("x.json")));
    }

    #[test]
    fn output_dir_uses_input_stem() {
        let config = Config {
            output_dir: Some(PathBuf::from("/out")),
            ..Config::default()
        };
        let cli = cli(&["notes/my.post.md"]);
        assert_eq!(
            output_path(&cli, &config),
            Some(PathBuf::from("/out/my.post.json"))
        );
    }

    #[test]
    fn no_destination_means_stdout() {
        let cli = cli(&["post.md"]);
        assert_eq!(output_path(&cli, &Config::default()), None);
    }

    #[test]
    fn feature_image_sits_beside_output() {
        let cli = cli(&["post.md"]);
        assert_eq!(
            feature_image_path(&cli, Some(Path::new("/out/my.post.json"))),
            Some(PathBuf::from("/out/my.post.feature-image.json"))
        );
        assert_eq!(feature_image_path(&cli, None), None);
    }

    #[test]
    fn explicit_feature_image_path_wins() {
        let cli = cli(&["post.md", "--feature-image", "cover.json"]);
        assert_eq!(
            feature_image_path(&cli, None),
            Some(PathBuf::from("cover.json"))
        );
    }
}
