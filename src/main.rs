//! wikisect: extract body-text paragraphs from a Wikipedia article.
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, ValueEnum};
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use wikisect::formats::{
    markdown::MarkdownFormat, tokens::TokenStreamFormat, wikitext::WikitextFormat, Format,
};
use wikisect::{config, flatten, wikipedia, ExtractError};

#[derive(Parser)]
#[command(name = "wikisect")]
#[command(about = "Extract body-text paragraphs from Wikipedia articles", long_about = None)]
struct Args {
    /// Article URL, or a bare title looked up in the configured language
    #[arg(value_name = "ARTICLE", required_unless_present = "file")]
    article: Option<String>,

    /// Read the article source from a local file instead of the API
    #[arg(long, short = 'f', value_name = "PATH", conflicts_with = "article")]
    file: Option<PathBuf>,

    /// Source format of a local file (API extracts are always wikitext)
    #[arg(long, value_enum, default_value_t = SourceFormat::Wikitext, requires = "file")]
    format: SourceFormat,

    /// Language edition for bare titles (a URL carries its own)
    #[arg(long)]
    lang: Option<String>,

    /// Also write paragraphs, one per line, to this file
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Print paragraphs as a JSON array instead of lines
    #[arg(long)]
    json: bool,

    /// Configuration file (defaults to wikisect.toml in the working directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceFormat {
    /// MediaWiki plain-text extract
    Wikitext,
    /// Markdown with ATX or setext headings
    Markdown,
    /// JSON token stream from an external tokenizer
    Tokens,
}

impl SourceFormat {
    fn tokenizer(self) -> Box<dyn Format> {
        match self {
            Self::Wikitext => Box::new(WikitextFormat),
            Self::Markdown => Box::new(MarkdownFormat),
            Self::Tokens => Box::new(TokenStreamFormat),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(&Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), ExtractError> {
    let cfg = match &args.config {
        Some(path) => config::Config::load_from(path),
        None => config::Config::load(),
    };

    let (source, tokenizer) = if let Some(path) = &args.file {
        (fs::read_to_string(path)?, args.format.tokenizer())
    } else {
        let article = args.article.as_deref().unwrap_or_default();
        let (title, lang) = resolve_article(article, args.lang.as_deref(), &cfg.lang)?;
        let extract = wikipedia::fetch_extract(&title, &lang, &cfg)?;
        (extract, SourceFormat::Wikitext.tokenizer())
    };

    let tokens = tokenizer.tokenize(&source)?;
    tracing::debug!(format = tokenizer.name(), tokens = tokens.len(), "tokenized source");
    let paragraphs = wikisect::extract_paragraphs(tokens, &cfg.ignore_set())?;

    if args.json {
        let json = serde_json::to_string_pretty(&paragraphs)?;
        println!("{json}");
    } else {
        flatten::write_paragraphs(&paragraphs, io::stdout().lock())?;
    }

    if let Some(path) = &args.output {
        let file = BufWriter::new(File::create(path)?);
        flatten::write_paragraphs(&paragraphs, file)?;
    }

    Ok(())
}

/// Title and language for an article given as a URL or a bare title.
///
/// A URL's own language edition wins over `--lang`, which is reported when they differ.
fn resolve_article(
    article: &str,
    lang_flag: Option<&str>,
    default_lang: &str,
) -> Result<(String, String), ExtractError> {
    if !article.contains("://") {
        let lang = lang_flag.unwrap_or(default_lang).to_string();
        return Ok((article.to_string(), lang));
    }
    let (title, lang) = wikipedia::title_and_lang(article)?;
    if let Some(flag) = lang_flag.filter(|flag| *flag != lang) {
        tracing::warn!(%flag, url_lang = %lang, "--lang ignored for a URL; using its language");
    }
    Ok((title, lang))
}

#[cfg(test)]
#[path = "tests/cli.rs"]
mod tests;
