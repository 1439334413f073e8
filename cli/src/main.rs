//! tagdoc CLI - comment documentation extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use tagdoc::{parse_file_with_options, Error, JsonFormat, ParseOptions, RenderOptions};

/// Default paths of the classic single-file run.
const DEFAULT_INPUT: &str = "samba.h";
const DEFAULT_OUTPUT: &str = "docs/documentation.html";

#[derive(Parser)]
#[command(name = "tagdoc")]
#[command(version)]
#[command(about = "Extract tagged comment blocks into HTML documentation", long_about = None)]
struct Cli {
    /// Input source file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output HTML file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an HTML documentation page
    Html {
        /// Input source file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Document title
        #[arg(long, default_value = "Documentation")]
        title: String,

        /// Block comment start delimiter
        #[arg(long, default_value = "/*")]
        block_start: String,

        /// Block comment end delimiter
        #[arg(long, default_value = "*/")]
        block_end: String,

        /// Tag marker character
        #[arg(long, default_value = "@")]
        marker: char,

        /// Treat malformed tag lines as errors
        #[arg(long)]
        strict: bool,
    },

    /// Dump the extracted document as JSON
    Json {
        /// Input source file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Dump the extracted tags as plain text
    Text {
        /// Input source file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show extraction statistics
    Info {
        /// Input source file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Html {
            input,
            output,
            title,
            block_start,
            block_end,
            marker,
            strict,
        }) => cmd_html(
            &input,
            output.as_deref(),
            &title,
            &block_start,
            &block_end,
            marker,
            strict,
        ),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Text { input, output }) => cmd_text(&input, output.as_deref()),
        Some(Commands::Info { input }) => cmd_info(&input),
        None => {
            // Classic mode: fixed defaults, messages on stdout, a missing
            // input ends the run cleanly.
            let input = cli.input.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
            let output = cli.output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
            cmd_generate(&input, &output)
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// The default run: parse, render, write, report on stdout.
fn cmd_generate(input: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("generating {} -> {}", input.display(), output.display());
    match tagdoc::generate(input, output) {
        Ok(path) => {
            println!("Documentation generated and saved to {}.", path.display());
            Ok(())
        }
        Err(Error::InputNotFound(path)) => {
            // Handled, expected condition: report and end the run cleanly.
            println!("Error: File '{}' not found.", path.display());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn cmd_html(
    input: &Path,
    output: Option<&Path>,
    title: &str,
    block_start: &str,
    block_end: &str,
    marker: char,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut parse_options = ParseOptions::new()
        .with_delimiters(block_start, block_end)
        .with_tag_marker(marker);
    if strict {
        parse_options = parse_options.strict();
    }

    let doc = parse_file_with_options(input, parse_options)?;
    let render_options = RenderOptions::new().with_title(title);
    let html = tagdoc::render::to_html(&doc, &render_options)?;

    if let Some(path) = output {
        fs::write(path, &html)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", html);
    }

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = tagdoc::parse_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = tagdoc::render::to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_text(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = tagdoc::parse_file(input)?;
    let text = tagdoc::render::to_text(&doc, &RenderOptions::default())?;

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = tagdoc::parse_file(input)?;

    println!("{}", "Extraction Summary".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Blocks".bold(), doc.block_count());
    println!("{}: {}", "Tagged blocks".bold(), doc.tagged_blocks().count());
    println!("{}: {}", "Tags".bold(), doc.tag_count());

    let mut names: Vec<&str> = doc
        .blocks
        .iter()
        .flat_map(|b| b.tags.iter().map(|t| t.name.as_str()))
        .collect();
    names.sort_unstable();
    names.dedup();

    if !names.is_empty() {
        println!("{}: {}", "Tag names".bold(), names.join(", "));
    }

    Ok(())
}
