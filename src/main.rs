use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use mdhtml::Config;

#[derive(Parser)]
#[command(name = "mdhtml")]
#[command(about = "Convert Markdown files to HTML")]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Output HTML file (defaults to input name with .html extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Wrap the output in a full HTML page
    #[arg(long)]
    standalone: bool,

    /// Page title for standalone output (defaults to config, then file stem)
    #[arg(long)]
    title: Option<String>,

    /// Config file path
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    // Read input file
    let markdown = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {}", cli.input.display(), e);
            std::process::exit(1);
        }
    };

    let config = Config::load(&cli.config);

    let html = if cli.standalone {
        let title = cli
            .title
            .or_else(|| config.page.title.clone())
            .unwrap_or_else(|| file_stem(&cli.input));
        mdhtml::markdown_to_page(&markdown, &title, &config)
    } else {
        mdhtml::convert_document(&markdown)
    };

    // Determine output path
    let output = cli
        .output
        .unwrap_or_else(|| cli.input.with_extension("html"));

    // Write HTML
    if let Err(e) = fs::write(&output, html) {
        eprintln!("Error writing {}: {}", output.display(), e);
        std::process::exit(1);
    }

    println!("Created {}", output.display());
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Untitled".to_string())
}
