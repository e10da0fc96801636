use clap::{Parser, Subcommand};
use shelfgen::{config, covers, index, output};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shelfgen")]
#[command(about = "Catalog and cover generator for a folder of PDF documents")]
#[command(long_about = "\
Catalog and cover generator for a folder of PDF documents

Your filesystem is the data source. Category folders become categories,
file names become titles, and first pages become covers.

Library structure:

  library/
  ├── config.toml                      # Optional overrides (see gen-config)
  ├── pdfs/                            # Documents
  │   ├── Sozlesme.pdf                 # Flat → category \"Genel\"
  │   └── Felsefe/                     # Category folder
  │       └── 01_Devlet_Ve_Iktidar.pdf # Title \"Devlet Ve Iktidar\"
  ├── covers/                          # Generated, mirrors pdfs/
  │   ├── Sozlesme.png
  │   └── Felsefe/
  │       └── 01_Devlet_Ve_Iktidar.png
  ├── books.json                       # Full index
  └── books_min.json                   # Minimal index

Covers are the first page rendered 600px wide through PDFium. Documents that
cannot be rendered get a 600x800 placeholder with their title.

Set RUST_LOG=debug to see font and collation fallbacks.

Run 'shelfgen gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Project root containing the document folder
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the full and minimal JSON indexes
    Index,
    /// Render a cover for every document
    Covers,
    /// Run both passes: index → covers
    Build,
    /// Scan and classify without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Command::Index => {
            let config = config::load_config(&cli.root)?;
            let (entries, files) = index::run(&cli.root, &config)?;
            output::print_index_output(&entries);
            output::print_index_files(&files, &cli.root);
        }
        Command::Covers => {
            let config = config::load_config(&cli.root)?;
            let report = covers::run(&cli.root, &config)?;
            output::print_cover_report(&report);
        }
        Command::Build => {
            let config = config::load_config(&cli.root)?;
            println!("==> Pass 1: Indexing {}", cli.root.display());
            let (entries, files) = index::run(&cli.root, &config)?;
            output::print_index_output(&entries);
            output::print_index_files(&files, &cli.root);

            println!("==> Pass 2: Rendering covers");
            let report = covers::run(&cli.root, &config)?;
            output::print_cover_report(&report);

            println!("==> Build complete: {}", cli.root.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.root.display());
            let config = config::load_config(&cli.root)?;
            let entries = index::build_index(&cli.root, &config)?;
            output::print_index_output(&entries);
            println!("==> Library is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Log output goes to stderr so stdout stays clean for command output.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

