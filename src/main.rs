use clap::{Parser, Subcommand};
use shelfgen::{config, output, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shelfgen")]
#[command(about = "Manifest generator for static ebook libraries")]
#[command(long_about = "\
Manifest generator for static ebook libraries

Your filesystem is the data source. PDF documents in the ebook directory
become catalog records; covers are paired by filename.

Library structure:

  library/
  ├── config.toml                  # Repository + library settings (optional)
  ├── Ebook Booklet/               # Documents — one record per .pdf
  │   ├── Community_Policing_Handbook.pdf
  │   └── Ethics_Primer.pdf
  ├── Cover Booklet/               # Covers — paired by basename
  │   ├── Community_Policing_Handbook.jpg
  │   └── Ethics_Primer.png
  └── books.json                   # Generated manifest (overwritten)

Cover resolution (first match wins):
  Exact:    <basename>.jpg / .jpeg / .png / .webp
  Fallback: case-insensitive prefix match against the cover listing
  Neither:  record gets a null cover

Run 'shelfgen gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Library root directory
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the library and write the manifest
    Gen,
    /// Validate the library without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Gen => {
            let config = config::load_config(&cli.root)?;
            let manifest = scan::scan(&cli.root, &config)?;
            let manifest_path = cli.root.join(&config.library.output);
            std::fs::write(&manifest_path, manifest.to_json()?)?;
            output::print_catalog(&manifest, &config);
            println!("{}", output::format_gen_summary(&manifest, &manifest_path));
        }
        Command::Check => {
            let config = config::load_config(&cli.root)?;
            let manifest = scan::scan(&cli.root, &config)?;
            output::print_catalog(&manifest, &config);
            println!("==> Library is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
