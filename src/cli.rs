use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Ingest the CSV inventory and generate the full site.
    Build(BuildArgs),
    /// Ingest only: dump the canonical book records as JSON.
    Catalog(CatalogArgs),
}

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Directory containing the inventory CSV exports.
    #[arg(long)]
    pub books: String,

    /// Output directory for the generated site.
    #[arg(long)]
    pub out: String,

    /// Site title shown in the page header.
    #[arg(long, default_value = "Book Shelf")]
    pub title: String,

    /// Overwrite an existing output directory.
    #[arg(long, default_value_t = false)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Directory containing the inventory CSV exports.
    #[arg(long)]
    pub books: String,

    /// Output file path for the canonical record dump.
    #[arg(long)]
    pub out: String,

    /// Overwrite an existing output file.
    #[arg(long, default_value_t = false)]
    pub force: bool,
}
