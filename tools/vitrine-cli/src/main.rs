//! Vitrine CLI - browse and render the storefront from a terminal.
//!
//! Commands:
//! - `vitrine list` - List the visible products for a category or search
//! - `vitrine show` - Show one product in detail
//! - `vitrine link` - Print outbound messaging and social links
//! - `vitrine render` - Write the server-rendered page for a view state
//! - `vitrine browse` - Drive the storefront interactively
//! - `vitrine catalog` - Export or check catalog files
//! - `vitrine config` - Manage store configuration

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vitrine_cli::commands::{
    self, BrowseArgs, CatalogArgs, ConfigArgs, LinkArgs, ListArgs, RenderArgs, ShowArgs,
};
use vitrine_cli::context::Context;
use vitrine_cli::output::Output;

/// Vitrine storefront CLI
#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Path to store config file (TOML or JSON)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Path to a JSON catalog replacing the builtin one
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products visible for a category or search
    List(ListArgs),

    /// Show a product in detail
    Show(ShowArgs),

    /// Print an outbound link
    Link(LinkArgs),

    /// Render the storefront page to HTML
    Render(RenderArgs),

    /// Browse the storefront interactively
    Browse(BrowseArgs),

    /// Export or check catalog files
    Catalog(CatalogArgs),

    /// Manage store configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = Output::new(cli.verbose, cli.json);
    let ctx = match Context::load(cli.config.as_deref(), cli.catalog.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, &ctx),
        Commands::Show(args) => commands::show::run(args, &ctx),
        Commands::Link(args) => commands::link::run(args, &ctx),
        Commands::Render(args) => commands::render::run(args, &ctx),
        Commands::Browse(args) => commands::browse::run(args, &ctx),
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the level picked by
/// `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
