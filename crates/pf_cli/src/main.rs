use anyhow::Result;
use clap::Parser;
use pf_expand::generate_all;

/// Expands the arity-0 wrapper templates in the current directory into one
/// file per (arity, shape, convention) triple, up to the requested arity.
/// Run it from `crates/powerfn/src`, next to the templates.
#[derive(Parser)]
#[command(name = "pfgen", about = "powerfn — generate arity-N callable wrappers")]
struct Cli {
    /// Maximum arity to generate.
    #[arg(long, default_value_t = 1)]
    arity: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dir = std::env::current_dir()?;
    let written = generate_all(&dir, cli.arity)?;

    eprintln!("OK: wrote {} units under {}", written.len(), dir.display());
    Ok(())
}
