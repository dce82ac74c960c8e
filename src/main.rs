use anyhow::Result;
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Scaffold a Basta web app from a bundled Next.js template", long_about = None)]
struct Cli {
    /// Project name (prompted for interactively when omitted)
    #[arg(short, long)]
    name: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::new::execute(cli.name)
}
