use std::io;

use anyhow::Result;
use clap::Parser;
use colorterm::{execute, init_logging, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings()?;
    init_logging(&settings.log)?;

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    execute(&cli, &settings, &mut stdin, &mut stdout)
}
