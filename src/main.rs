use std::io::{self, BufWriter};

use anyhow::Result;
use clap::{CommandFactory, Parser};

use treeline::cli::Cli;
use treeline::config::Config;
use treeline::render::{render_tree, LineWriter, RenderOptions};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    // Load configuration; CLI flags tighten the configured defaults
    let config = Config::load(cli.config.as_deref())?;
    tracing::debug!(?config, "Loaded configuration");

    let options = RenderOptions::new(&cli.path)
        .with_hidden(cli.all || config.display.show_hidden)
        .with_color(!cli.no_color && config.display.color)
        .with_colors(config.display.color_sequence()?);

    tracing::info!(path = %cli.path.display(), "Rendering tree");

    let stdout = io::stdout();
    let mut out = LineWriter::new(BufWriter::new(stdout.lock()), options.use_color);
    render_tree(&options, &mut out)?;

    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("treeline={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}
