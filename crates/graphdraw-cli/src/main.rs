use std::{fs, io::Write, path::PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use graphdraw::{
    BuiltinTemplates, FontFamily, Generator, GeneratorKind, RenderConfig, UnsupportedChar,
    DEFAULT_COMMIT_DENSITY,
};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

use crate::console::render_to_console;
mod console;

#[derive(Parser)]
#[command(name = "graphdraw", version, about = "Write text on a contribution graph")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Verbose output - shows debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Cmd {
    /// Render an HTML preview of the graph
    Preview {
        #[command(flatten)]
        render: RenderArgs,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Emit a shell script that creates the backdated commits
    Script {
        #[command(flatten)]
        render: RenderArgs,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the graph to the terminal
    Show {
        #[command(flatten)]
        render: RenderArgs,
        /// Disable ANSI colors
        #[arg(long)]
        no_color: bool,
    },
}

#[derive(Args)]
struct RenderArgs {
    /// Message to draw (A-Z and space)
    #[arg(short, long)]
    msg: String,
    /// Font: 3x3 or 3x5
    #[arg(short, long, env = "GRAPHDRAW_FONT", default_value = "3x5")]
    font: FontFamily,
    /// Year of the graph, defaults to the current year
    #[arg(short, long, env = "GRAPHDRAW_YEAR")]
    year: Option<i32>,
    /// Commits created per painted day
    #[arg(short, long, env = "GRAPHDRAW_COMMITS", default_value_t = DEFAULT_COMMIT_DENSITY)]
    commits: u32,
    /// Fail on characters the font cannot draw instead of skipping them
    #[arg(long, env = "GRAPHDRAW_STRICT")]
    strict: bool,
}

impl RenderArgs {
    fn config(&self) -> RenderConfig {
        let mut config = RenderConfig {
            font: self.font,
            commit_density: self.commits,
            unsupported: if self.strict {
                UnsupportedChar::Fail
            } else {
                UnsupportedChar::Skip
            },
            ..RenderConfig::default()
        };
        if let Some(year) = self.year {
            config.year = year;
        }
        config
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn render(kind: GeneratorKind, args: &RenderArgs) -> Result<Vec<u8>> {
    let config = args.config();
    debug!(?config, %kind, "rendering");
    let mut generator = Generator::from_config(kind, &config)?;
    info!(generator = %generator.kind(), year = config.year, font = %config.font, "rendering message");
    let templates = BuiltinTemplates::new()?;
    Ok(generator.render(&args.msg, config.commit_density, &templates)?)
}

fn write_output(bytes: &[u8], output: Option<PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(&path, bytes)?;
            info!("wrote {} bytes to {}", bytes.len(), path.display());
        }
        None => std::io::stdout().write_all(bytes)?,
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Cmd::Preview { render: args, output } => {
            let bytes = render(GeneratorKind::Preview, &args)?;
            write_output(&bytes, output)?;
        }
        Cmd::Script { render: args, output } => {
            let bytes = render(GeneratorKind::Script, &args)?;
            write_output(&bytes, output)?;
        }
        Cmd::Show {
            render: args,
            no_color,
        } => {
            let config = args.config();
            let mut generator = Generator::from_config(GeneratorKind::Preview, &config)?;
            generator.artifact(&args.msg)?;
            println!("{}", render_to_console(generator.grid(), !no_color));
        }
    }
    Ok(())
}
