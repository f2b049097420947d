mod app;
mod command;
mod config;
mod consts;
mod game;
mod logging;
mod menu;
mod options;
mod scheduler;
mod util;
use crate::app::App;
use crate::config::Config;
use anyhow::Context;
use lexopt::{Arg, Parser};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = concat!(
    "Usage: gridsnake [options]\n",
    "\n",
    "Play snake on a grid.  Pick the game speed on the first screen, then steer\n",
    "with the arrow keys, wasd, or hjkl.\n",
    "\n",
    "Options:\n",
    "  -c, --config <FILE>   Read configuration from <FILE>\n",
    "      --log-file <FILE> Write log messages to <FILE>\n",
    "  -h, --help            Show this help and exit\n",
    "  -V, --version         Show the program version and exit\n",
);

#[derive(Clone, Debug, Eq, PartialEq)]
enum Invocation {
    Run {
        config: Option<PathBuf>,
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Invocation {
    fn from_parser(mut parser: Parser) -> Result<Invocation, lexopt::Error> {
        let mut config = None;
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Short('h') | Arg::Long("help") => return Ok(Invocation::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Invocation::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Invocation::Run { config, log_file })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Invocation::Run { config, log_file } => {
                let Config { settings, logging } =
                    Config::locate(config.as_deref()).context("failed to load configuration")?;
                if let Some(path) = log_file.or(logging.file) {
                    logging::init(&path, logging.level).with_context(|| {
                        format!("failed to set up logging to {}", path.display())
                    })?;
                }
                log::info!("Starting gridsnake {}", env!("CARGO_PKG_VERSION"));
                let terminal = ratatui::init();
                let r = App::new(settings.tick_interval).run(terminal);
                ratatui::restore();
                r.context("terminal I/O failed")?;
                log::info!("Exiting");
                Ok(())
            }
            Invocation::Help => {
                print!("{USAGE}");
                Ok(())
            }
            Invocation::Version => {
                println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> ExitCode {
    let r = Invocation::from_parser(Parser::from_env())
        .map_err(anyhow::Error::from)
        .and_then(Invocation::run);
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("gridsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|ioerr| ioerr.kind() == ErrorKind::BrokenPipe)
}
