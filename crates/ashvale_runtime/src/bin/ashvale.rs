//! Ashvale CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use ashvale_foundation::SessionId;
use ashvale_runtime::{AshvaleConfig, CommandProcessor, Outcome, Repl, logging};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    config: Option<PathBuf>,
    session: Option<String>,
    texts: Vec<String>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-c" | "--config" => {
                let path = args.next().ok_or("--config requires a path")?;
                config.config = Some(PathBuf::from(path));
            }
            "-s" | "--session" => {
                config.session = Some(args.next().ok_or("--session requires an id")?);
            }
            "-t" | "--text" => {
                config.texts.push(args.next().ok_or("--text requires a command")?);
            }
            other => return Err(format!("unknown option: {other}").into()),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("ashvale {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => AshvaleConfig::from_file(path)?,
        None => AshvaleConfig::default(),
    }
    .with_process_env()?;
    logging::init(&config.logging)?;

    let processor = CommandProcessor::from_config(&config)?;
    let session = match &cli.session {
        Some(id) => {
            let session = SessionId::new(id.as_str());
            let _ = processor.sessions().ensure(&session);
            session
        }
        None => processor.sessions().create(),
    };

    let mut repl = Repl::new(processor, session)?;
    for text in &cli.texts {
        println!("> {text}");
        match repl.eval(text)? {
            Outcome::Output(output) => println!("{output}"),
            Outcome::Silent => {}
            Outcome::Quit => return Ok(()),
        }
    }

    if cli.batch_mode {
        println!("session: {}", repl.session());
        return Ok(());
    }

    if !cli.texts.is_empty() {
        repl = repl.without_banner();
    }
    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mAshvale\x1b[0m - The Ashen Vale, a text adventure

\x1b[1mUSAGE:\x1b[0m
    ashvale [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help            Print help information
    -V, --version         Print version information
    -c, --config PATH     Load configuration from a TOML file
    -s, --session ID      Play (or create) the session with this id
    -t, --text COMMAND    Run a command before the prompt (repeatable)
    -b, --batch           Run the --text commands and exit

\x1b[1mENVIRONMENT:\x1b[0m
    RUST_LOG                 Log filter (overrides logging.level)
    SESSION_TTL_MS           Idle session lifetime
    SESSION_MAX              Most sessions kept
    NLU_EXECUTE_THRESHOLD    Confidence needed to act without asking
    NLU_CONFIRM_THRESHOLD    Confidence below which a parse is a guess

\x1b[1mEXAMPLES:\x1b[0m
    ashvale                                   Start a new game
    ashvale -s my-run                         Same map every time for this id
    ashvale -s my-run -t look -t north -b     Script a few moves and exit

\x1b[1mMETA COMMANDS:\x1b[0m
    :state :view :save PATH :load PATH :restart :help :quit"
    );
}
