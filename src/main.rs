use balanced_collections::shell::{self, ParseError, Shell, TreeKind};
use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::env;
use std::io;
use std::process;

fn parse_args<I>(args: I) -> shell::Result<(TreeKind, LevelFilter)>
where
    I: Iterator<Item = String>,
{
    let mut kind: Option<TreeKind> = None;
    let mut level = LevelFilter::Warn;
    for arg in args {
        match arg.as_str() {
            "-v" | "--verbose" => level = LevelFilter::Trace,
            other if kind.is_some() => {
                return Err(ParseError::UnexpectedArgument(other.to_string()).into());
            },
            other => kind = Some(other.parse::<TreeKind>()?),
        }
    }
    Ok((kind.unwrap_or(TreeKind::Avl), level))
}

fn main() {
    let (kind, level) = match parse_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("usage: balanced-collections [avl | red-black] [-v | --verbose]");
            process::exit(2);
        },
    };

    let logger = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto);
    if let Err(err) = logger {
        eprintln!("failed to initialize logger: {}", err);
    }
    info!("starting {} shell", kind);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(kind);
    if let Err(err) = shell.run(stdin.lock(), stdout.lock()) {
        error!("{} shell failed: {}", shell.kind(), err);
        process::exit(1);
    }
}
