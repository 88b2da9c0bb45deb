//! Line-oriented command driver for the search trees.
//!
//! A `Shell` owns one tree, chosen by `TreeKind`, and executes commands such as `insert 3 1 4`,
//! `delete 1` or `search 4` read one per line.

use crate::avl_tree::AvlSet;
use crate::red_black_tree::RedBlackSet;
use crate::search_tree::SearchTree;
use log::{debug, warn};
use std::error;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::result;
use std::str::FromStr;

const HELP: &str = "commands:
  insert <key>...  insert keys
  delete <key>...  delete keys
  search <key>     check whether a key is present
  print            print the keys in order
  len              print the number of keys
  height           print the height of the tree
  min | max        print the smallest or largest key
  clear            remove every key
  help             print this message
  quit             exit";

/// An error produced while parsing a command line or a tree kind.
#[derive(Debug, Eq, PartialEq)]
pub enum ParseError {
    Empty,
    UnknownCommand(String),
    MissingArgument(&'static str),
    InvalidKey(String),
    UnexpectedArgument(String),
    UnknownTreeKind(String),
}

impl error::Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty command"),
            ParseError::UnknownCommand(command) => write!(f, "unknown command `{}`", command),
            ParseError::MissingArgument(command) => write!(f, "`{}` expects a key", command),
            ParseError::InvalidKey(key) => write!(f, "invalid key `{}`", key),
            ParseError::UnexpectedArgument(arg) => write!(f, "unexpected argument `{}`", arg),
            ParseError::UnknownTreeKind(kind) => {
                write!(f, "unknown tree kind `{}`, expected `avl` or `red-black`", kind)
            },
        }
    }
}

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    ParseError(ParseError),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Error {
        Error::ParseError(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::IOError(error) => Some(error),
            Error::ParseError(error) => Some(error),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::IOError(error) => write!(f, "{}", error),
            Error::ParseError(error) => write!(f, "{}", error),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

/// The tree variant backing a `Shell`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TreeKind {
    Avl,
    RedBlack,
}

impl TreeKind {
    pub fn build(self) -> Box<dyn SearchTree<i64>> {
        match self {
            TreeKind::Avl => Box::new(AvlSet::new()),
            TreeKind::RedBlack => Box::new(RedBlackSet::new()),
        }
    }
}

impl FromStr for TreeKind {
    type Err = ParseError;

    fn from_str(s: &str) -> result::Result<Self, Self::Err> {
        match s {
            "avl" => Ok(TreeKind::Avl),
            "red-black" | "rb" => Ok(TreeKind::RedBlack),
            _ => Err(ParseError::UnknownTreeKind(s.to_string())),
        }
    }
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TreeKind::Avl => write!(f, "avl"),
            TreeKind::RedBlack => write!(f, "red-black"),
        }
    }
}

/// A single shell command.
#[derive(Debug, Eq, PartialEq)]
pub enum Command {
    Insert(Vec<i64>),
    Delete(Vec<i64>),
    Search(i64),
    Print,
    Len,
    Height,
    Min,
    Max,
    Clear,
    Help,
    Quit,
}

fn parse_key(token: &str) -> result::Result<i64, ParseError> {
    token
        .parse()
        .map_err(|_| ParseError::InvalidKey(token.to_string()))
}

fn parse_keys<'a, I>(name: &'static str, args: I) -> result::Result<Vec<i64>, ParseError>
where
    I: Iterator<Item = &'a str>,
{
    let keys = args.map(parse_key).collect::<result::Result<Vec<_>, _>>()?;
    if keys.is_empty() {
        return Err(ParseError::MissingArgument(name));
    }
    Ok(keys)
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> result::Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let name = tokens.next().ok_or(ParseError::Empty)?;

        let command = match name {
            "insert" => return Ok(Command::Insert(parse_keys("insert", tokens)?)),
            "delete" => return Ok(Command::Delete(parse_keys("delete", tokens)?)),
            "search" => {
                let key = tokens.next().ok_or(ParseError::MissingArgument("search"))?;
                Command::Search(parse_key(key)?)
            },
            "print" => Command::Print,
            "len" => Command::Len,
            "height" => Command::Height,
            "min" => Command::Min,
            "max" => Command::Max,
            "clear" => Command::Clear,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(ParseError::UnknownCommand(name.to_string())),
        };

        match tokens.next() {
            Some(arg) => Err(ParseError::UnexpectedArgument(arg.to_string())),
            None => Ok(command),
        }
    }
}

/// Executes commands against a single tree.
///
/// # Examples
/// ```
/// use balanced_collections::shell::{Shell, TreeKind};
///
/// let mut shell = Shell::new(TreeKind::RedBlack);
/// let mut output = Vec::new();
/// shell.run("insert 3 1 2\nsearch 2\nprint\n".as_bytes(), &mut output).unwrap();
///
/// let output = String::from_utf8(output).unwrap();
/// assert!(output.ends_with("true\n[1, 2, 3]\n"));
/// ```
pub struct Shell {
    kind: TreeKind,
    tree: Box<dyn SearchTree<i64>>,
}

impl Shell {
    pub fn new(kind: TreeKind) -> Self {
        Shell {
            kind,
            tree: kind.build(),
        }
    }

    pub fn kind(&self) -> TreeKind {
        self.kind
    }

    /// Executes a command, writing its response to `output`. Returns `false` once the shell
    /// should stop.
    pub fn execute<W>(&mut self, command: Command, output: &mut W) -> Result<bool>
    where
        W: Write,
    {
        debug!("{} shell: {:?}", self.kind, command);
        match command {
            Command::Insert(keys) => {
                for key in keys {
                    if self.tree.insert(key) {
                        writeln!(output, "inserted {}", key)?;
                    } else {
                        writeln!(output, "{} already present", key)?;
                    }
                }
            },
            Command::Delete(keys) => {
                for key in keys {
                    if self.tree.delete(&key) {
                        writeln!(output, "deleted {}", key)?;
                    } else {
                        writeln!(output, "{} not found", key)?;
                    }
                }
            },
            Command::Search(key) => writeln!(output, "{}", self.tree.search(&key))?,
            Command::Print => writeln!(output, "{:?}", self.tree.keys())?,
            Command::Len => writeln!(output, "{}", self.tree.len())?,
            Command::Height => writeln!(output, "{}", self.tree.height())?,
            Command::Min => match self.tree.min() {
                Some(key) => writeln!(output, "{}", key)?,
                None => writeln!(output, "empty")?,
            },
            Command::Max => match self.tree.max() {
                Some(key) => writeln!(output, "{}", key)?,
                None => writeln!(output, "empty")?,
            },
            Command::Clear => {
                self.tree.clear();
                writeln!(output, "cleared")?;
            },
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Reads commands line by line until `quit` or the end of `input`. Malformed lines are
    /// reported on `output` and skipped.
    pub fn run<R, W>(&mut self, input: R, mut output: W) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(command) => {
                    if !self.execute(command, &mut output)? {
                        break;
                    }
                },
                Err(err) => {
                    warn!("{} shell: rejected `{}`: {}", self.kind, line.trim(), err);
                    writeln!(output, "error: {}", err)?;
                },
            }
        }
        output.flush()?;
        Ok(())
    }
}
