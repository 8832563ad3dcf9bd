//! Separating our arguments from whatever else the pipeline passes.
//!
//! `dirlist` is usually launched by a pipeline runner that appends its own
//! flags.  Rather than teaching clap to tolerate them, the raw argument list
//! is split up front: tokens that name one of the command's flags (plus their
//! values) go to clap, everything else is set aside and only logged.
//!
//! The flag table is read from the built [`clap::Command`], so adding an
//! argument to [`super::Cli`] is all it takes for it to be recognised here.

use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

use clap::Command;

/// Raw arguments, split into those clap should parse and those to ignore.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SplitArgs {
    /// Binary name followed by recognised flags and their values.
    pub known: Vec<OsString>,
    /// Everything else, in original order.
    pub ignored: Vec<OsString>,
}

impl SplitArgs {
    /// Split `args` (including the binary name) against the flags `cmd` defines.
    pub fn from_command<I, T>(cmd: Command, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let table = FlagTable::from_command(cmd);
        let mut args = args.into_iter().map(Into::into).peekable();

        let mut split = Self::default();
        split.known.extend(args.next());

        while let Some(arg) = args.next() {
            match table.classify(&arg) {
                Token::Known { wants_value } => {
                    split.known.push(arg);
                    if wants_value {
                        // A following flag is not a value; clap reports the
                        // missing value instead.
                        if let Some(value) = args.next_if(|next| !looks_like_flag(next)) {
                            split.known.push(value);
                        }
                    }
                }
                Token::Terminator => {
                    split.ignored.push(arg);
                    split.ignored.extend(args.by_ref());
                }
                Token::Unknown => split.ignored.push(arg),
            }
        }

        split
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    /// One of our flags; `wants_value` when its value is the next token.
    Known { wants_value: bool },
    /// `--`: everything after it is ignored.
    Terminator,
    Unknown,
}

/// Flag name to "takes a value".
#[derive(Debug, Default)]
struct FlagTable {
    long: HashMap<String, bool>,
    short: HashMap<char, bool>,
}

impl FlagTable {
    fn from_command(mut cmd: Command) -> Self {
        // Building adds the generated --help / --version arguments.
        cmd.build();

        let mut table = Self::default();
        for arg in cmd.get_arguments() {
            let takes_value = arg.get_action().takes_values();
            for long in arg.get_long_and_visible_aliases().unwrap_or_default() {
                table.long.insert(long.to_owned(), takes_value);
            }
            for short in arg.get_short_and_visible_aliases().unwrap_or_default() {
                table.short.insert(short, takes_value);
            }
        }
        table
    }

    fn classify(&self, arg: &OsStr) -> Token {
        let Some(text) = arg.to_str() else {
            return Token::Unknown;
        };

        if text == "--" {
            return Token::Terminator;
        }

        if let Some(long) = text.strip_prefix("--") {
            let (name, inline_value) = match long.split_once('=') {
                Some((name, _)) => (name, true),
                None => (long, false),
            };
            return match self.lookup_long(name) {
                Some(takes_value) => Token::Known {
                    wants_value: takes_value && !inline_value,
                },
                None => Token::Unknown,
            };
        }

        match text.strip_prefix('-') {
            Some(cluster) if !cluster.is_empty() => self.classify_short_cluster(cluster),
            _ => Token::Unknown,
        }
    }

    /// Exact name, else a prefix naming exactly one flag (`--dir`).
    /// Ambiguous prefixes are left for the pipeline.
    fn lookup_long(&self, name: &str) -> Option<bool> {
        if let Some(&takes_value) = self.long.get(name) {
            return Some(takes_value);
        }
        if name.is_empty() {
            return None;
        }

        let mut candidates = self
            .long
            .iter()
            .filter(|(long, _)| long.starts_with(name))
            .map(|(_, &takes_value)| takes_value);
        match (candidates.next(), candidates.next()) {
            (Some(takes_value), None) => Some(takes_value),
            _ => None,
        }
    }

    /// `-vv`, `-qc FILE`, `-cFILE`: every flag before a value-taking one must
    /// be known, and the value-taking one ends the cluster.
    fn classify_short_cluster(&self, cluster: &str) -> Token {
        for (idx, flag) in cluster.char_indices() {
            match self.short.get(&flag) {
                Some(true) => {
                    let attached = idx + flag.len_utf8() < cluster.len();
                    return Token::Known {
                        wants_value: !attached,
                    };
                }
                Some(false) => continue,
                None => return Token::Unknown,
            }
        }
        Token::Known { wants_value: false }
    }
}

fn looks_like_flag(arg: &OsStr) -> bool {
    arg.to_str()
        .is_some_and(|text| text.len() > 1 && text.starts_with('-'))
}
