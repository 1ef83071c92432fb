// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::env;
use std::fmt;
use std::io::{self, Write};

use crate::error::{Error, Result};
use crate::handler::{ArgHandler, IntoArgHandler, Need, OPT_PREFIX};

const LONG_OPT_PREFIX: &str = "--";

/// Number of spaces between the widest option column and the explanation
/// text in the usage statement.
const USAGE_GUTTER: usize = 4;

/// Get a list of all command-line arguments specified to the program with
/// the program name (the first argument) removed.
///
/// # Note
///
/// Used with [Opts::parse_with_args()]. However, this isn't usually
/// required: just call [Opts::parse()].
pub fn get_args() -> Vec<String> {
    env::args().skip(1).collect()
}

/// Returns the name the program was invoked as (the first command-line
/// argument), or an empty string if the platform did not provide one.
///
/// Useful as the name to pass to [Opts::usage()].
pub fn program_name() -> String {
    env::args().next().unwrap_or_default()
}

/// A registered option.
///
/// Binds a short name (used as `-<short>`), a long name (used as
/// `--<long>`), the handler to call when the option is found and the text
/// explaining the option in the usage statement.
#[derive(Debug)]
pub struct Opt<'a> {
    short: String,
    long: String,
    handler: ArgHandler<'a>,
    explanation: String,
}

impl<'a> Opt<'a> {
    /// Create a new option.
    ///
    /// Whether the option is a flag, takes an optional argument or requires
    /// an argument is decided by the signature of `f` (see [IntoArgHandler]).
    pub fn new<M, F>(short: &str, long: &str, f: F, explanation: &str) -> Self
    where
        F: IntoArgHandler<'a, M>,
    {
        Opt {
            short: short.into(),
            long: long.into(),
            handler: f.into_arg_handler(),
            explanation: explanation.into(),
        }
    }

    /// The short option name (without the leading `-`).
    pub fn short(&self) -> &str {
        &self.short
    }

    /// The long option name (without the leading `--`).
    pub fn long(&self) -> &str {
        &self.long
    }

    /// Description of the option.
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// The argument requirement of the option.
    pub fn needs(&self) -> Need {
        self.handler.needs()
    }

    // Width of the names, used to align the usage statement.
    fn width(&self) -> usize {
        self.short.chars().count() + self.long.chars().count()
    }
}

impl<'a> fmt::Display for Opt<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}, {}{}",
            OPT_PREFIX, self.short, LONG_OPT_PREFIX, self.long
        )
    }
}

/// Represents an ordered collection of options.
///
/// The order in which options are added is the order they are shown in the
/// usage statement. It is also the match order: if two options share a
/// name, the one added first wins.
#[derive(Debug, Default)]
pub struct Opts<'a> {
    entries: Vec<Opt<'a>>,
}

impl<'a> Opts<'a> {
    /// Create a new, empty, option collection.
    pub fn new() -> Self {
        Opts {
            entries: Vec::new(),
        }
    }

    /// Returns the number of registered options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no options have been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register a single option.
    pub fn add(&mut self, opt: Opt<'a>) {
        self.entries.push(opt);
    }

    /// Iterate over the registered options in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Opt<'a>> {
        self.entries.iter()
    }

    /// Returns the option matching a command-line argument.
    ///
    /// `--<name>` is matched against the long names and `-<name>` against
    /// the short names. Names must match exactly (no abbreviations).
    ///
    /// # Errors
    ///
    /// - [Error::NoPosnArgs] if `cli_arg` does not start with a dash.
    /// - [Error::UnknownOpt] if no registered option matches.
    pub fn find(&self, cli_arg: &str) -> Result<&Opt<'a>> {
        let index = self.position(cli_arg)?;

        Ok(&self.entries[index])
    }

    fn position(&self, cli_arg: &str) -> Result<usize> {
        let found = if let Some(name) = cli_arg.strip_prefix(LONG_OPT_PREFIX) {
            self.entries.iter().position(|opt| opt.long == name)
        } else if let Some(name) = cli_arg.strip_prefix(OPT_PREFIX) {
            self.entries.iter().position(|opt| opt.short == name)
        } else {
            return Err(Error::NoPosnArgs);
        };

        found.ok_or(Error::UnknownOpt)
    }

    /// Parse a set of command line arguments (without the program name).
    ///
    /// The arguments are handled strictly in order. For each option found,
    /// its handler decides whether the following argument is the option's
    /// value, then the option's callback is called.
    ///
    /// # Arguments
    ///
    /// - `cli_args`: Vector of string arguments. Specify your own,
    ///    or call [get_args()].
    ///
    /// # Errors
    ///
    /// Parsing stops at the first error. Callbacks already called for
    /// earlier options are not undone.
    ///
    /// - [Error::NoPosnArgs] if an argument is not an option.
    /// - [Error::UnknownOpt] if an option is not registered.
    /// - [Error::MissingOptArg] if the last argument is an option
    ///   requiring a value.
    /// - [Error::HandlerError] if a callback fails.
    pub fn parse_with_args(&mut self, cli_args: Vec<String>) -> Result<()> {
        let mut i = 0;

        while i < cli_args.len() {
            let index = self.position(&cli_args[i])?;

            let handler = &mut self.entries[index].handler;

            let next = cli_args.get(i + 1).map(String::as_str);
            let value = handler.get_arg(next);

            // Skip the option and, if consumed, its value.
            i += if value.is_some() { 2 } else { 1 };

            handler.apply(value)?;
        }

        Ok(())
    }

    /// Parse a set of command line arguments, only reporting whether
    /// parsing succeeded.
    ///
    /// The conventional response to `false` is to display the usage
    /// statement and exit with a non-zero status.
    pub fn process_options(&mut self, cli_args: Vec<String>) -> bool {
        self.parse_with_args(cli_args).is_ok()
    }

    /// Simplest interface to the parser.
    pub fn parse(&mut self) -> Result<()> {
        let args = get_args();

        self.parse_with_args(args)
    }

    /// Write a help/usage statement for the registered options.
    ///
    /// Each option is listed on its own line in registration order with the
    /// explanation text aligned in a single column.
    pub fn write_usage<W>(&self, name: &str, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        let width = self.entries.iter().map(Opt::width).max().unwrap_or(0);

        writeln!(writer, "Usage: {} [OPTIONS]", name)?;
        writeln!(writer)?;

        for opt in &self.entries {
            let padding = width - opt.width() + USAGE_GUTTER;

            writeln!(
                writer,
                "{}{:padding$}{}",
                opt,
                "",
                opt.explanation,
                padding = padding
            )?;
        }

        Ok(())
    }

    /// Display the usage statement on standard output.
    pub fn usage(&self, name: &str) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();

        // Nothing useful can be done if stdout has gone away.
        let _ = self.write_usage(name, &mut handle);
    }
}
