// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! Simple crate for parsing command-line options using a table of
//! callbacks.
//!
//! If you want lots of extra features, you should consider the excellent
//! [`clap`](https://crates.io/crates/clap) crate instead.
//!
//! ---
//!
//! Table of contents:
//!
//! * [Overview](#overview)
//! * [Quickstart](#quickstart)
//! * [Examples](#examples)
//! * [Details](#details)
//! * [Terminology](#terminology)
//! * [Errors](#errors)
//! * [Limitations](#limitations)
//!
//! ---
//!
//! # Overview
//!
//! Each option is registered with a short name, a long name, a callback
//! and some help text. The callback is called for each occurrence of the
//! option on the command-line.
//!
//! There is no need to say whether an option takes a value: this is worked
//! out from the callback itself.
//!
//! - `|| ...`: a flag (no value).
//! - `|value: Option<String>| ...`: an option with an optional value.
//! - `|value: String| ...`: an option with a mandatory value.
//!
//! # Quickstart
//!
//! 1. Create an [Opts] variable to hold all the options you wish to support.
//!
//!    ```rust
//!    use cmdline_opts::Opts;
//!
//!    let mut opts = Opts::new();
//!    ```
//!
//! 1. Add a new [Opt] for each option, passing a closure that records
//!    what you need to know:
//!
//!    ```rust
//!    # use cmdline_opts::{Opt, Opts};
//!    #
//!    let mut output = String::new();
//!    let mut verbose = false;
//!
//!    let mut opts = Opts::new();
//!
//!    // Support "-o <file>" and "--output <file>".
//!    opts.add(Opt::new("o", "output", |value: String| output = value, "the file to output to"));
//!
//!    // Support "-v" and "--verbose" flags.
//!    opts.add(Opt::new("v", "verbose", || verbose = true, "be chatty"));
//!    ```
//!
//! 1. Call the `parse()` method on the [Opts] variable, then drop it so the
//!    variables the callbacks modified can be used again:
//!
//!    ```rust
//!    # use cmdline_opts::{Opt, Opts};
//!    #
//!    # let mut verbose = false;
//!    # let mut opts = Opts::new();
//!    # opts.add(Opt::new("v", "verbose", || verbose = true, "be chatty"));
//!    #
//!    // Parse the command-line
//!    let result = opts.parse();
//!
//!    drop(opts);
//!    ```
//!
//! # Examples
//!
//! Below is a full example showing how to write a program that supports
//! a few command line options, including a help option.
//!
//! ```rust
//! use cmdline_opts::{program_name, Opt, Opts};
//! use std::cell::Cell;
//!
//! fn main() {
//!     let mut output_file = String::new();
//!     let mut input_file = String::from("wibble");
//!     let mut do_all = false;
//!
//!     // Read while the options still exist, so needs to be shared.
//!     let show_help = Cell::new(false);
//!
//!     let mut opts = Opts::new();
//!
//!     opts.add(Opt::new(
//!         "o",
//!         "output",
//!         |value: String| output_file = value,
//!         "the file to output to",
//!     ));
//!
//!     opts.add(Opt::new(
//!         "i",
//!         "input",
//!         |value: Option<String>| {
//!             if let Some(value) = value {
//!                 input_file = value;
//!             }
//!         },
//!         "the file to input from",
//!     ));
//!
//!     opts.add(Opt::new("a", "all", || do_all = true, "do all the things"));
//!     opts.add(Opt::new("?", "help", || show_help.set(true), "display help"));
//!
//!     let args = vec!["-i".to_string(), "-o".into(), "out.txt".into()];
//!
//!     let ok = opts.process_options(args);
//!
//!     if !ok || show_help.get() {
//!         opts.usage(&program_name());
//!     }
//!
//!     drop(opts);
//!
//!     assert!(ok);
//!     assert_eq!(output_file, "out.txt");
//!     assert_eq!(input_file, "wibble");
//!     assert!(!do_all);
//! }
//! ```
//!
//! Callbacks can also reject a value by returning a `Result`:
//!
//! ```rust
//! use cmdline_opts::{Error, Opt, Opts};
//!
//! let mut level = 0;
//!
//! let mut opts = Opts::new();
//!
//! opts.add(Opt::new(
//!     "l",
//!     "level",
//!     |value: String| -> Result<(), String> {
//!         level = value.parse().map_err(|_| format!("bad level: {:?}", value))?;
//!         Ok(())
//!     },
//!     "set the level",
//! ));
//!
//! let result = opts.parse_with_args(vec!["-l".into(), "high".into()]);
//!
//! assert_eq!(result, Err(Error::HandlerError("bad level: \"high\"".into())));
//! ```
//!
//! For a complete program, try out the demo:
//!
//! ```bash
//! $ cargo run --example simple -- -o out.txt -i -a
//! ```
//!
//! # Details
//!
//! ## Terminology
//!
//! - An "option" is an argument that starts with a dash character (`-`).
//!
//!   A "short option" is a single dash followed by the short name (`-o`). A
//!   "long option" is a double dash followed by the long name (`--output`).
//!   Names must match exactly: abbreviations are not recognised.
//!
//! - An "option argument" (value) is the argument immediately following an
//!   option that the option consumes.
//!
//! - Options that do not accept an argument are called "flags". Any argument
//!   following a flag is treated as an option in its own right.
//!
//! - An option with an _optional_ argument only consumes the following
//!   argument if it does not start with a dash. This means that omitting the
//!   value never swallows the next option:
//!
//!   ```text
//!   -i in.txt -a  # '-i' given 'in.txt', then '-a'.
//!   -i -a         # '-i' given no value, then '-a'.
//!   ```
//!
//! - An option with a _mandatory_ argument always consumes the following
//!   argument, even if it starts with a dash (like `getopt(3)`):
//!
//!   ```text
//!   -o -a         # '-o' given '-a'; '-a' is not seen as an option.
//!   ```
//!
//! ## Errors
//!
//! Parsing stops at the first problem found and returns an [Error]:
//!
//! - [Error::NoPosnArgs]: an argument that is not an option was found.
//! - [Error::UnknownOpt]: an option that was not registered was found.
//! - [Error::MissingOptArg]: the final argument is an option that needs
//!   a value.
//! - [Error::HandlerError]: a callback failed.
//!
//! Callbacks already called for options earlier on the command-line are
//! _not_ undone.
//!
//! If you only care whether parsing worked, use [Opts::process_options()].
//!
//! # Limitations
//!
//! - Positional (non-option) arguments are not supported.
//! - Option bundling is not supported.
//!
//!   **Example:** `-d -v` is valid, but `-dv` is not.
//!
//! - Options and their arguments must be separated by whitespace.
//!
//!   **Example:** '`-o out.txt`' is valid, but '`-oout.txt`' and
//!   '`--output=out.txt`' are not.
//!
//! - Option arguments are always strings.
//!
//!   The callback can convert them into numerics, _etc_ as required.
//!
//! - Callbacks borrow the variables they modify for as long as the [Opts]
//!   exists, so drop the [Opts] before looking at those variables.

mod error;
mod handler;
mod opts;

pub use error::{Error, Result};

pub use handler::{
    ArgHandler, Explicit, IntoArgHandler, IntoHandlerResult, MandatoryArg, Need, NoArg, OptionalArg,
};

pub use opts::{get_args, program_name, Opt, Opts};
