// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

//! A simple example showing the three kinds of option callback.

use cmdline_opts::{get_args, program_name, Opt, Opts};
use std::cell::Cell;
use std::process::exit;

fn main() {
    let mut output_file = String::new();
    let mut input_file = String::from("wibble");
    let mut do_all = false;

    // Needed before the options are dropped, so must be shared.
    let show_help = Cell::new(false);

    let mut opts = Opts::new();

    // Support "-o <file>" (value required).
    opts.add(Opt::new(
        "o",
        "output",
        |value: String| output_file = value,
        "the file to output to",
    ));

    // Support "-i [<file>]" (value optional).
    opts.add(Opt::new(
        "i",
        "input",
        |value: Option<String>| {
            if let Some(value) = value {
                input_file = value;
            }
        },
        "the file to input from",
    ));

    // Support "-a" flag option.
    opts.add(Opt::new("a", "all", || do_all = true, "do all the things"));

    // Help stops the parse at once so nothing after it is looked at.
    opts.add(Opt::new(
        "?",
        "help",
        || -> Result<(), &'static str> {
            show_help.set(true);
            Err("help requested")
        },
        "display help",
    ));

    let name = program_name();

    let result = opts.parse_with_args(get_args());

    if show_help.get() {
        opts.usage(&name);
        exit(0);
    }

    if let Err(e) = result {
        eprintln!("ERROR: {}", e);
        opts.usage(&name);
        exit(1);
    }

    // XXX: essential!
    drop(opts);

    let output_file = if output_file.is_empty() {
        "(not supplied)".to_string()
    } else {
        output_file
    };

    println!("Output file: {}", output_file);
    println!("Input file: {}", input_file);
    println!("Do all: {}", do_all);
}
