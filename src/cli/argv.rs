//! Raw argv handling that has to happen before clap sees the arguments
//!
//! The gradebook tools have always taken long flags with a single dash
//! (`-class`, `-term`, `-last-first`). clap only understands `--class`, so
//! known long flags written with one dash are rewritten first.

use std::ffi::OsString;

/// Long flags that may be written with a single dash
const LONG_FLAGS: &[&str] = &[
    "class",
    "dir",
    "format",
    "verbose",
    "log-level",
    "log-json",
    "help",
    "version",
    "term",
    "last-first",
    "name",
    "type",
    "date",
];

/// Rewrite `-flag` and `-flag=value` to `--flag` and `--flag=value` for the
/// known long flags. Everything after a bare `--` is left alone.
pub fn normalize<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(|arg| {
            if passthrough {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    passthrough = true;
                    arg
                }
                Some(s) if is_single_dash_long(s) => OsString::from(format!("-{}", s)),
                _ => arg,
            }
        })
        .collect()
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LONG_FLAGS.contains(&name)
}

/// Whether the (normalized) arguments ask for JSON output. Used when clap
/// fails before `Cli.format` is available.
pub fn requests_json(args: &[OsString]) -> bool {
    let mut args = args.iter().skip(1).filter_map(|arg| arg.to_str());
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}

/// Subcommands and their aliases, mapped to the canonical name
const SUBCOMMANDS: &[(&str, &str)] = &[
    ("names", "names"),
    ("emails", "emails"),
    ("new", "new"),
    ("calc", "calc"),
    ("average", "calc"),
    ("unscored", "unscored"),
    ("missing", "unscored"),
    ("validate", "validate"),
];

/// Long flags that take a separate value
const VALUE_FLAGS: &[&str] = &[
    "--class",
    "--dir",
    "--format",
    "--log-level",
    "--term",
    "--name",
    "--type",
    "--date",
];

/// Error prefix for the (normalized) arguments, e.g. `gradebook calc`. Used
/// when clap fails before `Cli::command_name` is available.
pub fn command_name(args: &[OsString]) -> String {
    let mut args = args.iter().skip(1).filter_map(|arg| arg.to_str());
    while let Some(arg) = args.next() {
        if arg == "--" {
            break;
        }
        if VALUE_FLAGS.contains(&arg) {
            args.next();
            continue;
        }
        if let Some((_, name)) = SUBCOMMANDS.iter().find(|(word, _)| *word == arg) {
            return format!("gradebook {}", name);
        }
    }
    "gradebook".to_string()
}
