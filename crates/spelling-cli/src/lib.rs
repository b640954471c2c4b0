// spelling-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use spelling::Dictionary;
use tracing::debug;
use tracing::level_filters::LevelFilter;

/// Word list file name looked up inside dictionary directories.
const WORD_LIST: &str = "en_US.txt";

/// Per-user dictionary directory under `$HOME`.
const USER_DIR: &str = ".spelling";

/// Environment variable naming a word list file or a directory holding one.
pub const DICT_PATH_ENV: &str = "SPELLING_DICT_PATH";

/// Search for a word list and load it.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `SPELLING_DICT_PATH` environment variable
/// 3. `~/.spelling/en_US.txt`
/// 4. Current working directory (looks for `en_US.txt` directly)
///
/// Each candidate may be a word list file or a directory containing
/// `en_US.txt`.
pub fn load_dictionary(dict_path: Option<&str>) -> Result<Dictionary, String> {
    let search_paths = build_search_paths(dict_path);

    for candidate in &search_paths {
        let Some(file) = resolve_word_list(candidate) else {
            continue;
        };
        debug!(path = %file.display(), "loading word list");
        return Dictionary::from_path(&file)
            .map_err(|e| format!("failed to load {}: {e}", file.display()));
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        WORD_LIST,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Map a search path to the word list it designates, if it exists.
fn resolve_word_list(candidate: &Path) -> Option<PathBuf> {
    if candidate.is_file() {
        return Some(candidate.to_path_buf());
    }
    let inner = candidate.join(WORD_LIST);
    inner.is_file().then_some(inner)
}

/// Build the list of files and directories to search for a word list.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    // 2. SPELLING_DICT_PATH environment variable
    if let Ok(env_path) = std::env::var(DICT_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(USER_DIR));
    }

    // 4. Current directory
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--dict-path=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dict-path" || arg == "-d" {
            if i + 1 < args.len() {
                dict_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, remaining)
}

/// Parse the numeric value following `flag` at `args[i]`.
pub fn parse_count(args: &[String], i: usize, flag: &str) -> usize {
    match args.get(i + 1) {
        Some(value) => value
            .parse()
            .unwrap_or_else(|_| fatal(&format!("invalid number for {flag}: {value}"))),
        None => fatal(&format!("{flag} requires a value")),
    }
}

/// Install a stderr log subscriber. `-v` / `--verbose` enables debug output.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .try_init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Check if `--verbose` or `-v` is in the args.
pub fn wants_verbose(args: &[String]) -> bool {
    args.iter().any(|a| a == "--verbose" || a == "-v")
}
