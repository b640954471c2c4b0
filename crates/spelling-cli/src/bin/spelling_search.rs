// spelling-search: List known words starting with a prefix.
//
// Usage:
//   spelling-search [-d DICT_PATH] [OPTIONS] [PREFIX...]
//
// Options:
//   -d, --dict-path PATH   Word list file, or directory containing en_US.txt
//   --depth N              Characters to look past the prefix (default: 3)
//   -v, --verbose          Log debug output to stderr
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use spelling::{Dictionary, SearchOptions};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = spelling_cli::parse_dict_path(&args);

    if spelling_cli::wants_help(&args) {
        println!("spelling-search: List known words starting with a prefix.");
        println!();
        println!("Usage: spelling-search [-d DICT_PATH] [OPTIONS] [PREFIX...]");
        println!();
        println!("If PREFIX arguments are given, searches each prefix.");
        println!("Otherwise reads prefixes from stdin (one per line).");
        println!("Results are printed best rank first.");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Word list file, or directory containing en_US.txt");
        println!("  --depth N              Characters to look past the prefix (default: 3)");
        println!("  -v, --verbose          Log debug output to stderr");
        println!("  -h, --help             Print this help");
        return;
    }

    spelling_cli::init_logging(spelling_cli::wants_verbose(&args));

    let mut options = SearchOptions::default();
    let mut prefixes: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "--depth" {
            options.depth = spelling_cli::parse_count(&args, i, arg);
            skip_next = true;
        } else if !arg.starts_with('-') {
            prefixes.push(arg.clone());
        }
    }

    let dict = spelling_cli::load_dictionary(dict_path.as_deref())
        .unwrap_or_else(|e| spelling_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if prefixes.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let prefix = line.trim();
            if prefix.is_empty() {
                continue;
            }
            print_matches(&dict, prefix, &options, &mut out);
        }
    } else {
        for prefix in &prefixes {
            print_matches(&dict, prefix, &options, &mut out);
        }
    }
}

fn print_matches(dict: &Dictionary, prefix: &str, options: &SearchOptions, out: &mut impl Write) {
    let matches = dict.search(prefix, options);
    if matches.is_empty() {
        let _ = writeln!(out, "{prefix}: (no matches)");
        return;
    }
    let _ = writeln!(out, "{prefix}:");
    for m in &matches {
        let _ = writeln!(out, "  {} ({})", m.word, m.rank);
    }
}
