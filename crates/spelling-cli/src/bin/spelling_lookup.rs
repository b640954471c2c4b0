// spelling-lookup: Check words against a ranked word list.
//
// Prints one line per word:
//   C: word (rank)    (found)
//   W: word           (not found)
//   S: word (rank)    (suggestion for the preceding W line)
//
// Usage:
//   spelling-lookup [-d DICT_PATH] [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-path PATH       Word list file, or directory containing en_US.txt
//   -n, --suggestions-limit N  Maximum number of suggestions (default: 10)
//   --no-suggest               Do not print suggestions
//   -v, --verbose              Log debug output to stderr
//   -h, --help                 Print help

use std::io::{self, BufRead, Write};

use spelling::{Dictionary, LookupOptions};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = spelling_cli::parse_dict_path(&args);

    if spelling_cli::wants_help(&args) {
        println!("spelling-lookup: Check words against a ranked word list.");
        println!();
        println!("Usage: spelling-lookup [-d DICT_PATH] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, checks each word.");
        println!("Otherwise reads words from stdin (one per line). Prints:");
        println!("  C: word (rank)    (found)");
        println!("  W: word           (not found)");
        println!("  S: word (rank)    (suggestion)");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH       Word list file, or directory containing en_US.txt");
        println!("  -n, --suggestions-limit N  Maximum number of suggestions (default: 10)");
        println!("  --no-suggest               Do not print suggestions");
        println!("  -v, --verbose              Log debug output to stderr");
        println!("  -h, --help                 Print this help");
        return;
    }

    spelling_cli::init_logging(spelling_cli::wants_verbose(&args));

    let mut options = LookupOptions::default();
    let mut words: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "-n" || arg == "--suggestions-limit" {
            options.suggestions_limit = spelling_cli::parse_count(&args, i, arg);
            skip_next = true;
        } else if arg == "--no-suggest" {
            options.suggest = false;
        } else if !arg.starts_with('-') {
            words.push(arg.clone());
        }
    }

    let dict = spelling_cli::load_dictionary(dict_path.as_deref())
        .unwrap_or_else(|e| spelling_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            check_word(&dict, word, &options, &mut out);
        }
    } else {
        for word in &words {
            check_word(&dict, word, &options, &mut out);
        }
    }
}

fn check_word(dict: &Dictionary, word: &str, options: &LookupOptions, out: &mut impl Write) {
    let result = dict.lookup(word, options);
    if result.found {
        let _ = writeln!(out, "C: {} ({})", result.word, result.rank.unwrap_or(0));
        return;
    }
    let _ = writeln!(out, "W: {}", result.word);
    for suggestion in result.suggestions.unwrap_or_default() {
        let _ = writeln!(out, "S: {} ({})", suggestion.word, suggestion.rank);
    }
}
