use std::{env, fs, process};

use collate_text::{ComparisonPolicy, Never, compare_lines};

/// Compares two versions of a file line by line and prints the changed line
/// ranges, similar to `diff` without context lines.
///
/// Run it with:
/// `cargo run --example compare-files before.txt after.txt [default|trim|ignore]`
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 || args.len() > 4 {
        eprintln!("Usage: compare-files <before> <after> [default|trim|ignore]");
        process::exit(1);
    }

    let before_file = &args[1];
    let after_file = &args[2];
    let policy = match args.get(3).map(String::as_str) {
        None | Some("default") => ComparisonPolicy::Default,
        Some("trim") => ComparisonPolicy::TrimWhitespaces,
        Some("ignore") => ComparisonPolicy::IgnoreWhitespaces,
        Some(other) => {
            eprintln!("Unknown policy: {other}");
            process::exit(1);
        }
    };

    let before_content = fs::read_to_string(before_file).unwrap_or_else(|e| {
        eprintln!("Error reading {before_file}: {e}");
        process::exit(1);
    });

    let after_content = fs::read_to_string(after_file).unwrap_or_else(|e| {
        eprintln!("Error reading {after_file}: {e}");
        process::exit(1);
    });

    let fragments = compare_lines(&before_content, &after_content, policy, &Never)
        .expect("comparison without a cancellation source cannot fail");

    if fragments.is_empty() {
        println!("No differences.");
        return;
    }

    for fragment in fragments {
        println!(
            "lines {}..{} -> {}..{}",
            fragment.start_line1, fragment.end_line1, fragment.start_line2, fragment.end_line2
        );
        for line in before_content[fragment.range1()].lines() {
            println!("< {line}");
        }
        for line in after_content[fragment.range2()].lines() {
            println!("> {line}");
        }
    }
}
