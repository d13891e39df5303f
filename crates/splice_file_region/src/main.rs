use anyhow::{Context, Result};
use clap::{Arg, Command};
use std::fs;
use std::path::PathBuf;

// Library dependencies.
use locate_marker_region::locate_marker_region;
use persist_document::{persist_document, read_document};
use splice_marker_region::splice_marker_region;
use unescape_newlines::unescape_newlines;

fn main() -> Result<()> {
    let matches = Command::new("splice_file_region")
        .version("0.1.0")
        .about("Replaces the first marker-delimited region of a text file with new content")
        .arg(
            Arg::new("file")
                .long("file")
                .num_args(1)
                .required(true)
                .help("Path of the file to splice"),
        )
        .arg(
            Arg::new("start_marker")
                .long("start-marker")
                .num_args(1)
                .required(true)
                .help("Literal substring marking the start of the region"),
        )
        .arg(
            Arg::new("end_marker")
                .long("end-marker")
                .num_args(1)
                .required(true)
                .help("Literal substring marking the end of the region"),
        )
        .arg(
            Arg::new("replacement")
                .long("replacement")
                .num_args(1)
                .help("Inline replacement text; \\n and \\t escapes are expanded"),
        )
        .arg(
            Arg::new("replacement_file")
                .long("replacement-file")
                .num_args(1)
                .conflicts_with("replacement")
                .help("File whose content is used verbatim as the replacement"),
        )
        .arg(
            Arg::new("dry_run")
                .long("dry-run")
                .help("Print the spliced document to stdout instead of writing the file")
                .action(clap::ArgAction::SetTrue)
                .default_value("false"),
        )
        .get_matches();

    let file = PathBuf::from(matches.get_one::<String>("file").unwrap());
    let start_marker = matches.get_one::<String>("start_marker").unwrap();
    let end_marker = matches.get_one::<String>("end_marker").unwrap();
    let dry_run = *matches.get_one::<bool>("dry_run").unwrap();

    // 1. Build the replacement text before touching the target file.
    let replacement = match (
        matches.get_one::<String>("replacement"),
        matches.get_one::<String>("replacement_file"),
    ) {
        (Some(inline), None) => unescape_newlines(inline),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Error reading replacement file {}", path))?,
        (None, None) => {
            anyhow::bail!("Either --replacement or --replacement-file must be provided")
        }
        (Some(_), Some(_)) => unreachable!("clap rejects the combination"),
    };

    // 2. Read the document once and locate the region.
    let document = read_document(&file)?;
    let region = locate_marker_region(&document, start_marker, end_marker)
        .with_context(|| format!("No matching region in {}", file.display()))?;
    println!(
        "Located region at bytes {}..{} in {}",
        region.spliced_span().start,
        region.spliced_span().end,
        file.display()
    );

    // 3. Splice. The original document stays untouched in memory.
    let new_document = splice_marker_region(&document, &region, &replacement);

    // 4. Persist, or print when doing a dry run.
    if dry_run {
        print!("{}", new_document);
        return Ok(());
    }
    persist_document(&file, &new_document)?;
    println!("Wrote spliced document to {}", file.display());

    Ok(())
}
