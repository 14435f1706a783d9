//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! msgfmt - compile message catalog to binary format
//!
//! The msgfmt utility compiles portable message object (.po) files
//! into machine object (.mo) files for use by gettext functions.

use clap::Parser;
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use posixutils_pofile::{Catalog, PoError};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::exit;

/// msgfmt - compile message catalog to binary format
#[derive(Parser)]
#[command(
    version,
    about = gettext("msgfmt - compile message catalog to binary format"),
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    #[arg(short = 'c', long, help = gettext("Check the PO files and warn about untranslated entries"))]
    check: bool,

    #[arg(short = 'v', long, help = gettext("Print statistics about the translations"))]
    verbose: bool,

    #[arg(short = 'D', action = clap::ArgAction::Append, help = gettext("Add directory to search path for input files"))]
    directories: Vec<PathBuf>,

    #[arg(short = 'o', long = "output-file", help = gettext("Output file name ('-' for standard output)"))]
    output: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::HelpLong, help = gettext("Print help"))]
    help: Option<bool>,

    #[arg(short = 'V', long, action = clap::ArgAction::Version, help = gettext("Print version"))]
    version: Option<bool>,

    #[arg(required = true, help = gettext("Input .po files"))]
    files: Vec<PathBuf>,
}

fn main() {
    // Set up localization
    setlocale(LocaleCategory::LcAll, "");
    if textdomain("posixutils-rs").is_err() {
        // Ignore error - translation may not be available
    }
    let _ = bind_textdomain_codeset("posixutils-rs", "UTF-8");
    env_logger::init();

    let args = Args::parse();

    let mut exit_code = 0;
    let mut catalog = Catalog::new();

    for input_path in &args.files {
        let path = find_input_file(input_path, &args.directories);

        let po = match Catalog::read(&path) {
            Ok(po) => po,
            Err(PoError::FileNotFound(_)) => {
                eprintln!(
                    "msgfmt: {}: {}",
                    path.display(),
                    gettext("No such file or directory")
                );
                exit_code = 1;
                continue;
            }
            Err(e) => {
                eprintln!("msgfmt: {}: {}", path.display(), e);
                exit_code = 1;
                continue;
            }
        };

        if args.check {
            check_catalog(&path, &po);
        }

        catalog.append(po);
    }

    if exit_code != 0 {
        exit(exit_code);
    }

    if args.verbose {
        print_statistics(&catalog);
    }

    let output_path = get_output_path(&args);
    if let Err(e) = write_output(&output_path, &catalog) {
        eprintln!("msgfmt: {}: {}", output_path.display(), e);
        exit_code = 1;
    }

    exit(exit_code);
}

/// Find an input file, searching directories if needed
fn find_input_file(path: &Path, directories: &[PathBuf]) -> PathBuf {
    if path.exists() || path.is_absolute() {
        return path.to_path_buf();
    }

    directories
        .iter()
        .map(|dir| dir.join(path))
        .find(|full_path| full_path.exists())
        .unwrap_or_else(|| path.to_path_buf())
}

/// Get the output file path, derived from the first input file by default
fn get_output_path(args: &Args) -> PathBuf {
    match &args.output {
        Some(output) => output.clone(),
        None => args.files[0].with_extension("mo"),
    }
}

/// Warn about entries that will not be useful at runtime
fn check_catalog(path: &Path, catalog: &Catalog) {
    for entry in catalog.entries().filter(|e| !e.is_header()) {
        if !entry.is_translated() {
            eprintln!(
                "msgfmt: {}: {}: {}",
                path.display(),
                gettext("warning: untranslated message"),
                truncate(&entry.msgid, 30)
            );
        } else if entry.msgid_plural.is_some() && !entry.translation.is_plural() {
            eprintln!(
                "msgfmt: {}: {}: {}",
                path.display(),
                gettext("warning: plural message has no msgstr[N] forms"),
                truncate(&entry.msgid, 30)
            );
        }
    }
}

fn print_statistics(catalog: &Catalog) {
    let (translated, untranslated) = catalog
        .entries()
        .filter(|e| !e.is_header())
        .fold((0, 0), |(t, u), e| {
            if e.is_translated() {
                (t + 1, u)
            } else {
                (t, u + 1)
            }
        });

    eprintln!(
        "{} {}, {} {}.",
        translated,
        gettext("translated messages"),
        untranslated,
        gettext("untranslated messages")
    );
}

/// Truncate a string for display
fn truncate(s: &str, max_len: usize) -> String {
    match s.char_indices().nth(max_len) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

fn write_output(path: &Path, catalog: &Catalog) -> Result<(), PoError> {
    if path == Path::new("-") {
        let mut stdout = io::stdout().lock();
        stdout.write_all(&catalog.to_mo_bytes())?;
        stdout.flush()?;
        Ok(())
    } else {
        catalog.write_mo(path)
    }
}
