//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! pomerge - fill untranslated messages from another catalog
//!
//! Every entry of TARGET whose translation is empty is replaced by the
//! entry with the same msgctxt/msgid from SOURCE, if that one is
//! translated. The result is written as .po text.

use clap::Parser;
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use posixutils_pofile::{Catalog, PoError};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::exit;

/// pomerge - fill untranslated messages from another catalog
#[derive(Parser)]
#[command(
    version,
    about = gettext("pomerge - fill untranslated messages from another catalog"),
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    #[arg(short = 'v', long, help = gettext("Report how many messages were filled"))]
    verbose: bool,

    #[arg(short = 'o', long = "output-file", help = gettext("Output file name (default: standard output)"))]
    output: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::HelpLong, help = gettext("Print help"))]
    help: Option<bool>,

    #[arg(short = 'V', long, action = clap::ArgAction::Version, help = gettext("Print version"))]
    version: Option<bool>,

    #[arg(help = gettext("Catalog to update"))]
    target: PathBuf,

    #[arg(help = gettext("Catalog providing translations"))]
    source: PathBuf,
}

fn read_catalog(path: &Path) -> Result<Catalog, String> {
    Catalog::read(path).map_err(|e| match e {
        PoError::FileNotFound(_) => format!(
            "{}: {}",
            path.display(),
            gettext("No such file or directory")
        ),
        e => format!("{}: {}", path.display(), e),
    })
}

fn write_catalog(output: Option<&Path>, catalog: &Catalog) -> Result<(), PoError> {
    match output {
        Some(path) => catalog.write_po(path),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(catalog.to_po_string().as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
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

    let (mut target, source) = match (read_catalog(&args.target), read_catalog(&args.source)) {
        (Ok(target), Ok(source)) => (target, source),
        (target, source) => {
            for err in [target.err(), source.err()].into_iter().flatten() {
                eprintln!("pomerge: {}", err);
            }
            exit(1);
        }
    };

    let filled = target.merge_from(&source);
    if args.verbose {
        eprintln!("{} {}.", filled, gettext("messages filled"));
    }

    if let Err(e) = write_catalog(args.output.as_deref(), &target) {
        let name = args
            .output
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| gettext("standard output"));
        eprintln!("pomerge: {}: {}", name, e);
        exit(1);
    }
}
