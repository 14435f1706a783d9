//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! msgunfmt - decompile a binary message catalog
//!
//! Reads a machine object (.mo) file and prints it as portable
//! object (.po) text.

use clap::Parser;
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use posixutils_pofile::po_lib::mo_file::{MoError, MoFile};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::exit;

/// msgunfmt - decompile message catalog from binary format
#[derive(Parser)]
#[command(
    version,
    about = gettext("msgunfmt - decompile message catalog from binary format"),
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    #[arg(short = 'o', long = "output-file", help = gettext("Output file name (default: standard output)"))]
    output: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::HelpLong, help = gettext("Print help"))]
    help: Option<bool>,

    #[arg(short = 'V', long, action = clap::ArgAction::Version, help = gettext("Print version"))]
    version: Option<bool>,

    #[arg(help = gettext("Input .mo file"))]
    file: PathBuf,
}

fn decompile(input: &Path, output: Option<&Path>) -> Result<(), MoError> {
    let data = fs::read(input)?;
    let mo = MoFile::read(&data)?;
    let text = mo.to_catalog().to_po_string();

    match output {
        Some(path) => fs::write(path, text)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
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

    if let Err(e) = decompile(&args.file, args.output.as_deref()) {
        eprintln!("msgunfmt: {}: {}", args.file.display(), e);
        exit(1);
    }
}
