//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use crate::harness::{create_file, path_arg, run_test, run_test_base, run_test_in_dir, TestPlan};
use posixutils_pofile::po_lib::mo_file::MoFile;
use std::fs;
use tempfile::TempDir;

const MSGFMT: &str = env!("CARGO_BIN_EXE_msgfmt");

const SIMPLE_PO: &str = r#"
msgid ""
msgstr "Content-Type: text/plain; charset=UTF-8"

msgid "Hello"
msgstr "Bonjour"

msgid "Bye"
msgstr ""
"#;

/// Test msgfmt with simple .po file
#[test]
fn test_msgfmt_simple() {
    let temp_dir = TempDir::new().unwrap();
    let po_path = create_file(temp_dir.path(), "test.po", SIMPLE_PO.as_bytes());
    let mo_path = temp_dir.path().join("test.mo");

    run_test(TestPlan {
        cmd: MSGFMT,
        args: vec![String::from("-o"), path_arg(&mo_path), path_arg(&po_path)],
        expected_out: String::new(),
        expected_err: String::new(),
        expected_exit_code: 0,
    });

    let data = fs::read(&mo_path).unwrap();
    // Magic number should be 0x950412de (little-endian)
    assert_eq!(&data[..4], &[0xde, 0x12, 0x04, 0x95]);

    let mo = MoFile::read(&data).unwrap();
    let ids: Vec<&str> = mo.messages.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["", "Bye", "Hello"]);
    assert_eq!(mo.gettext("Hello"), Some("Bonjour"));
    assert_eq!(mo.gettext("Bye"), Some(""));
}

/// Default output name is the first input with a .mo extension
#[test]
fn test_msgfmt_default_output() {
    let temp_dir = TempDir::new().unwrap();
    let po_path = create_file(temp_dir.path(), "fr.po", SIMPLE_PO.as_bytes());

    run_test(TestPlan {
        cmd: MSGFMT,
        args: vec![path_arg(&po_path)],
        expected_out: String::new(),
        expected_err: String::new(),
        expected_exit_code: 0,
    });

    assert!(temp_dir.path().join("fr.mo").exists());
}

/// Test msgfmt with plural forms, written to standard output
#[test]
fn test_msgfmt_plural_stdout() {
    let po_content = r#"
msgid "file"
msgid_plural "files"
msgstr[0] "un fichier"
msgstr[1] "%d fichiers"
"#;
    let temp_dir = TempDir::new().unwrap();
    let po_path = create_file(temp_dir.path(), "plural.po", po_content.as_bytes());

    let output = run_test_base(MSGFMT, &[String::from("-o"), String::from("-"), path_arg(&po_path)]);
    assert_eq!(output.status.code(), Some(0));

    let data = output.stdout;
    assert_eq!(&data[44..55], b"file\0files\0");
    assert_eq!(&data[55..], b"un fichier\0%d fichiers\0");
}

/// Input files are searched in -D directories
#[test]
fn test_msgfmt_search_directory() {
    let temp_dir = TempDir::new().unwrap();
    create_file(temp_dir.path(), "search.po", SIMPLE_PO.as_bytes());
    let mo_path = temp_dir.path().join("found.mo");

    run_test(TestPlan {
        cmd: MSGFMT,
        args: vec![
            String::from("-D"),
            path_arg(temp_dir.path()),
            String::from("-o"),
            path_arg(&mo_path),
            String::from("search.po"),
        ],
        expected_out: String::new(),
        expected_err: String::new(),
        expected_exit_code: 0,
    });

    assert!(mo_path.exists());
}

/// Without -o the output is named after the input argument as given, so an
/// input found through -D is compiled into the current directory
#[test]
fn test_msgfmt_search_directory_default_output() {
    let search_dir = TempDir::new().unwrap();
    let work_dir = TempDir::new().unwrap();
    create_file(search_dir.path(), "de.po", SIMPLE_PO.as_bytes());

    run_test_in_dir(
        TestPlan {
            cmd: MSGFMT,
            args: vec![
                String::from("-D"),
                path_arg(search_dir.path()),
                String::from("de.po"),
            ],
            expected_out: String::new(),
            expected_err: String::new(),
            expected_exit_code: 0,
        },
        Some(work_dir.path()),
    );

    let mo_path = work_dir.path().join("de.mo");
    let mo = MoFile::read(&fs::read(&mo_path).unwrap()).unwrap();
    assert_eq!(mo.gettext("Hello"), Some("Bonjour"));
    assert!(!search_dir.path().join("de.mo").exists());
}

#[test]
fn test_msgfmt_statistics_and_check() {
    let temp_dir = TempDir::new().unwrap();
    let po_path = create_file(temp_dir.path(), "stats.po", SIMPLE_PO.as_bytes());
    let mo_path = temp_dir.path().join("stats.mo");

    run_test(TestPlan {
        cmd: MSGFMT,
        args: vec![
            String::from("-c"),
            String::from("-v"),
            String::from("-o"),
            path_arg(&mo_path),
            path_arg(&po_path),
        ],
        expected_out: String::new(),
        expected_err: format!(
            "msgfmt: {}: warning: untranslated message: Bye\n\
             1 translated messages, 1 untranslated messages.\n",
            po_path.display()
        ),
        expected_exit_code: 0,
    });
}

#[test]
fn test_msgfmt_duplicate_entry() {
    let po_content = "msgid \"a\"\nmsgstr \"x\"\n\nmsgid \"a\"\nmsgstr \"y\"\n";
    let temp_dir = TempDir::new().unwrap();
    let po_path = create_file(temp_dir.path(), "dup.po", po_content.as_bytes());
    let mo_path = temp_dir.path().join("dup.mo");

    run_test(TestPlan {
        cmd: MSGFMT,
        args: vec![String::from("-o"), path_arg(&mo_path), path_arg(&po_path)],
        expected_out: String::new(),
        expected_err: format!(
            "msgfmt: {}: line 6: duplicate entry for msgid 'a'\n",
            po_path.display()
        ),
        expected_exit_code: 1,
    });

    assert!(!mo_path.exists());
}

#[test]
fn test_msgfmt_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let po_path = temp_dir.path().join("missing.po");

    run_test(TestPlan {
        cmd: MSGFMT,
        args: vec![path_arg(&po_path)],
        expected_out: String::new(),
        expected_err: format!(
            "msgfmt: {}: No such file or directory\n",
            po_path.display()
        ),
        expected_exit_code: 1,
    });
}

#[test]
fn test_msgfmt_help_and_version() {
    let output = run_test_base(MSGFMT, &[String::from("-h")]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("msgfmt - compile message catalog to binary format"));
    assert!(stdout.contains("Add directory to search path for input files"));

    let output = run_test_base(MSGFMT, &[String::from("-V")]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}
