//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use crate::harness::{create_file, path_arg, run_test, run_test_base, TestPlan};
use posixutils_pofile::{Catalog, Translation};
use std::fs;
use tempfile::TempDir;

const POMERGE: &str = env!("CARGO_BIN_EXE_pomerge");

const TARGET_PO: &str = r#"
msgid "Hello"
msgstr "Bonjour"

msgid "Bye"
msgstr ""
"#;

const SOURCE_PO: &str = r#"
#: greet.c:3
msgid "Bye"
msgstr "Au revoir"

msgid "Thanks"
msgstr "Merci"
"#;

#[test]
fn test_pomerge_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let target = create_file(temp_dir.path(), "target.po", TARGET_PO.as_bytes());
    let source = create_file(temp_dir.path(), "source.po", SOURCE_PO.as_bytes());

    run_test(TestPlan {
        cmd: POMERGE,
        args: vec![String::from("-v"), path_arg(&target), path_arg(&source)],
        expected_out: String::from(concat!(
            "msgid \"\"\n",
            "msgstr \"\"\n",
            "\"Content-Type: text/plain; charset=UTF-8\\n\"\n",
            "\"MIME-Version: 1.0\\n\"\n",
            "\"Content-Transfer-Encoding: 8bit\\n\"\n",
            "\n",
            "msgid \"Hello\"\n",
            "msgstr \"Bonjour\"\n",
            "\n",
            "#: greet.c:3\n",
            "msgid \"Bye\"\n",
            "msgstr \"Au revoir\"\n",
        )),
        expected_err: String::from("1 messages filled.\n"),
        expected_exit_code: 0,
    });
}

#[test]
fn test_pomerge_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let target = create_file(temp_dir.path(), "target.po", TARGET_PO.as_bytes());
    let source = create_file(temp_dir.path(), "source.po", SOURCE_PO.as_bytes());
    let output = temp_dir.path().join("merged.po");

    run_test(TestPlan {
        cmd: POMERGE,
        args: vec![
            String::from("-o"),
            path_arg(&output),
            path_arg(&target),
            path_arg(&source),
        ],
        expected_out: String::new(),
        expected_err: String::new(),
        expected_exit_code: 0,
    });

    let merged = Catalog::parse(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(merged.len(), 3);
    assert_eq!(
        merged.get("Bye").unwrap().translation,
        Translation::from("Au revoir")
    );
    assert!(merged.get("Thanks").is_none());
}

#[test]
fn test_pomerge_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let target = create_file(temp_dir.path(), "target.po", b"\"stray\"\n");
    let source = create_file(temp_dir.path(), "source.po", SOURCE_PO.as_bytes());

    run_test(TestPlan {
        cmd: POMERGE,
        args: vec![path_arg(&target), path_arg(&source)],
        expected_out: String::new(),
        expected_err: format!(
            "pomerge: {}: line 1: lines beginning with '\"' must continue a msgid, msgid_plural or msgstr string\n",
            target.display()
        ),
        expected_exit_code: 1,
    });
}

#[test]
fn test_pomerge_help() {
    let output = run_test_base(POMERGE, &[String::from("--help")]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pomerge - fill untranslated messages from another catalog"));
    assert!(stdout.contains("Catalog providing translations"));
}
