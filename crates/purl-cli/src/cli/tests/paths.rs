//! Tests for normalize, to-url, to-path, encode-path, decode-path.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_normalize() {
    match parse(&["purl", "normalize", "/a/./b/../c"]) {
        CliCommand::Normalize { path } => assert_eq!(path, "/a/./b/../c"),
        _ => panic!("expected Normalize"),
    }
}

#[test]
fn cli_parse_to_url() {
    match parse(&["purl", "to-url", "/a/b c.txt"]) {
        CliCommand::ToUrl { path } => assert_eq!(path, "/a/b c.txt"),
        _ => panic!("expected ToUrl"),
    }
}

#[test]
fn cli_parse_to_path_defaults() {
    match parse(&["purl", "to-path", "file:///a"]) {
        CliCommand::ToPath {
            url,
            windows,
            posix,
        } => {
            assert_eq!(url, "file:///a");
            assert!(!windows);
            assert!(!posix);
        }
        _ => panic!("expected ToPath"),
    }
}

#[test]
fn cli_parse_to_path_windows() {
    match parse(&["purl", "to-path", "file:///C:/a", "--windows"]) {
        CliCommand::ToPath { windows, posix, .. } => {
            assert!(windows);
            assert!(!posix);
        }
        _ => panic!("expected ToPath with --windows"),
    }
}

#[test]
fn cli_parse_to_path_flags_conflict() {
    assert!(Cli::try_parse_from(["purl", "to-path", "file:///a", "--windows", "--posix"]).is_err());
}

#[test]
fn cli_parse_encode_decode() {
    match parse(&["purl", "encode-path", "a b"]) {
        CliCommand::EncodePath { path } => assert_eq!(path, "a b"),
        _ => panic!("expected EncodePath"),
    }
    match parse(&["purl", "decode-path", "a%20b"]) {
        CliCommand::DecodePath { path } => assert_eq!(path, "a%20b"),
        _ => panic!("expected DecodePath"),
    }
}
