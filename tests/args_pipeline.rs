//! Integration tests for the args pipeline module.

use std::io::Write;
use tempfile::NamedTempFile;

use unrar_wrapper::args::{build_spawn_params, SpawnParams, LSAR_REST_WARNING};
use unrar_wrapper::cli::{Cli, OverwriteMode, UnrarCommand};

fn rest(tokens: Vec<&str>) -> Vec<String> {
    tokens.into_iter().map(String::from).collect()
}

fn invocation(command: UnrarCommand, rest_tokens: Vec<&str>) -> Cli {
    Cli {
        command,
        overwrite: None,
        password: None,
        archive: "sample.rar".to_string(),
        rest: rest(rest_tokens),
    }
}

fn build(cli: &Cli) -> SpawnParams {
    build_spawn_params(cli).expect("pipeline should succeed")
}

fn list_file(lines: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(lines.as_bytes()).unwrap();
    file
}

// =============================================================================
// LISTING AND TESTING COMMANDS
// =============================================================================

#[test]
fn list_command_maps_to_lsar_l() {
    let p = build(&invocation(UnrarCommand::L, vec![]));
    assert_eq!(p.command, "lsar");
    assert_eq!(p.args, ["-l", "sample.rar"]);
    assert!(p.warnings.is_empty());
}

#[test]
fn bare_list_command_maps_to_plain_lsar() {
    let p = build(&invocation(UnrarCommand::Lb, vec![]));
    assert_eq!(p.command, "lsar");
    assert_eq!(p.args, ["sample.rar"]);
}

#[test]
fn technical_list_command_maps_to_lsar_technical() {
    for command in [UnrarCommand::Lt, UnrarCommand::Vta] {
        let p = build(&invocation(command, vec![]));
        assert_eq!(p.command, "lsar");
        assert_eq!(p.args, ["-L", "sample.rar"]);
    }
}

#[test]
fn test_command_maps_to_lsar_t() {
    let p = build(&invocation(UnrarCommand::T, vec![]));
    assert_eq!(p.command, "lsar");
    assert_eq!(p.args, ["-t", "sample.rar"]);
}

#[test]
fn lsar_with_password() {
    let mut cli = invocation(UnrarCommand::V, vec![]);
    cli.password = Some("mypass".to_string());
    let p = build(&cli);
    assert_eq!(p.args, ["-l", "-p", "mypass", "sample.rar"]);
}

// -- trailing arguments are dropped with a warning ----------------------------

#[test]
fn lsar_warns_and_ignores_trailing_arguments() {
    let p = build(&invocation(UnrarCommand::Lb, vec!["ignored.txt"]));
    assert_eq!(p.command, "lsar");
    assert_eq!(p.args, ["sample.rar"]);
    assert_eq!(p.warnings, [LSAR_REST_WARNING]);
}

#[test]
fn lsar_never_classifies_trailing_arguments() {
    // even a would-be dest dir or list file reference is dropped whole
    let p = build(&invocation(UnrarCommand::T, vec!["@list1", "out/"]));
    assert_eq!(p.args, ["-t", "sample.rar"]);
    assert_eq!(p.warnings.len(), 1);
}

#[test]
fn lsar_without_trailing_arguments_warns_nothing() {
    let p = build(&invocation(UnrarCommand::L, vec![]));
    assert!(p.warnings.is_empty());
}

// =============================================================================
// EXTRACTION
// =============================================================================

#[test]
fn extract_always_suppresses_auto_directory() {
    let p = build(&invocation(UnrarCommand::X, vec![]));
    assert_eq!(p.command, "unar");
    assert_eq!(p.args, ["-D", "sample.rar"]);
}

#[test]
fn extract_overwrite_mode_before_suppression_flag() {
    let mut cli = invocation(UnrarCommand::X, vec![]);
    cli.overwrite = Some(OverwriteMode::Skip);
    let p = build(&cli);
    assert_eq!(p.args, ["-s", "-D", "sample.rar"]);
}

#[test]
fn extract_files_follow_archive() {
    let p = build(&invocation(UnrarCommand::X, vec!["a.png", "b.png"]));
    assert_eq!(p.args, ["-D", "sample.rar", "a.png", "b.png"]);
}

#[test]
fn extract_dest_dir_after_all_other_options() {
    let mut cli = invocation(UnrarCommand::X, vec!["out/"]);
    cli.password = Some("pw".to_string());
    let p = build(&cli);
    assert_eq!(p.args, ["-p", "pw", "-D", "-o", "out/", "sample.rar"]);
}

#[test]
fn extract_last_dest_dir_wins() {
    let p = build(&invocation(UnrarCommand::X, vec!["a/", "b/"]));
    assert_eq!(p.args, ["-D", "-o", "b/", "sample.rar"]);
}

// -- list-file expansion ------------------------------------------------------

#[test]
fn extract_expands_list_files_after_literal_files() {
    let lf = list_file("a.txt\nb.txt\n");
    let reference = format!("@{}", lf.path().display());
    let p = build(&invocation(
        UnrarCommand::X,
        vec!["pic.png", reference.as_str()],
    ));
    assert_eq!(p.args, ["-D", "sample.rar", "pic.png", "a.txt", "b.txt"]);
}

#[test]
fn extract_duplicate_list_file_expanded_twice() {
    let lf = list_file("x\n");
    let reference = format!("@{}", lf.path().display());
    let p = build(&invocation(
        UnrarCommand::X,
        vec![reference.as_str(), reference.as_str()],
    ));
    assert_eq!(p.args, ["-D", "sample.rar", "x", "x"]);
}

#[test]
fn extract_missing_list_file_fails_with_path() {
    let result = build_spawn_params(&invocation(UnrarCommand::X, vec!["@missing-list"]));
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Cannot open missing-list"));
}

// =============================================================================
// END-TO-END SCENARIOS
// =============================================================================

#[test]
fn full_extract_invocation() {
    let lf = list_file("a.txt\nb.txt\n");
    let reference = format!("@{}", lf.path().display());

    let cli = Cli {
        command: UnrarCommand::X,
        overwrite: Some(OverwriteMode::Force),
        password: Some("secret".to_string()),
        archive: "sample.rar".to_string(),
        rest: rest(vec!["pic.png", reference.as_str(), "out/"]),
    };

    let p = build(&cli);
    assert_eq!(p.command, "unar");
    assert_eq!(
        p.args,
        ["-f", "-p", "secret", "-D", "-o", "out/", "sample.rar", "pic.png", "a.txt", "b.txt"]
    );
    assert!(p.warnings.is_empty());
}

#[test]
fn full_bare_listing_invocation() {
    let p = build(&invocation(UnrarCommand::Lb, vec!["ignored.txt"]));
    assert_eq!(p.command, "lsar");
    assert_eq!(p.args, ["sample.rar"]);
    assert!(!p.args.contains(&"ignored.txt".to_string()));
    assert_eq!(p.warnings.len(), 1);
}
