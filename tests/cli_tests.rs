//! Integration tests for the netpath CLI
//!
//! These tests run the netpath binary and verify output, exit codes, and
//! logging behavior.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;

/// Get a Command for netpath
fn netpath() -> Command {
    cargo_bin_cmd!("netpath")
}

// ============================================================================
// Help and version tests
// ============================================================================

#[test]
fn test_help_flag() {
    netpath()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: netpath"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("route"))
        .stdout(predicate::str::contains("topology"));
}

#[test]
fn test_version_flag() {
    netpath()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("netpath"));
}

#[test]
fn test_subcommand_help() {
    netpath()
        .args(["route", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("minimum-delay route"));
}

#[test]
fn test_no_command_prints_version_blurb() {
    netpath()
        .assert()
        .success()
        .stdout(predicate::str::contains("netpath"))
        .stdout(predicate::str::contains(
            "Run `netpath --help` for usage information.",
        ));
}

// ============================================================================
// Route command tests
// ============================================================================

#[test]
fn test_route_reference_topology() {
    netpath()
        .args(["route", "1", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Delay: 27"))
        .stdout(predicate::str::contains(
            "Path: Ero-1 -> Asia-1 -> Ws-54 -> DEST",
        ));
}

#[test]
fn test_route_same_start_and_end() {
    netpath()
        .args(["route", "3", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Delay: 0"))
        .stdout(predicate::str::contains("Path: Ero-2"));
}

#[test]
fn test_route_unreachable_is_not_an_error() {
    // DEST has no outgoing links
    netpath()
        .args(["route", "5", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No route from 5 to 1"));
}

#[test]
fn test_route_unknown_node_is_not_an_error() {
    netpath()
        .args(["route", "1", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No route from 1 to 99"));
}

#[test]
fn test_route_quiet_suppresses_no_route_message() {
    netpath()
        .args(["--quiet", "route", "5", "1"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_route_json() {
    let output = netpath()
        .args(["--format", "json", "route", "1", "5"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["from"], 1);
    assert_eq!(json["to"], 5);
    assert_eq!(json["found"], true);
    assert_eq!(json["total_delay"], 27);
    assert_eq!(
        json["path"],
        serde_json::json!(["Ero-1", "Asia-1", "Ws-54", "DEST"])
    );
}

#[test]
fn test_route_json_unreachable_carries_sentinel() {
    let output = netpath()
        .args(["--format", "json", "route", "5", "1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["found"], false);
    assert_eq!(json["total_delay"], u64::from(u32::MAX));
    assert_eq!(json["path"], serde_json::json!([]));
}

#[test]
fn test_route_json_quiet_still_prints_payload() {
    let output = netpath()
        .args(["--quiet", "--format", "json", "route", "5", "1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["found"], false);
}

// ============================================================================
// Topology command tests
// ============================================================================

#[test]
fn test_topology_human_lists_nodes_and_edges() {
    netpath()
        .arg("topology")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nodes:"))
        .stdout(predicate::str::contains("1 Ero-1"))
        .stdout(predicate::str::contains("5 DEST"))
        .stdout(predicate::str::contains("Edges:"))
        .stdout(predicate::str::contains("4 -> 5 delay=5 bandwidth=100"));
}

#[test]
fn test_topology_json() {
    let output = netpath()
        .args(["--format", "json", "topology"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let nodes = json["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 5);
    assert_eq!(nodes[0]["id"], 1);
    assert_eq!(nodes[0]["name"], "Ero-1");
    assert_eq!(nodes[0]["edges"].as_array().unwrap().len(), 2);
    assert_eq!(nodes[0]["edges"][0]["to"], 2);
    assert_eq!(nodes[0]["edges"][0]["delay"], 10);
    assert_eq!(nodes[0]["edges"][0]["bandwidth"], 100);
}

// ============================================================================
// Exit code tests
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    netpath()
        .args(["--format", "invalid", "route", "1", "5"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_argument_json_usage_error() {
    netpath()
        .args(["--format", "json", "route", "1", "5", "--bogus-flag"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_duplicate_format_json_usage_error() {
    netpath()
        .args(["--format", "json", "--format", "human", "route", "1", "5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"duplicate_format\""));
}

#[test]
fn test_unknown_command_exit_code_2() {
    netpath().arg("nonexistent").assert().code(2);
}

#[test]
fn test_unknown_command_json_usage_error() {
    netpath()
        .args(["--format", "json", "nonexistent"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_route_rejects_non_numeric_node_id() {
    netpath().args(["route", "one", "5"]).assert().code(2);
}

#[test]
fn test_route_missing_argument_exit_code_2() {
    netpath().args(["route", "1"]).assert().code(2);
}

// ============================================================================
// Logging tests
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    netpath()
        .args(["--log-level", "debug", "route", "1", "5"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_level_warn_hides_debug_messages() {
    netpath()
        .env_remove("RUST_LOG")
        .args(["--log-level", "warn", "route", "1", "5"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_shows_debug_messages() {
    netpath()
        .args(["--verbose", "route", "1", "5"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_json_produces_structured_lines() {
    netpath()
        .args(["--log-json", "--log-level", "debug", "route", "1", "5"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"timestamp\""))
        .stderr(predicate::str::contains("\"level\""))
        .stderr(predicate::str::contains("\"fields\""));
}

#[test]
fn test_core_query_span_logged() {
    // find_shortest_path opens an instrumented span in netpath-core
    netpath()
        .args(["--log-json", "--log-level", "debug", "route", "1", "5"])
        .assert()
        .success()
        .stderr(predicate::str::contains("find_shortest_path"));
}

#[test]
fn test_netpath_log_env_overrides_cli_flags() {
    netpath()
        .env_remove("RUST_LOG")
        .env("NETPATH_LOG", "netpath=debug")
        .args(["--log-level", "warn", "route", "1", "5"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_invalid_log_level_rejected() {
    netpath()
        .args(["--log-level", "loud", "route", "1", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid log level"))
        .stderr(predicate::str::contains("error, warn, info, debug, trace"));
}

#[test]
fn test_valid_log_levels_accepted() {
    for level in ["error", "warn", "info", "debug", "trace"] {
        netpath()
            .args(["--log-level", level, "route", "1", "5"])
            .assert()
            .success();
    }
}

#[test]
fn test_log_level_case_insensitive() {
    netpath()
        .args(["--log-level", "DEBUG", "route", "1", "5"])
        .assert()
        .success();
}
