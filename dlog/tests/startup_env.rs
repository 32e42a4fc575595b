// dlog/tests/startup_env.rs
//
// The default logger reads DEBUG once, when the process starts. These tests
// re-run this test binary as a child with a controlled environment and look at
// what the child wrote.
use duct::cmd;
use regex::Regex;
use std::env;
use std::process::Output;

const CHILD: &str = "DLOG_CHILD";

/// Does nothing unless started by `run_child`.
#[test]
fn child() {
    let Ok(action) = env::var(CHILD) else {
        return;
    };
    match action.as_str() {
        "debug" => dlog::debug!("x-child"),
        "state" => println!(
            "debug={} flags={}",
            dlog::is_debug(),
            dlog::flags().bits()
        ),
        "fatal" => dlog::fatalf!("fatal-child {}", 1),
        "panic" => dlog::log_panicln!("panic-child"),
        other => panic!("unknown action {other}"),
    }
}

fn run_child(action: &str, debug: Option<&str>) -> Output {
    let exe = env::current_exe().unwrap();
    let expr = cmd(exe, ["child", "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD, action)
        .stdout_capture()
        .stderr_capture()
        .unchecked();
    let expr = match debug {
        Some(val) => expr.env("DEBUG", val),
        None => expr.env_remove("DEBUG"),
    };
    expr.run().unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn unset_debug_suppresses_default_debug_output() {
    let output = run_child("debug", None);
    assert!(output.status.success());
    assert!(!stderr(&output).contains("x-child"), "{}", stderr(&output));
}

#[test]
fn empty_debug_counts_as_unset() {
    let output = run_child("debug", Some(""));
    assert!(output.status.success());
    assert!(!stderr(&output).contains("x-child"), "{}", stderr(&output));
}

#[test]
fn set_debug_emits_default_debug_output_with_caller_location() {
    let output = run_child("debug", Some("1"));
    assert!(output.status.success());
    let re = Regex::new(r"(?m)^\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2} startup_env\.rs:\d+: x-child$")
        .unwrap();
    assert!(re.is_match(&stderr(&output)), "{}", stderr(&output));
}

#[test]
fn startup_flags_follow_debug_state() {
    let quiet = run_child("state", None);
    let stdout = String::from_utf8_lossy(&quiet.stdout);
    assert!(stdout.contains("debug=false flags=3"), "{stdout}");

    let verbose = run_child("state", Some("yes"));
    let stdout = String::from_utf8_lossy(&verbose.stdout);
    assert!(stdout.contains("debug=true flags=19"), "{stdout}");
}

#[test]
fn fatal_writes_then_exits_with_status_one() {
    let output = run_child("fatal", None);
    assert_eq!(output.status.code(), Some(1));
    let re = Regex::new(r"(?m)^\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2} fatal-child 1$").unwrap();
    assert!(re.is_match(&stderr(&output)), "{}", stderr(&output));
}

#[test]
fn fatal_ignores_debug_state() {
    let output = run_child("fatal", Some("1"));
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(": fatal-child 1"), "{}", stderr(&output));
}

#[test]
fn panic_writes_before_unwinding() {
    let output = run_child("panic", None);
    assert!(!output.status.success());
    let re = Regex::new(r"(?m)^\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2} panic-child$").unwrap();
    assert!(re.is_match(&stderr(&output)), "{}", stderr(&output));
}
