// dlog/tests/default_logger.rs
use dlog::{Flags, SharedWriter};
use insta::assert_snapshot;
use regex::Regex;
use std::sync::{Arc, LazyLock, Mutex, MutexGuard};

static CAPTURE: LazyLock<Arc<Mutex<Vec<u8>>>> = LazyLock::new(|| Arc::new(Mutex::new(Vec::new())));

// The default logger is shared by every test in this binary.
static SERIAL: Mutex<()> = Mutex::new(());

/// Route the default logger into `CAPTURE` before any test runs.
#[ctor::ctor]
fn capture_default_output() {
    let sink: SharedWriter = CAPTURE.clone();
    dlog::set_output(sink);
}

/// Serialise access and reset the default logger to a known, quiet state.
fn setup(flags: Flags) -> MutexGuard<'static, ()> {
    let guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    dlog::set_debug(false);
    dlog::set_flags(flags);
    dlog::set_prefix("");
    CAPTURE.lock().unwrap().clear();
    guard
}

fn captured() -> String {
    String::from_utf8(CAPTURE.lock().unwrap().clone()).unwrap()
}

#[test]
fn quiet_default_writes_nothing_for_debug_calls() {
    let _guard = setup(Flags::STD);
    for i in 0..10 {
        dlog::debug!("x", i);
        dlog::debugln!("x", i);
        dlog::debugf!("x{}", i);
        dlog::debug(&dlog::operands!["x"]);
    }
    assert_eq!(captured(), "");
}

#[test]
fn set_debug_adds_and_removes_short_file() {
    let _guard = setup(Flags::STD);
    dlog::set_debug(true);
    assert!(dlog::is_debug());
    assert_eq!(dlog::flags(), Flags::STD | Flags::SHORT_FILE);

    dlog::set_debug(false);
    assert!(!dlog::is_debug());
    assert_eq!(dlog::flags(), Flags::STD);
}

#[test]
fn debug_macros_write_when_verbose() {
    let _guard = setup(Flags::empty());
    dlog::set_debug(true);
    dlog::set_flags(Flags::empty());

    dlog::debug!("a ", "b");
    dlog::debugln!("a", "b");
    dlog::debugf!("{}{}", "a", "b");

    assert_eq!(captured(), "a b\na b\nab\n");
}

#[test]
fn debug_lines_name_the_calling_file() {
    let _guard = setup(Flags::empty());
    dlog::set_debug(true);

    let line = line!() + 1;
    dlog::debugf!("{}{}", "a", "b");

    assert_eq!(captured(), format!("default_logger.rs:{line}: ab\n"));
}

#[test]
fn prefix_applies_to_default_output() {
    let _guard = setup(Flags::STD);
    dlog::set_prefix("svc: ");
    dlog::set_debug(true);
    assert_eq!(dlog::prefix(), "svc: ");

    dlog::debugln!("ready");

    let re = Regex::new(r"^svc: .*ready$").unwrap();
    let text = captured();
    assert!(re.is_match(text.trim_end_matches('\n')), "{text:?}");
}

#[test]
fn print_family_ignores_debug_state() {
    let _guard = setup(Flags::empty());
    dlog::log_print!("total=", 3);
    dlog::log_println!("total", 3);
    dlog::log_printf!("total={:>2}", 3);
    dlog::print(&dlog::operands!["fn"]);
    dlog::println(&dlog::operands!["fn", "ln"]);
    dlog::printf(format_args!("fn{}", 'f'));

    assert_snapshot!(captured().replace('\n', "|"), @"total=3|total 3|total= 3|fn|fn ln|fnf|");
}

#[test]
fn adjacent_non_strings_are_spaced() {
    let _guard = setup(Flags::empty());
    dlog::set_debug(true);
    dlog::set_flags(Flags::empty());

    dlog::debug!(1, 2, "x", 3.5);
    dlog::log_print!(1, 2, "x", 3.5);
    dlog::log_print!("n=", 1, 2, String::from("!"));

    assert_eq!(captured(), "1 2x3.5\n1 2x3.5\nn=1 2!\n");
}

#[test]
fn output_reports_success() {
    let _guard = setup(Flags::MSG_PREFIX);
    dlog::set_prefix("> ");
    dlog::output("raw").unwrap();
    assert_eq!(captured(), "> raw\n");
}

#[test]
fn writer_is_the_configured_destination() {
    let _guard = setup(Flags::empty());
    let sink = dlog::writer();
    let expected: SharedWriter = CAPTURE.clone();
    assert!(Arc::ptr_eq(&sink, &expected));
}

#[test]
fn panic_variants_write_then_carry_the_message() {
    let _guard = setup(Flags::empty());

    let caught = std::panic::catch_unwind(|| dlog::log_panic!("boom ", 1));
    let payload = caught.unwrap_err();
    assert_eq!(payload.downcast_ref::<String>().unwrap(), "boom 1");

    let caught = std::panic::catch_unwind(|| dlog::log_panicf!("code {:02}", 7));
    assert_eq!(caught.unwrap_err().downcast_ref::<String>().unwrap(), "code 07");

    let caught = std::panic::catch_unwind(|| dlog::panicln(&dlog::operands!["a", "b"]));
    assert_eq!(caught.unwrap_err().downcast_ref::<String>().unwrap(), "a b\n");

    assert_eq!(captured(), "boom 1\ncode 07\na b\n");
}
