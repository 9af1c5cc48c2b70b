use std::ffi::OsStr;

use cu_cli::logging::wants_ansi;

#[test]
fn piped_output_has_no_colors() {
    assert!(!wants_ansi(false, None));
}

#[test]
fn terminal_output_is_colored() {
    assert!(wants_ansi(true, None));
}

#[test]
fn no_color_disables_colors_on_a_terminal() {
    assert!(!wants_ansi(true, Some(OsStr::new("1"))));
    assert!(wants_ansi(true, Some(OsStr::new(""))));
}
