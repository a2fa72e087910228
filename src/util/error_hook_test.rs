use super::*;

#[test]
fn script_report_formats_message() {
    let report = ErrorReport::script("x is not defined");
    assert_eq!(report.kind, ErrorKind::Script);
    assert_eq!(report.to_string(), "portfolio script error: x is not defined");
}

#[test]
fn rejection_report_formats_reason() {
    let report = ErrorReport::rejection("fetch aborted");
    assert_eq!(report.kind, ErrorKind::UnhandledRejection);
    assert_eq!(report.to_string(), "unhandled promise rejection: fetch aborted");
}

#[test]
fn empty_message_is_labelled() {
    assert_eq!(ErrorReport::script("").to_string(), "portfolio script error: <no details>");
}

#[test]
fn report_and_install_never_panic_off_browser() {
    report(&ErrorReport::script("boom"));
    install();
}
