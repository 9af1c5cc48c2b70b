use cu_cli::render::render_report;
use cu_core::models::{ApplyStep, RunMode, RunReport, UpdateDecision};

#[test]
fn empty_report_renders_nothing() {
    let report = RunReport::new(RunMode::Apply);
    assert_eq!(render_report(&report), "");
}

#[test]
fn skipped_and_applied() {
    let mut report = RunReport::new(RunMode::Apply);
    report.record("web1".into(), UpdateDecision::NoDescriptor);
    report.record("web2".into(), UpdateDecision::UpdateApplied);
    report.finish();
    insta::assert_snapshot!(render_report(&report), @r"
    web1  skipped (no descriptor)
    web2  updated
    ");
}

#[test]
fn names_are_aligned_and_failures_name_the_step() {
    let mut report = RunReport::new(RunMode::Apply);
    report.record("db".into(), UpdateDecision::UpdateFailed { step: ApplyStep::Stop });
    report.record("frontend".into(), UpdateDecision::NoUpdateAvailable);
    report.finish();
    insta::assert_snapshot!(render_report(&report), @r"
    db        failed at stop
    frontend  up to date
    ");
}

#[test]
fn simulate_report() {
    let mut report = RunReport::new(RunMode::Simulate);
    report.record("web1".into(), UpdateDecision::NoDescriptor);
    report.record("web2".into(), UpdateDecision::SimulatedUpdate);
    report.finish();
    insta::assert_snapshot!(render_report(&report), @r"
    web1  skipped (no descriptor)
    web2  would update (simulated)
    ");
}

#[test]
fn summary_line_is_not_repeated_in_the_table() {
    let mut report = RunReport::new(RunMode::Apply);
    report.record("web".into(), UpdateDecision::UpdateApplied);
    report.finish();
    let table = render_report(&report);
    assert!(!table.contains(&report.summary_line()));
    assert_eq!(table.lines().count(), 1);
}
