use cu_core::models::RunReport;

/// Plain-text table with one aligned row per processed environment.
///
/// The summary line is left to the log stream; an empty report renders as an
/// empty string.
pub fn render_report(report: &RunReport) -> String {
    let width = report
        .entries
        .iter()
        .map(|e| e.environment.name().len())
        .max()
        .unwrap_or(0);

    report
        .entries
        .iter()
        .map(|e| format!("{:<width$}  {}", e.environment.name(), e.decision.label()))
        .collect::<Vec<_>>()
        .join("\n")
}
