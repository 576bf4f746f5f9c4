use teval_types::EvaluationReport;

/// Renders an `EvaluationReport` as human-readable terminal tables:
/// the per-stratum summary, one ranking per metric, and the
/// scored-vs-rejected audit lines.
pub fn render_report(report: &EvaluationReport) -> String {
    let mut out = String::new();

    out.push_str("--- Tool-Selection Evaluation Summary ---\n");
    out.push_str(&format!(
        "{:<14} {:<8} {:>6} {:>9} {:>10} {:>8} {:>7} {:>10} {:>11} {:>10}\n",
        "agent",
        "group",
        "count",
        "accuracy",
        "precision",
        "recall",
        "f1",
        "over-sel",
        "under-sel",
        "fail-rate"
    ));
    for row in &report.summary {
        out.push_str(&format!(
            "{:<14} {:<8} {:>6} {:>9.3} {:>10.3} {:>8.3} {:>7.3} {:>10.3} {:>11.3} {:>10.3}\n",
            row.agent_name,
            row.group.to_string(),
            row.count,
            row.accuracy,
            row.precision,
            row.recall,
            row.f1,
            row.over_selection,
            row.under_selection,
            row.tool_fail_rate,
        ));
    }

    out.push_str("\n--- Rankings (overall) ---\n");
    for ranking in &report.rankings {
        out.push_str(&format!("{}:\n", ranking.metric));
        for entry in &ranking.entries {
            out.push_str(&format!(
                "  {}. {:<14} {:.3}\n",
                entry.rank, entry.agent_name, entry.value
            ));
        }
    }

    out.push_str(&format!(
        "\nScored {} of {} records ({} rejected)\n",
        report.scored,
        report.total_records(),
        report.rejected.len()
    ));
    for rejected in &report.rejected {
        out.push_str(&format!(
            "  ❌ {} / '{}': {}\n",
            rejected.agent_name, rejected.query_ref, rejected.reason
        ));
    }

    out
}
