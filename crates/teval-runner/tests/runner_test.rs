//! File-level tests: YAML fixtures on disk through the loaders and
//! into the evaluation pipeline.

use std::io::Write;
use teval_lib::{evaluate, GroundTruthIndex};
use teval_runner::{loader, renderer};
use teval_types::{Difficulty, DifficultyGroup};

const GROUND_TRUTH_YAML: &str = r#"
- query: "What is the SSI stock price today?"
  difficulty: easy
  tools: [stock_price]
- id: q-hard-1
  query: "Compare SSI and VNM performance this quarter"
  difficulty: "khó"
  tools: [Stock_Price, search_web]
"#;

const RECORDS_YAML: &str = r#"
- agent: react
  query: "What is the SSI stock price today?"
  tools: "stock_price"
- agent: react
  query: q-hard-1
  tools: "['stock_price', 'search_web']"
  failed_tools: "search_web"
- agent: react
  query: "Who won the match last night?"
  tools: "search_web"
"#;

fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn test_ground_truth_loads_with_mixed_labels_and_default_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "ground_truth.yaml", GROUND_TRUTH_YAML);

    let queries = loader::load_ground_truth(&path).unwrap();
    assert_eq!(queries.len(), 2);
    // Missing id defaults to the query text.
    assert_eq!(queries[0].id, "What is the SSI stock price today?");
    assert_eq!(queries[0].difficulty, Difficulty::Easy);
    // Vietnamese label and mixed-case tool names are canonicalized.
    assert_eq!(queries[1].difficulty, Difficulty::Hard);
    assert!(queries[1].required_tools.contains("stock_price"));
}

#[test]
fn test_ground_truth_with_unknown_difficulty_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "bad.yaml",
        "- query: q1\n  difficulty: medium\n  tools: []\n",
    );
    let err = loader::load_ground_truth(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid difficulty label"));
}

#[test]
fn test_end_to_end_from_files_to_rendered_report() {
    let dir = tempfile::tempdir().unwrap();
    let ground_truth = write_fixture(&dir, "ground_truth.yaml", GROUND_TRUTH_YAML);
    let records_path = write_fixture(&dir, "react.yaml", RECORDS_YAML);

    let queries = loader::load_ground_truth(&ground_truth).unwrap();
    let index = GroundTruthIndex::from_queries(queries).unwrap();
    let records = loader::load_records(&records_path).unwrap();
    let report = evaluate(&index, &records);

    // Two scorable records; the off-dataset query is rejected.
    assert_eq!(report.scored, 2);
    assert_eq!(report.rejected.len(), 1);
    assert!(report.rejected[0].reason.contains("unknown query"));

    let overall = report
        .summary
        .iter()
        .find(|row| row.group == DifficultyGroup::Overall)
        .unwrap();
    assert_eq!(overall.count, 2);
    // Easy query exact; hard query's search_web failed, so only half
    // the required set was effective.
    assert!((overall.accuracy - 0.5).abs() < 1e-9);
    assert!((overall.recall - 0.75).abs() < 1e-9);
    assert!((overall.tool_fail_rate - 0.5).abs() < 1e-9);

    let rendered = renderer::render_report(&report);
    assert!(rendered.contains("react"));
    assert!(rendered.contains("Scored 2 of 3 records (1 rejected)"));
    assert!(rendered.contains("accuracy"));
}
