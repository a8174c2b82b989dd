//! Integration tests for csvprof.

use std::io::Write;
use tempfile::NamedTempFile;

use csvprof::{
    InferredType, MarkdownOptions, MissingVocabulary, ParserConfig, ProfileError, Profiler,
    ProfilerConfig, render_markdown, to_json,
};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

fn create_test_file_bytes(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content).expect("Failed to write to temp file");
    file
}

// =============================================================================
// Basic Functionality Tests
// =============================================================================

#[test]
fn test_profile_basic_csv() {
    let content = "id,name,age,city\n\
                   1,Alice,30,NYC\n\
                   2,Bob,25,LA\n\
                   3,Carol,,NYC\n";
    let file = create_test_file(content);

    let outcome = Profiler::new().profile_file(file.path()).expect("Profiling failed");

    assert_eq!(outcome.source.row_count, 3);
    assert_eq!(outcome.source.column_count, 4);
    assert_eq!(outcome.source.format, "csv");
    assert!(outcome.source.hash.starts_with("sha256:"));
    assert!(outcome.timing_ms >= 0.0);

    let report = &outcome.report;
    assert_eq!(report.n_rows, 3);
    assert_eq!(report.n_cols, 4);
    assert_eq!(report.column_names(), vec!["id", "name", "age", "city"]);

    let age = report.get_column("age").unwrap();
    assert_eq!(age.inferred_type, InferredType::Number);
    assert_eq!(age.missing, 1);
    assert_eq!(age.numeric.unwrap().mean, 27.5);

    let city = report.get_column("city").unwrap();
    assert_eq!(city.inferred_type, InferredType::Text);
    let top = city.top_k.as_ref().unwrap();
    assert_eq!(top[0].value, "NYC");
    assert_eq!(top[0].count, 2);
}

#[test]
fn test_profile_tsv_auto_detect() {
    let content = "sample_id\tdiagnosis\tage\n\
                   S001\tCD\t25\n\
                   S002\tUC\t30\n";
    let file = create_test_file(content);

    let outcome = Profiler::new().profile_file(file.path()).expect("Profiling failed");

    assert_eq!(outcome.source.format, "tsv");
    assert_eq!(outcome.report.n_cols, 3);
}

#[test]
fn test_profile_with_bom() {
    let file = create_test_file_bytes(b"\xEF\xBB\xBFvalue,label\n1,a\n2,b\n");

    let outcome = Profiler::new().profile_file(file.path()).expect("Profiling failed");

    assert_eq!(outcome.report.columns[0].name, "value");
    assert_eq!(outcome.report.columns[0].inferred_type, InferredType::Number);
}

// =============================================================================
// Type Inference Tests
// =============================================================================

#[test]
fn test_single_text_value_forces_text() {
    let content = "v\n1\n2\n3\n4\nfive\n";
    let file = create_test_file(content);

    let outcome = Profiler::new().profile_file(file.path()).expect("Profiling failed");
    let v = &outcome.report.columns[0];

    assert_eq!(v.inferred_type, InferredType::Text);
    assert!(v.numeric.is_none());
    assert_eq!(v.unique, 5);
}

#[test]
fn test_missing_tokens_do_not_block_numeric() {
    let content = "v\n1.5\nNA\n n/a \nnull\nNone\nNaN\n2.5\n";
    let file = create_test_file(content);

    let outcome = Profiler::new().profile_file(file.path()).expect("Profiling failed");
    let v = &outcome.report.columns[0];

    assert_eq!(v.inferred_type, InferredType::Number);
    assert_eq!(v.missing, 5);
    assert_eq!(v.count, 2);
    assert_eq!(v.numeric.unwrap().mean, 2.0);
}

// =============================================================================
// Edge Cases
// =============================================================================

#[test]
fn test_header_only_file() {
    let file = create_test_file("a,b\n");

    let outcome = Profiler::new().profile_file(file.path()).expect("Profiling failed");
    let report = &outcome.report;

    assert_eq!(report.n_rows, 0);
    assert_eq!(report.n_cols, 2);
    for column in &report.columns {
        assert_eq!(column.missing_pct, 0.0);
        assert_eq!(column.inferred_type, InferredType::Text);
        assert!(column.numeric.is_none());
    }
}

#[test]
fn test_empty_file_is_error() {
    let file = create_test_file("");

    let result = Profiler::new().profile_file(file.path());

    assert!(matches!(result, Err(ProfileError::EmptyData(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let result = Profiler::new().profile_file("/nonexistent/path/data.csv");

    assert!(matches!(result, Err(ProfileError::Io { .. })));
}

#[test]
fn test_ragged_rows_are_missing() {
    let content = "a,b,c\n1,x,y\n2\n3,z,w\n";
    let file = create_test_file(content);

    let outcome = Profiler::new().profile_file(file.path()).expect("Profiling failed");
    let b = outcome.report.get_column("b").unwrap();

    assert_eq!(b.missing, 1);
    assert_eq!(b.count + b.missing, 3);
}

#[test]
fn test_quoted_fields() {
    let content = "name,note\n\"Smith, J\",\"said \"\"hi\"\"\"\n\"Doe, A\",ok\n";
    let file = create_test_file(content);

    let outcome = Profiler::new().profile_file(file.path()).expect("Profiling failed");
    let name = outcome.report.get_column("name").unwrap();

    assert_eq!(name.top_k.as_ref().unwrap()[0].value, "Smith, J");
}

#[test]
fn test_single_row_file() {
    let content = "a,b,c\n7,x,\n";
    let file = create_test_file(content);

    let outcome = Profiler::new().profile_file(file.path()).expect("Profiling failed");
    let report = &outcome.report;
    assert_eq!(report.n_rows, 1);

    let a = report.get_column("a").unwrap();
    assert_eq!(a.inferred_type, InferredType::Number);
    assert_eq!(a.missing_pct, 0.0);
    assert_eq!(a.unique, a.count);
    let stats = a.numeric.unwrap();
    assert_eq!(stats.min, 7.0);
    assert_eq!(stats.max, 7.0);
    assert_eq!(stats.mean, 7.0);

    let b = report.get_column("b").unwrap();
    assert_eq!(b.missing_pct, 0.0);
    assert_eq!(b.unique, 1);
    assert_eq!(b.count, 1);

    let c = report.get_column("c").unwrap();
    assert_eq!(c.missing_pct, 100.0);
    assert_eq!(c.inferred_type, InferredType::Text);
}

#[test]
fn test_all_unique_text_column_keeps_first_seen() {
    let content = "id\nq\nw\ne\nr\nt\ny\nu\n";
    let file = create_test_file(content);

    let outcome = Profiler::new().profile_file(file.path()).expect("Profiling failed");
    let id = &outcome.report.columns[0];

    assert_eq!(id.unique, 7);
    let top = id.top_k.as_ref().unwrap();
    assert_eq!(top.len(), 5);
    assert!(top.iter().all(|v| v.count == 1));
    let values: Vec<&str> = top.iter().map(|v| v.value.as_str()).collect();
    assert_eq!(values, vec!["q", "w", "e", "r", "t"]);
}

#[test]
fn test_values_near_f64_max_survive_json() {
    let content = "big\n1e308\n1e308\n";
    let file = create_test_file(content);

    let outcome = Profiler::new().profile_file(file.path()).expect("Profiling failed");
    let big = outcome.report.get_column("big").unwrap();
    assert_eq!(big.numeric.unwrap().mean, 1e308);

    let json = to_json(&outcome.report).unwrap();
    assert!(!json.contains("null"));
}

#[test]
fn test_overflowing_literal_column_is_text() {
    let content = "v\n1e999\n2\n";
    let file = create_test_file(content);

    let outcome = Profiler::new().profile_file(file.path()).expect("Profiling failed");
    let v = outcome.report.get_column("v").unwrap();

    assert_eq!(v.inferred_type, InferredType::Text);
    assert!(v.numeric.is_none());
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[test]
fn test_custom_missing_and_top_k() {
    let content = "code\nA\nB\n-\nC\nA\n-\n";
    let file = create_test_file(content);

    let config = ProfilerConfig::default()
        .with_missing(MissingVocabulary::default().with_tokens(["-"]))
        .with_top_k(2)
        .with_parser(ParserConfig::default().with_delimiter(b','));
    let outcome = Profiler::with_config(config)
        .profile_file(file.path())
        .expect("Profiling failed");
    let code = &outcome.report.columns[0];

    assert_eq!(code.missing, 2);
    assert_eq!(code.unique, 3);
    let top: Vec<&str> = code.top_k.as_ref().unwrap().iter().map(|v| v.value.as_str()).collect();
    assert_eq!(top, vec!["A", "B"]);
}

// =============================================================================
// Rendering Tests
// =============================================================================

#[test]
fn test_json_and_markdown_render_from_file() {
    let content = "a,b\n1,x\n2,x\n,y\n";
    let file = create_test_file(content);

    let outcome = Profiler::new().profile_file(file.path()).expect("Profiling failed");

    let json: serde_json::Value = serde_json::from_str(&to_json(&outcome.report).unwrap()).unwrap();
    assert_eq!(json["n_rows"], 3);
    assert_eq!(json["columns"][0]["type"], "number");
    assert_eq!(json["columns"][0]["min"], 1.0);
    assert_eq!(json["columns"][1]["top_k"][0]["value"], "x");
    assert_eq!(json["columns"][1]["top_k"][0]["count"], 2);
    assert!(json.get("timing_ms").is_none());

    let md = render_markdown(
        &outcome.report,
        &MarkdownOptions::default().with_source(outcome.source.file.clone()),
    );
    assert!(md.contains("| a | number | 1 | 33.3% | 2 | min=1, max=2, mean=1.5 |"));
    assert!(md.contains("| b | text | 0 | 0.0% | 2 | top: x(2), y(1) |"));
}

#[test]
fn test_profiling_twice_gives_identical_json() {
    let content = "a,b\n1,x\n2,y\n";
    let file = create_test_file(content);
    let profiler = Profiler::new();

    let first = profiler.profile_file(file.path()).unwrap();
    let second = profiler.profile_file(file.path()).unwrap();

    assert_eq!(
        to_json(&first.report).unwrap(),
        to_json(&second.report).unwrap()
    );
}
