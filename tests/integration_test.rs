// Integration tests for Tally

use std::fs;
use std::path::Path;
use tally::config::{OutputFormat, TokenizerConfig};
use tally::report::render_top_words;
use tally::{count_word_frequencies, evaluate, factorial, Config, Error, Evaluator, ExprError, Value};
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write fixture");
    path
}

// ============================================================================
// Factorial
// ============================================================================

#[test]
fn test_factorial_known_values() {
    assert_eq!(factorial(0).unwrap(), 1);
    assert_eq!(factorial(1).unwrap(), 1);
    assert_eq!(factorial(5).unwrap(), 120);
}

#[test]
fn test_factorial_negative() {
    assert!(matches!(factorial(-1), Err(Error::InvalidArgument(_))));
}

// ============================================================================
// Word counting
// ============================================================================

#[test]
fn test_word_count_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "sample.txt", "The cat sat. The CAT sat!");

    let freqs = count_word_frequencies(&path, &TokenizerConfig::default()).unwrap();
    let mut counts: Vec<(String, usize)> = freqs.to_map().into_iter().collect();
    counts.sort();

    assert_eq!(
        counts,
        vec![
            ("cat".to_string(), 2),
            ("sat".to_string(), 2),
            ("the".to_string(), 2)
        ]
    );
}

#[test]
fn test_word_count_missing_file() {
    let result = count_word_frequencies(
        Path::new("/definitely/not/here.txt"),
        &TokenizerConfig::default(),
    );
    match result {
        Err(Error::FileNotFound(path)) => {
            assert_eq!(path, Path::new("/definitely/not/here.txt"));
        }
        other => panic!("Expected FileNotFound, got {:?}", other),
    }
}

#[test]
fn test_word_count_multiline_document() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "doc.txt",
        "It was the best of times,\nit was the worst of times;\n\"it was\" (the age) of wisdom...\n",
    );

    let freqs = count_word_frequencies(&path, &TokenizerConfig::default()).unwrap();
    let top = freqs.most_common(3);

    assert_eq!(top[0].word, "it");
    assert_eq!(top[0].count, 3);
    assert_eq!(top[1].word, "was");
    assert_eq!(top[2].word, "the");
    assert_eq!(freqs.get("times"), 2);
    assert_eq!(freqs.get("wisdom"), 1);
}

#[test]
fn test_config_driven_report() {
    let dir = TempDir::new().unwrap();
    let text = write_file(&dir, "shout.txt", "Go GO go! Stop.");
    let config_path = write_file(
        &dir,
        "tally.toml",
        "[report]\ntop_n = 1\nformat = \"json\"\n\n[tokenizer]\nlowercase = false\n",
    );

    let config = Config::load(&config_path).unwrap();
    assert_eq!(config.report.format, OutputFormat::Json);

    let freqs = count_word_frequencies(&text, &config.tokenizer).unwrap();
    assert_eq!(freqs.get("Go"), 1);
    assert_eq!(freqs.get("go"), 1);
    assert_eq!(freqs.get("GO"), 1);

    let out = render_top_words(&freqs, config.report.top_n, config.report.format).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["words"].as_array().unwrap().len(), 1);
    assert_eq!(json["words"][0]["word"], "Go");
    assert_eq!(json["total_words"], 4);
}

// ============================================================================
// Expression evaluation
// ============================================================================

#[test]
fn test_evaluate_arithmetic() {
    assert_eq!(evaluate("2 + 2").unwrap(), Value::Int(4));
    assert_eq!(evaluate("(1 + 2) * 3 - 4 / 2").unwrap(), Value::Float(7.0));
    assert_eq!(evaluate("2 ** 10 % 1000").unwrap(), Value::Int(24));
}

#[test]
fn test_evaluate_refuses_code_execution() {
    let err = evaluate("__import__('os').system('rm -rf /')").unwrap_err();
    assert!(matches!(err, ExprError::UnexpectedChar { ch: '_', pos: 0 }));
}

#[test]
fn test_evaluator_depth_limit() {
    let deep = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    assert!(matches!(evaluate(&deep), Err(ExprError::TooDeep { max: 64, .. })));
    assert_eq!(
        Evaluator::new().with_max_depth(100).evaluate(&deep).unwrap(),
        Value::Int(1)
    );
}
