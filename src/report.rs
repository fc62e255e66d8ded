// Rendering of word and factorial results

use crate::config::OutputFormat;
use crate::error::Result;
use crate::words::{WordCount, WordFrequencies};
use serde::Serialize;

/// JSON shape of a word report
#[derive(Debug, Serialize)]
struct WordReport<'a> {
    top: usize,
    total_words: usize,
    unique_words: usize,
    words: Vec<WordCount<'a>>,
}

/// Render the `top_n` most common words in the requested format
pub fn render_top_words(
    freqs: &WordFrequencies,
    top_n: usize,
    format: OutputFormat,
) -> Result<String> {
    let words = freqs.most_common(top_n);
    match format {
        OutputFormat::Text => {
            let mut out = format!("Top {} words:\n", top_n);
            for entry in &words {
                out.push_str(&format!("  {}: {}\n", quote(entry.word), entry.count));
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let report = WordReport {
                top: top_n,
                total_words: freqs.total(),
                unique_words: freqs.len(),
                words,
            };
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Render a factorial result line
pub fn render_factorial(n: i64, result: u128) -> String {
    format!("{}! = {}", n, result)
}

/// Quote a word the way a Python repr would.
///
/// Single quotes are preferred; double quotes are used when the word holds a
/// single quote but no double quote.
pub fn quote(word: &str) -> String {
    let delim = if word.contains('\'') && !word.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(word.len() + 2);
    out.push(delim);
    for c in word.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TokenizerConfig;
    use crate::words::count_text;

    #[test]
    fn test_render_text() {
        let freqs = count_text("The cat sat. The CAT sat! A dog.", &TokenizerConfig::default());
        let out = render_top_words(&freqs, 2, OutputFormat::Text).unwrap();
        assert_eq!(out, "Top 2 words:\n  'the': 2\n  'cat': 2\n");
    }

    #[test]
    fn test_render_text_header_uses_requested_n() {
        let freqs = count_text("solo", &TokenizerConfig::default());
        let out = render_top_words(&freqs, 5, OutputFormat::Text).unwrap();
        assert_eq!(out, "Top 5 words:\n  'solo': 1\n");
    }

    #[test]
    fn test_render_json() {
        let freqs = count_text("b a b", &TokenizerConfig::default());
        let out = render_top_words(&freqs, 5, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["top"], 5);
        assert_eq!(value["total_words"], 3);
        assert_eq!(value["unique_words"], 2);
        assert_eq!(value["words"][0]["word"], "b");
        assert_eq!(value["words"][0]["count"], 2);
        assert_eq!(value["words"][1]["word"], "a");
    }

    #[test]
    fn test_render_factorial() {
        assert_eq!(render_factorial(5, 120), "5! = 120");
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("cat"), "'cat'");
        assert_eq!(quote("don't"), "\"don't\"");
        assert_eq!(quote("say\"don't"), "'say\"don\\'t'");
        assert_eq!(quote("a\\b"), "'a\\\\b'");
    }
}
