// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{classify::check_target, strings::*, TargetError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A target that failed validation. `line` is 1-based.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub line: usize,
    pub target: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{FMT_LINE} {} '{}': {}", self.line, self.target, self.message)
    }
}

/**
Split one line of input into individual targets.

Exactly one separator is used per line, the first that applies:
1. `,` if the line has one
2. `;` if the line has one
3. runs of whitespace, but only if the line has a space and no `:` at all
4. otherwise the whole line is a single target

The colon rule keeps `host:port` and IPv6 tokens intact, which also means
`10.0.0.1:80 10.0.0.2` stays one (invalid) target. Use commas there.

Pieces are trimmed and empty ones dropped.
*/
pub fn split_targets(line: &str) -> Vec<&str> {
    let pieces: Vec<&str> = if line.contains(COMMA) {
        line.split(COMMA).collect()
    } else if line.contains(SEMICOLON) {
        line.split(SEMICOLON).collect()
    } else if line.contains(SPACE) && !line.contains(COLON) {
        line.split_whitespace().collect()
    } else {
        vec![line]
    };

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|t: &&str| !t.is_empty())
        .collect()
}

/// All targets of a multi-line text with their 1-based line numbers.
/// Blank lines and lines starting with `#` are skipped.
pub(crate) fn targets_by_line(text: &str) -> impl Iterator<Item = (usize, &str)> + '_ {
    text.lines()
        .enumerate()
        .map(|(i, line): (usize, &str)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with(COMMENT))
        .flat_map(|(num, line): (usize, &str)| {
            split_targets(line).into_iter().map(move |t: &str| (num, t))
        })
}

/**
Validate every target in a multi-line text.

Returns one [ValidationError] per failing target in input order. An empty
list means everything is valid. A bad target never stops the rest of the
input from being checked.
*/
pub fn validate_targets(text: &str) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();
    let mut checked: usize = 0;

    for (line, target) in targets_by_line(text) {
        checked += 1;
        if let Err(e) = check_target(target) {
            debug!(line, token = target, error = %e, "invalid target");
            errors.push(ValidationError::new(line, target, &e));
        }
    }

    debug!(checked, invalid = errors.len(), "validated targets");
    errors
}

impl ValidationError {
    pub(crate) fn new(line: usize, target: &str, err: &TargetError) -> Self {
        Self {
            line,
            target: target.to_string(),
            message: err.to_string(),
        }
    }
}

/**
Render validation errors for humans.

- no errors: empty string
- one error: `line 3 'bad_domain!!': <message>`
- several: a `found N invalid targets:` header, then one error per line
*/
pub fn format_validation_errors(errors: &[ValidationError]) -> String {
    match errors {
        [] => String::new(),
        [e] => e.to_string(),
        _ => {
            let lines: Vec<String> = errors.iter().map(ToString::to_string).collect();
            format!("{FMT_FOUND} {} {FMT_ERRORS}:\n{}", errors.len(), lines.join("\n"))
        }
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    const MIXED: &str = "10.0.0.1\n# comment\nbad_domain!!\n10.0.0.2,10.0.0.3";

    #[rustfmt::skip]
    #[test]
    fn test_split_targets() {
        let tests: Vec<(&str, Vec<&str>)> = vec![
            ("10.0.0.1",                        vec!["10.0.0.1"]),
            ("10.0.0.1, 10.0.0.2 ,10.0.0.3",    vec!["10.0.0.1", "10.0.0.2", "10.0.0.3"]),
            ("a.com;b.com; ;c.com",             vec!["a.com", "b.com", "c.com"]),
            ("a.com  b.com\tc.com",             vec!["a.com", "b.com", "c.com"]),
            ("a.com;b.com,c.com",               vec!["a.com;b.com", "c.com"]),
            ("[::1]:80, 10.0.0.1:22",           vec!["[::1]:80", "10.0.0.1:22"]),
            (",,,",                             vec![]),
        ];
        for (line, expected) in tests {
            assert_eq!(split_targets(line), expected, "Failed: '{line}'");
        }
    }

    #[test]
    fn test_split_colon_disables_spaces() {
        // a single colon anywhere keeps the line whole
        assert_eq!(split_targets("10.0.0.1:80 10.0.0.2"), vec!["10.0.0.1:80 10.0.0.2"]);
        assert_eq!(split_targets("::1 ::2"), vec!["::1 ::2"]);
        assert!(!validate_targets("10.0.0.1:80 10.0.0.2").is_empty());
    }

    #[test]
    fn test_validate_mixed() {
        let errors: Vec<ValidationError> = validate_targets(MIXED);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line, 3);
        assert_eq!(errors[0].target, "bad_domain!!");
    }

    #[test]
    fn test_validate_keeps_order_and_lines() {
        let text: &str = "\n\n10.0/24, example.com, a.1\r\n  # x\n10.0.0.9-10.0.0.1";
        let errors: Vec<ValidationError> = validate_targets(text);
        let got: Vec<(usize, &str)> = errors.iter().map(|e| (e.line, e.target.as_str())).collect();
        assert_eq!(got, vec![(3, "10.0/24"), (3, "a.1"), (5, "10.0.0.9-10.0.0.1")]);
        assert!(errors[0].message.contains("10.0.0.0/24"));
    }

    #[test]
    fn test_validate_all_good() {
        let text: &str = "10.0.0.1 10.0.0.2\nexample.com:8080\n[2001:db8::1]:443\n\n# done";
        assert!(validate_targets(text).is_empty());
        assert!(validate_targets("").is_empty());
    }

    #[test]
    fn test_comment_token_inside_line() {
        assert!(validate_targets("10.0.0.1, #10.0.0.999").is_empty());
    }

    #[test]
    fn test_format_none() {
        assert_eq!(format_validation_errors(&[]), "");
    }

    #[test]
    fn test_format_single() {
        let errors: Vec<ValidationError> = validate_targets(MIXED);
        let out: String = format_validation_errors(&errors);
        assert!(out.starts_with("line 3 'bad_domain!!': "), "{out}");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn test_format_many() {
        let errors: Vec<ValidationError> = validate_targets("bad..com\n-x.com");
        let out: String = format_validation_errors(&errors);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "found 2 invalid targets:");
        assert!(lines[1].starts_with("line 1 'bad..com': "));
        assert!(lines[2].starts_with("line 2 '-x.com': "));
    }

    #[test]
    fn test_json_round_trip() {
        let errors: Vec<ValidationError> = validate_targets(MIXED);
        let json: String = serde_json::to_string(&errors).unwrap();
        assert!(json.contains(r#""line":3"#), "{json}");
        assert!(json.contains(r#""target":"bad_domain!!""#), "{json}");

        let back: Vec<ValidationError> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, errors);
    }
}
