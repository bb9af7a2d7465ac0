// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{strings::*, LABEL_MAX_LEN};
use std::fmt;

/// Why a string is not a domain name. Label positions are 1-based.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DomainFault {
    /// starts or ends with `.` or `-`
    Edge,
    DoubleDot,
    TooFewLabels,
    LabelLength(usize),
    LabelChars(usize),
    LabelHyphen(usize),
    Tld,
}

impl fmt::Display for DomainFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainFault::Edge => f.write_str(ERR_DOM_EDGE),
            DomainFault::DoubleDot => f.write_str(ERR_DOM_DOTS),
            DomainFault::TooFewLabels => f.write_str(ERR_DOM_LABELS),
            DomainFault::LabelLength(i) => write!(f, "label {i} {ERR_DOM_LEN}"),
            DomainFault::LabelChars(i) => write!(f, "label {i} {ERR_DOM_CHARS}"),
            DomainFault::LabelHyphen(i) => write!(f, "label {i} {ERR_DOM_HYPHEN}"),
            DomainFault::Tld => f.write_str(ERR_DOM_TLD),
        }
    }
}

/**
Check a domain name against a hostname-style grammar. No DNS lookups.

- no leading/trailing `.` or `-`, no `..`
- at least two labels
- each label is 1-63 characters of `[A-Za-z0-9-]`, not starting or ending with `-`
- the last label (TLD) is at least 2 letters, letters only

Single-character labels such as `m.example.com` are fine.
*/
pub fn check_domain(domain: &str) -> Result<(), DomainFault> {
    if domain.starts_with([DOT, DASH]) || domain.ends_with([DOT, DASH]) {
        return Err(DomainFault::Edge);
    }
    if domain.contains("..") {
        return Err(DomainFault::DoubleDot);
    }

    let labels: Vec<&str> = domain.split(DOT).collect();
    if labels.len() < 2 {
        return Err(DomainFault::TooFewLabels);
    }

    for (i, label) in labels.iter().enumerate() {
        let pos: usize = i + 1;
        if label.is_empty() || label.len() > LABEL_MAX_LEN {
            return Err(DomainFault::LabelLength(pos));
        }
        if label.starts_with(DASH) || label.ends_with(DASH) {
            return Err(DomainFault::LabelHyphen(pos));
        }
        if !label.bytes().all(|b: u8| b.is_ascii_alphanumeric() || b == DASH as u8) {
            return Err(DomainFault::LabelChars(pos));
        }
    }

    match labels.last() {
        Some(tld) if tld.len() >= 2 && tld.bytes().all(|b: u8| b.is_ascii_alphabetic()) => Ok(()),
        _ => Err(DomainFault::Tld),
    }
}

/// Whether `domain` is a syntactically valid domain name.
pub fn is_valid_domain(domain: &str) -> bool {
    check_domain(domain).is_ok()
}

/* -------------------------------------------------------------------------- */
