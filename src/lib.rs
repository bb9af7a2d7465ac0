// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validation of operator-supplied scan target lists.
//!
//! ```
//! use targetcheck::{format_validation_errors, validate_single_target, validate_targets};
//!
//! assert_eq!(validate_single_target("10.0.0.0/24"), None);
//! assert!(validate_single_target("10.0/24").unwrap().contains("10.0.0.0/24"));
//!
//! let errors = validate_targets("10.0.0.1\n# comment\nbad_domain!!\n10.0.0.2,10.0.0.3");
//! assert_eq!(errors.len(), 1);
//! assert!(format_validation_errors(&errors).starts_with("line 3 'bad_domain!!'"));
//! ```

pub mod targets;

pub use targets::{
    check_target, classify, format_validation_errors, split_targets, summarize_targets,
    validate_single_target, validate_targets, Classification, TargetError, TargetSummary,
    ValidationError,
};
