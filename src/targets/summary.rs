// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    batch::targets_by_line,
    classify::{parse_target, Parsed},
};
use ipnet::Ipv4Net;
use serde::Serialize;
use std::fmt;

/**
Counts of the targets in a batch, by classification.

`ipv4_addresses` is the number of IPv4 addresses covered by the valid IPv4,
CIDR and range targets, computed without enumerating them. Overlapping
targets are counted twice.
*/
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct TargetSummary {
    pub ipv4: usize,
    pub ipv6: usize,
    pub cidr: usize,
    pub ip_range: usize,
    pub domain: usize,
    pub invalid: usize,
    pub ipv4_addresses: u64,
}

impl TargetSummary {
    /// Number of targets that passed validation.
    pub fn valid(&self) -> usize {
        self.ipv4 + self.ipv6 + self.cidr + self.ip_range + self.domain
    }

    pub fn total(&self) -> usize {
        self.valid() + self.invalid
    }

    fn add(&mut self, parsed: Parsed) {
        match parsed {
            Parsed::Blank | Parsed::Comment => {}
            Parsed::Ipv4(_) => {
                self.ipv4 += 1;
                self.ipv4_addresses = self.ipv4_addresses.saturating_add(1);
            }
            Parsed::Ipv6 => self.ipv6 += 1,
            Parsed::Cidr(net) => {
                self.cidr += 1;
                self.ipv4_addresses = self.ipv4_addresses.saturating_add(net_len(net));
            }
            Parsed::IpRange(range) => {
                self.ip_range += 1;
                self.ipv4_addresses = self.ipv4_addresses.saturating_add(range.len());
            }
            Parsed::Domain => self.domain += 1,
        }
    }
}

impl fmt::Display for TargetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} targets: {} valid, {} invalid (ipv4 {}, ipv6 {}, cidr {}, range {}, domain {}); {} IPv4 addresses",
            self.total(),
            self.valid(),
            self.invalid,
            self.ipv4,
            self.ipv6,
            self.cidr,
            self.ip_range,
            self.domain,
            self.ipv4_addresses,
        )
    }
}

/// Number of addresses in a block, network and broadcast included.
fn net_len(net: Ipv4Net) -> u64 {
    u64::from(u32::from(net.broadcast()) - u32::from(net.network())) + 1
}

/// Summarize a multi-line target text. Tokenized the same way as
/// [validate_targets](super::validate_targets).
pub fn summarize_targets(text: &str) -> TargetSummary {
    let mut summary: TargetSummary = TargetSummary::default();
    for (_, target) in targets_by_line(text) {
        match parse_target(target) {
            Ok(parsed) => summary.add(parsed),
            Err(_) => summary.invalid += 1,
        }
    }
    summary
}

/* -------------------------------------------------------------------------- */
