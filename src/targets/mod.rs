// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
Classification and validation of free-form scan targets.

Operators paste targets as text: single IPs, CIDR blocks, IPv4 ranges,
IPv6 addresses (optionally bracketed with a port, with a zone ID or a
prefix length) and domain names, one or many per line. This module splits
that text into tokens, decides which grammar each token belongs to and
reports the ones that fit none.

Supported formats:
- IPv4: `10.0.0.1`, optionally with a port: `10.0.0.1:8080`
- CIDR: `10.0.0.0/24`
- Range: `10.0.0.1-10.0.0.50` (full form only)
- IPv6: `2001:db8::1`, `[2001:db8::1]:443`, `fe80::1%eth0`, `2001:db8::/32`
- Domain: `example.com`, `example.com:8080`

Nothing is resolved, deduplicated or expanded here. Every function is pure;
valid tokens produce no output and failing ones a [TargetError].
*/

mod addresses;
mod batch;
mod classify;
mod domain;
mod ipv6;
mod strings;
mod summary;

use std::{error, fmt, net::Ipv4Addr};
use strings::*;

pub use addresses::{is_valid_ipv4, is_valid_octet, parse_cidr, parse_ip_range, parse_port, Ipv4Range};
pub use batch::{format_validation_errors, split_targets, validate_targets, ValidationError};
pub use classify::{check_target, classify, looks_like_ipv6, validate_single_target, Classification};
pub use domain::{check_domain, is_valid_domain, DomainFault};
pub use ipv6::{is_valid_ipv6, validate_ipv6};
pub use summary::{summarize_targets, TargetSummary};

pub(crate) const IPV4_BITS: u8 = 32;
pub(crate) const IPV6_BITS: u8 = 128;
pub(crate) const IPV4_OCTETS: usize = 4;
pub(crate) const IPV6_GROUPS: usize = 8;
pub(crate) const IPV6_MAX_LEN: usize = 45; // longest textual form, incl. embedded IPv4
pub(crate) const HEXTET_MAX_LEN: usize = 4;
pub(crate) const LABEL_MAX_LEN: usize = 63;
pub(crate) const PORT_MIN: u16 = 1;

#[rustfmt::skip]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TargetError {
    /// CIDR without exactly one slash
    CidrFormat,
    CidrMask(String),
    /// fewer than 4 octets; carries the zero-padded literal to suggest
    CidrIncomplete { missing: usize, suggestion: String },
    CidrOctetCount(usize),
    /// `pos` is 1-based
    CidrOctet { pos: usize, octet: String },
    RangeFormat,
    RangeStart(String),
    RangeEnd(String),
    RangeOrder(Ipv4Addr, Ipv4Addr),
    Ipv6Bracket,
    Ipv6Trailing,
    Ipv6Port(String),
    Ipv6Cidr,
    Ipv6Mask(String),
    Ipv6Format,
    Domain(DomainFault),
    /// matches none of the target grammars
    Unrecognized,
}

impl fmt::Display for TargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetError::CidrFormat => f.write_str(ERR_CIDR_FMT),
            TargetError::CidrMask(mask) => {
                write!(f, "{ERR_CIDR_MASK}: {mask}")
            }
            TargetError::CidrIncomplete { missing, suggestion } => {
                write!(f, "{ERR_CIDR_INCOMPLETE} {missing} octet(s); {ERR_CIDR_SUGGEST}: {suggestion}")
            }
            TargetError::CidrOctetCount(count) => {
                write!(f, "{ERR_CIDR_OCTETS} {count}")
            }
            TargetError::CidrOctet { pos, octet } => {
                write!(f, "octet {pos} '{octet}' {ERR_CIDR_OCTET}")
            }
            TargetError::RangeFormat => f.write_str(ERR_RNG_FMT),
            TargetError::RangeStart(beg) => {
                write!(f, "{ERR_START}: '{beg}'")
            }
            TargetError::RangeEnd(end) => {
                write!(f, "{ERR_END}: '{end}'")
            }
            TargetError::RangeOrder(beg, end) => {
                write!(f, "{ERR_RNG_ORDER} ({beg} > {end})")
            }
            TargetError::Ipv6Bracket => f.write_str(ERR_V6_BRACKET),
            TargetError::Ipv6Trailing => f.write_str(ERR_V6_TRAILING),
            TargetError::Ipv6Port(port) => {
                write!(f, "{ERR_V6_PORT}: {port}")
            }
            TargetError::Ipv6Cidr => f.write_str(ERR_V6_CIDR),
            TargetError::Ipv6Mask(mask) => {
                write!(f, "{ERR_V6_MASK}: {mask}")
            }
            TargetError::Ipv6Format => f.write_str(ERR_V6_FMT),
            TargetError::Domain(fault) => {
                write!(f, "{ERR_DOMAIN}: {fault}")
            }
            TargetError::Unrecognized => f.write_str(ERR_UNRECOGNIZED),
        }
    }
}

impl error::Error for TargetError {}
