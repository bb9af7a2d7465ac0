// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    addresses::{parse_cidr, parse_ip_range, parse_ipv4, parse_port, Ipv4Range},
    domain::{check_domain, DomainFault},
    ipv6::validate_ipv6,
    strings::*,
    TargetError,
};
use ipnet::Ipv4Net;
use serde::Serialize;
use std::net::Ipv4Addr;
use tracing::trace;

/// Which grammar a single target token belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum Classification {
    Blank,
    Comment,
    Ipv4,
    Ipv6,
    Cidr,
    IpRange,
    Domain,
    /// fails every grammar
    Invalid,
}

/// A validated target together with whatever was parsed out of it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Parsed {
    Blank,
    Comment,
    Ipv4(Ipv4Addr),
    Ipv6,
    Cidr(Ipv4Net),
    IpRange(Ipv4Range),
    Domain,
}

impl Parsed {
    pub fn classification(&self) -> Classification {
        match self {
            Parsed::Blank => Classification::Blank,
            Parsed::Comment => Classification::Comment,
            Parsed::Ipv4(_) => Classification::Ipv4,
            Parsed::Ipv6 => Classification::Ipv6,
            Parsed::Cidr(_) => Classification::Cidr,
            Parsed::IpRange(_) => Classification::IpRange,
            Parsed::Domain => Classification::Domain,
        }
    }
}

/**
Whether a token must be read as IPv6: it starts with `[`, carries a zone
ID (`%`) or has two or more colons. Decided before anything else, since
`host:port` and IPv6 literals share the colon.
*/
pub fn looks_like_ipv6(token: &str) -> bool {
    token.starts_with(BRACKET_OPEN) || token.contains(ZONE) || token.matches(COLON).count() >= 2
}

/// Drop a trailing `:<port>` if what follows the last colon is a valid port.
pub(crate) fn strip_port(token: &str) -> &str {
    match token.rsplit_once(COLON) {
        Some((host, port)) if parse_port(port).is_some() => host,
        _ => token,
    }
}

/**
Pick the grammar that claims a (port-stripped, non-IPv6) host. Order matters:
- anything with `/` is a CIDR
- `a-b` where `a` is an IPv4 literal is a range; `my-host.com` stays a domain
- an IPv4 literal
- everything else falls back to the domain grammar
*/
fn recognize(host: &str) -> Classification {
    if host.contains(SLASH) {
        return Classification::Cidr;
    }
    if let Some((beg, end)) = host.split_once(DASH) {
        if !end.contains(DASH) && parse_ipv4(beg.trim()).is_some() {
            return Classification::IpRange;
        }
    }
    if parse_ipv4(host).is_some() {
        return Classification::Ipv4;
    }
    Classification::Domain
}

pub(crate) fn parse_target(token: &str) -> Result<Parsed, TargetError> {
    let token: &str = token.trim();
    if token.is_empty() {
        return Ok(Parsed::Blank);
    }
    if token.starts_with(COMMENT) {
        return Ok(Parsed::Comment);
    }

    if looks_like_ipv6(token) {
        return validate_ipv6(token).map(|_| Parsed::Ipv6);
    }

    let host: &str = strip_port(token);
    match recognize(host) {
        Classification::Cidr => parse_cidr(host).map(Parsed::Cidr),
        Classification::IpRange => parse_ip_range(host).map(Parsed::IpRange),
        Classification::Ipv4 => parse_ipv4(host).map(Parsed::Ipv4).ok_or(TargetError::Unrecognized),
        _ => match check_domain(host) {
            Ok(()) => Ok(Parsed::Domain),
            Err(fault) => Err(domain_error(host, fault)),
        },
    }
}

/**
The domain grammar is the fallback for everything, so only report its
details for hosts that at least look like a name (a dot and a letter).
`bad_domain!!` or `10.0.0.300` get the generic message instead.
*/
fn domain_error(host: &str, fault: DomainFault) -> TargetError {
    let name_like: bool = host.contains(DOT) && host.bytes().any(|b: u8| b.is_ascii_alphabetic());
    match name_like {
        true => TargetError::Domain(fault),
        false => TargetError::Unrecognized,
    }
}

/**
Validate a single target token and return its [Classification].

Surrounding whitespace is ignored. Blank tokens and `#` comments are
accepted as [Classification::Blank] and [Classification::Comment].
*/
pub fn check_target(token: &str) -> Result<Classification, TargetError> {
    let result: Result<Classification, TargetError> =
        parse_target(token).map(|p: Parsed| p.classification());
    trace!(token = token.trim(), result = ?result, "classified target");
    result
}

/// Classify a token; anything that fails validation is [Classification::Invalid].
pub fn classify(token: &str) -> Classification {
    check_target(token).unwrap_or(Classification::Invalid)
}

/// Validate a single target. `None` means valid, otherwise a human-readable reason.
pub fn validate_single_target(token: &str) -> Option<String> {
    check_target(token).err().map(|e: TargetError| e.to_string())
}

/* -------------------------------------------------------------------------- */
