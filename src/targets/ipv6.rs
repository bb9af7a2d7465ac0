// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    addresses::{parse_decimal, parse_port},
    strings::*,
    TargetError, HEXTET_MAX_LEN, IPV6_BITS, IPV6_GROUPS, IPV6_MAX_LEN,
};

/**
Validate an IPv6-shaped target.

Accepted decorations around the address itself:
- brackets with an optional port: `[2001:db8::1]:443`
- a zone ID, discarded unvalidated: `fe80::1%eth0`
- a prefix length in `0..=128`: `2001:db8::/32`

The remaining address is checked with [is_valid_ipv6].
*/
pub fn validate_ipv6(target: &str) -> Result<(), TargetError> {
    let mut addr: &str = target;

    if let Some(inner) = target.strip_prefix(BRACKET_OPEN) {
        let Some((host, rest)) = inner.split_once(BRACKET_CLOSE) else {
            return Err(TargetError::Ipv6Bracket);
        };
        if !rest.is_empty() {
            let Some(port) = rest.strip_prefix(COLON) else {
                return Err(TargetError::Ipv6Trailing);
            };
            if parse_port(port).is_none() {
                return Err(TargetError::Ipv6Port(port.into()));
            }
        }
        addr = host;
    }

    if let Some((host, _zone)) = addr.split_once(ZONE) {
        addr = host;
    }

    if addr.contains(SLASH) {
        let parts: Vec<&str> = addr.split(SLASH).collect();
        if parts.len() != 2 {
            return Err(TargetError::Ipv6Cidr);
        }
        match parse_decimal(parts[1]) {
            Some(mask) if mask <= IPV6_BITS as u32 => {}
            _ => return Err(TargetError::Ipv6Mask(parts[1].into())),
        }
        addr = parts[0];
    }

    match is_valid_ipv6(addr) {
        true => Ok(()),
        false => Err(TargetError::Ipv6Format),
    }
}

/**
Grammar check of a bare IPv6 address (no brackets, zone or prefix).

- at most 45 characters, only hex digits and colons
- at most one `::`; a run of three colons counts as two
- with `::`: at most 7 groups on both sides combined, each 0-4 hex digits
- without `::`: exactly 8 groups of 1-4 hex digits

Embedded dotted IPv4 tails (`::ffff:1.2.3.4`) are not accepted.
*/
pub fn is_valid_ipv6(addr: &str) -> bool {
    if addr.is_empty() || addr.len() > IPV6_MAX_LEN {
        return false;
    }
    if !addr.bytes().all(|b: u8| b.is_ascii_hexdigit() || b == COLON as u8) {
        return false;
    }

    // overlapping count, so ":::" is two markers
    let markers: usize = addr
        .as_bytes()
        .windows(2)
        .filter(|w: &&[u8]| *w == COMPRESSED.as_bytes())
        .count();

    match markers {
        0 => {
            let groups: Vec<&str> = addr.split(COLON).collect();
            groups.len() == IPV6_GROUPS
                && groups.iter().all(|g: &&str| !g.is_empty() && g.len() <= HEXTET_MAX_LEN)
        }
        1 => {
            let Some((left, right)) = addr.split_once(COMPRESSED) else {
                return false;
            };
            let left: Vec<&str> = split_groups(left);
            let right: Vec<&str> = split_groups(right);
            left.len() + right.len() < IPV6_GROUPS
                && left.iter().chain(&right).all(|g: &&str| g.len() <= HEXTET_MAX_LEN)
        }
        _ => false,
    }
}

/// Groups on one side of `::`. An empty side has no groups.
fn split_groups(half: &str) -> Vec<&str> {
    if half.is_empty() {
        return Vec::new();
    }
    half.split(COLON).collect()
}

/* -------------------------------------------------------------------------- */
