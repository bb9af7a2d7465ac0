// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{strings::*, TargetError, IPV4_BITS, IPV4_OCTETS, PORT_MIN};
use ipnet::Ipv4Net;
use std::net::Ipv4Addr;

/// Parse an unsigned decimal made of ASCII digits only (no sign, no whitespace).
pub(crate) fn parse_decimal(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b: u8| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u32>().ok()
}

/// Parse a TCP/UDP port number in `1..=65535`.
pub fn parse_port(s: &str) -> Option<u16> {
    parse_decimal(s)
        .and_then(|n: u32| u16::try_from(n).ok())
        .filter(|&port: &u16| port >= PORT_MIN)
}

/**
Whether `s` is a canonical IPv4 octet: a number in `0..=255` whose text is
exactly its decimal rendering. Rejects leading zeros (`01`), signs (`+1`)
and whitespace.
*/
pub fn is_valid_octet(s: &str) -> bool {
    s.parse::<u8>().is_ok_and(|n: u8| n.to_string() == s)
}

/// Parse a dotted-quad IPv4 literal made of exactly 4 canonical octets.
pub(crate) fn parse_ipv4(s: &str) -> Option<Ipv4Addr> {
    let parts: Vec<&str> = s.split(DOT).collect();
    if parts.len() != IPV4_OCTETS {
        return None;
    }

    let mut octets: [u8; 4] = [0; 4];
    for (octet, part) in octets.iter_mut().zip(parts) {
        if !is_valid_octet(part) {
            return None;
        }
        *octet = part.parse().ok()?;
    }
    Some(Ipv4Addr::from(octets))
}

/// Whether `s` is a plain IPv4 literal, f.ex. `192.168.1.1`.
pub fn is_valid_ipv4(s: &str) -> bool {
    parse_ipv4(s).is_some()
}

/* ---------------------------------- */

/**
Validate an IPv4 CIDR block (`<address>/<prefix>`) and return it as an
[Ipv4Net]. Host bits are allowed and kept as given.

Checks run in order and the first failure wins:
1. exactly one `/`
2. prefix is a number in `0..=32`
3. the address has 4 dot-separated octets; a truncated address yields
   [TargetError::CidrIncomplete] with a zero-padded suggestion, f.ex.
   `10.0/24` suggests `10.0.0.0/24`
4. every octet is canonical; the first bad one is reported by position
*/
pub fn parse_cidr(s: &str) -> Result<Ipv4Net, TargetError> {
    let parts: Vec<&str> = s.split(SLASH).collect();
    if parts.len() != 2 {
        return Err(TargetError::CidrFormat);
    }

    let addr: &str = parts[0];
    let mask: &str = parts[1];

    let prefix: u8 = match parse_decimal(mask) {
        Some(p) if p <= IPV4_BITS as u32 => p as u8,
        _ => return Err(TargetError::CidrMask(mask.into())),
    };

    let octets: Vec<&str> = addr.split(DOT).collect();
    if octets.len() < IPV4_OCTETS {
        return Err(TargetError::CidrIncomplete {
            missing: IPV4_OCTETS - octets.len(),
            suggestion: suggest_cidr_fix(&octets, mask),
        });
    }
    if octets.len() > IPV4_OCTETS {
        return Err(TargetError::CidrOctetCount(octets.len()));
    }

    for (i, octet) in octets.iter().enumerate() {
        if !is_valid_octet(octet) {
            return Err(TargetError::CidrOctet {
                pos: i + 1,
                octet: octet.to_string(),
            });
        }
    }

    let ip: Ipv4Addr = parse_ipv4(addr).ok_or(TargetError::CidrFormat)?;
    Ipv4Net::new(ip, prefix).map_err(|_| TargetError::CidrMask(mask.into()))
}

/// Right-pad a truncated address with `0` octets and re-attach the mask.
fn suggest_cidr_fix(octets: &[&str], mask: &str) -> String {
    let mut padded: Vec<&str> = octets.to_vec();
    padded.resize(IPV4_OCTETS, "0");
    format!("{}{SLASH}{mask}", padded.join("."))
}

/* -------------------------------------------------------------------------- */

/// Inclusive range of IPv4 addresses (endpoints are included).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Ipv4Range {
    pub beg: Ipv4Addr,
    pub end: Ipv4Addr,
}

impl Ipv4Range {
    /**
    Create a new [Ipv4Range]. The endpoints are compared octet by octet,
    most significant first; `beg == end` is a valid single-host range.
    */
    pub fn new(beg: Ipv4Addr, end: Ipv4Addr) -> Result<Self, TargetError> {
        if beg.octets() > end.octets() {
            return Err(TargetError::RangeOrder(beg, end));
        }
        Ok(Self { beg, end })
    }

    /// Number of addresses in the range, both endpoints included.
    /// A hand-built range with `beg > end` is empty.
    pub fn len(&self) -> u64 {
        u32::from(self.end)
            .checked_sub(u32::from(self.beg))
            .map_or(0, |diff: u32| u64::from(diff) + 1)
    }
}

/**
Parse an IPv4 range in the full form `10.0.0.1-10.0.0.50`.

Both endpoints must be plain IPv4 literals (whitespace around them is
ignored). The failing endpoint is reported as start or end.
*/
pub fn parse_ip_range(s: &str) -> Result<Ipv4Range, TargetError> {
    let parts: Vec<&str> = s.split(DASH).collect();
    if parts.len() != 2 {
        return Err(TargetError::RangeFormat);
    }

    let beg_str: &str = parts[0].trim();
    let end_str: &str = parts[1].trim();

    let beg: Ipv4Addr = parse_ipv4(beg_str).ok_or_else(|| TargetError::RangeStart(beg_str.into()))?;
    let end: Ipv4Addr = parse_ipv4(end_str).ok_or_else(|| TargetError::RangeEnd(end_str.into()))?;

    Ipv4Range::new(beg, end)
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    const CIDR_OK: &str = "10.0.0.0/24";
    const CIDR_SHORT: &str = "10.0/24";
    const RANGE_OK: &str = "10.0.0.1-10.0.0.5";
    const RANGE_BAD: &str = "10.0.0.5-10.0.0.1";

    #[test]
    fn test_all_octet_values() {
        for n in 0..=255u16 {
            assert!(is_valid_octet(&n.to_string()), "Failed: {n}");
        }
        // every value in every position
        for n in 0..=255u16 {
            let ips: [String; 4] = [
                format!("{n}.0.0.0"),
                format!("0.{n}.0.0"),
                format!("0.0.{n}.0"),
                format!("0.0.0.{n}"),
            ];
            for ip in ips {
                assert!(is_valid_ipv4(&ip), "Failed: '{ip}'");
            }
        }
    }

    #[rustfmt::skip]
    #[test]
    fn test_bad_octets() {
        let tests: Vec<&str> = vec![
            "256", "01", "00", "+1", "-1", " 1", "1 ", "", "a", "1e2", "999999999999",
        ];
        for t in tests {
            assert!(!is_valid_octet(t), "Accepted: '{t}'");
        }
    }

    #[rustfmt::skip]
    #[test]
    fn test_ipv4_literals() {
        let good: Vec<&str> = vec!["0.0.0.0", "255.255.255.255", "192.168.1.1", "10.0.0.1"];
        let bad: Vec<&str> = vec![
            "256.0.0.1", "10.0.0.01", "10.0.0", "10.0.0.1.1", "10..0.1", "10.0.0.1 ", "a.b.c.d", "",
        ];
        for ip in good {
            assert!(is_valid_ipv4(ip), "Rejected: '{ip}'");
        }
        for ip in bad {
            assert!(!is_valid_ipv4(ip), "Accepted: '{ip}'");
        }
    }

    #[test]
    fn test_ports() {
        assert_eq!(parse_port("1"), Some(1));
        assert_eq!(parse_port("8080"), Some(8080));
        assert_eq!(parse_port("65535"), Some(65535));
        assert_eq!(parse_port("0"), None);
        assert_eq!(parse_port("65536"), None);
        assert_eq!(parse_port("+80"), None);
        assert_eq!(parse_port("80a"), None);
        assert_eq!(parse_port(""), None);
    }

    #[test]
    fn test_cidr_ok() {
        let net: Ipv4Net = parse_cidr(CIDR_OK).unwrap();
        assert_eq!(net.addr(), Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(net.prefix_len(), 24);
        assert!(parse_cidr("0.0.0.0/0").is_ok());
        assert!(parse_cidr("192.168.1.77/32").is_ok());
    }

    #[test]
    fn test_cidr_suggestion() {
        let err: TargetError = parse_cidr(CIDR_SHORT).unwrap_err();
        assert_eq!(
            err,
            TargetError::CidrIncomplete {
                missing: 2,
                suggestion: "10.0.0.0/24".into()
            }
        );
        assert!(err.to_string().contains("10.0.0.0/24"));

        let err: TargetError = parse_cidr("172.16.5/20").unwrap_err();
        assert!(err.to_string().contains("172.16.5.0/20"));
        assert!(err.to_string().contains("missing 1"));
    }

    #[test]
    fn test_cidr_errors() {
        assert_eq!(parse_cidr("10.0.0.0/24/8"), Err(TargetError::CidrFormat));
        assert_eq!(parse_cidr("10.0.0.0/33"), Err(TargetError::CidrMask("33".into())));
        assert_eq!(parse_cidr("10.0.0.0/"), Err(TargetError::CidrMask("".into())));
        assert_eq!(parse_cidr("10.0.0.0/x"), Err(TargetError::CidrMask("x".into())));
        assert_eq!(parse_cidr("10.0.0.0.0/8"), Err(TargetError::CidrOctetCount(5)));
        assert_eq!(
            parse_cidr("10.300.0.0/16"),
            Err(TargetError::CidrOctet { pos: 2, octet: "300".into() })
        );
    }

    #[test]
    fn test_cidr_mask_checked_first() {
        // a bad mask wins over a truncated address
        assert_eq!(parse_cidr("10.0/40"), Err(TargetError::CidrMask("40".into())));
    }

    #[test]
    fn test_cidr_first_bad_octet_wins() {
        assert_eq!(
            parse_cidr("10.01.999.0/8"),
            Err(TargetError::CidrOctet { pos: 2, octet: "01".into() })
        );
    }

    #[test]
    fn test_range_ok() {
        let range: Ipv4Range = parse_ip_range(RANGE_OK).unwrap();
        assert_eq!(range.beg, Ipv4Addr::new(10, 0, 0, 1));
        assert_eq!(range.end, Ipv4Addr::new(10, 0, 0, 5));
        assert_eq!(range.len(), 5);
    }

    #[test]
    fn test_range_single_host() {
        let range: Ipv4Range = parse_ip_range("10.0.0.7-10.0.0.7").unwrap();
        assert_eq!(range.len(), 1);
    }

    #[test]
    fn test_range_order() {
        let err: TargetError = parse_ip_range(RANGE_BAD).unwrap_err();
        assert_eq!(
            err,
            TargetError::RangeOrder(Ipv4Addr::new(10, 0, 0, 5), Ipv4Addr::new(10, 0, 0, 1))
        );
        // more significant octet decides, even if a later one is smaller
        assert!(parse_ip_range("10.0.1.0-10.0.2.0").is_ok());
        assert!(parse_ip_range("10.1.0.0-10.0.255.255").is_err());
    }

    #[test]
    fn test_range_endpoints() {
        assert_eq!(
            parse_ip_range("10.0.0.1-10.0.0"),
            Err(TargetError::RangeEnd("10.0.0".into()))
        );
        assert_eq!(
            parse_ip_range("10.0.0.256-10.0.0.1"),
            Err(TargetError::RangeStart("10.0.0.256".into()))
        );
        assert_eq!(parse_ip_range("10.0.0.1-5-6"), Err(TargetError::RangeFormat));
        assert!(parse_ip_range("10.0.0.1 - 10.0.0.9").is_ok());
    }

    #[test]
    fn test_range_full_span() {
        let range: Ipv4Range = parse_ip_range("0.0.0.0-255.255.255.255").unwrap();
        assert_eq!(range.len(), 1u64 << 32);
    }

    #[test]
    fn test_range_len_inverted() {
        // fields are public, so `new` can be bypassed
        let range: Ipv4Range = Ipv4Range {
            beg: Ipv4Addr::new(10, 0, 0, 5),
            end: Ipv4Addr::new(10, 0, 0, 1),
        };
        assert_eq!(range.len(), 0);
    }
}
