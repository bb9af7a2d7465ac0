// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

pub(crate) const DASH: char = '-';
pub(crate) const DOT: char = '.';
pub(crate) const SLASH: char = '/';
pub(crate) const COLON: char = ':';
pub(crate) const COMMENT: char = '#';
pub(crate) const ZONE: char = '%';
pub(crate) const BRACKET_OPEN: char = '[';
pub(crate) const BRACKET_CLOSE: char = ']';
pub(crate) static COMPRESSED: &str = "::";

// addresses.rs
pub(crate) static ERR_CIDR_FMT: &str = "invalid CIDR format";
pub(crate) static ERR_CIDR_MASK: &str = "invalid subnet mask";
pub(crate) static ERR_CIDR_INCOMPLETE: &str = "incomplete IP address, missing";
pub(crate) static ERR_CIDR_SUGGEST: &str = "correct format example";
pub(crate) static ERR_CIDR_OCTETS: &str = "IP address in CIDR must have 4 octets, got";
pub(crate) static ERR_CIDR_OCTET: &str = "must be a number between 0 and 255";
pub(crate) static ERR_RNG_FMT: &str = "invalid IP range format";
pub(crate) static ERR_START: &str = "invalid start IP";
pub(crate) static ERR_END: &str = "invalid end IP";
pub(crate) static ERR_RNG_ORDER: &str = "start IP cannot be greater than end IP";

// ipv6.rs
pub(crate) static ERR_V6_BRACKET: &str = "invalid IPv6 format, missing closing bracket ']'";
pub(crate) static ERR_V6_TRAILING: &str = "invalid IPv6 format, unexpected text after ']'";
pub(crate) static ERR_V6_PORT: &str = "invalid port number";
pub(crate) static ERR_V6_CIDR: &str = "invalid IPv6 CIDR format";
pub(crate) static ERR_V6_MASK: &str = "invalid IPv6 subnet mask";
pub(crate) static ERR_V6_FMT: &str = "invalid IPv6 address format";

// domain.rs
pub(crate) static ERR_DOMAIN: &str = "invalid domain name";
pub(crate) static ERR_DOM_EDGE: &str = "must not start or end with '.' or '-'";
pub(crate) static ERR_DOM_DOTS: &str = "must not contain '..'";
pub(crate) static ERR_DOM_LABELS: &str = "needs at least two labels";
pub(crate) static ERR_DOM_LEN: &str = "must be 1-63 characters long";
pub(crate) static ERR_DOM_CHARS: &str = "may only contain letters, digits and '-'";
pub(crate) static ERR_DOM_HYPHEN: &str = "must not start or end with '-'";
pub(crate) static ERR_DOM_TLD: &str = "top-level domain must be at least 2 letters";

// classify.rs
pub(crate) static ERR_UNRECOGNIZED: &str =
    "invalid target format, expected a valid IP, CIDR, IP range or domain";

// batch.rs
pub(crate) static FMT_LINE: &str = "line";
pub(crate) static FMT_FOUND: &str = "found";
pub(crate) static FMT_ERRORS: &str = "invalid targets";
pub(crate) const COMMA: char = ',';
pub(crate) const SEMICOLON: char = ';';
pub(crate) const SPACE: char = ' ';
