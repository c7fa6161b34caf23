//! The catalog of HTTP status codes httpstatusdogs.com has a dog for.
//!
//! Several names can share a code (`OK` and `SUCCESS` are both 200). The first
//! name declared for a code is its primary entry, that's what a lookup by code
//! returns; a lookup by name accepts any of them.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::names::{to_display_form, to_lookup_form};

/// A named HTTP status code.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Status {
    /// Catalog name, eg `NOT_FOUND`.
    pub name: &'static str,
    /// Numeric code, always within `100..=599`.
    pub code: u16,
    /// Whether this entry is the one returned when looking up `code`.
    pub primary: bool,
}

impl Status {
    /// The name as shown to people, eg `Not Found`.
    pub fn display_name(&self) -> String {
        to_display_form(self.name)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code, self.display_name())
    }
}

const fn status(name: &'static str, code: u16) -> Status {
    Status {
        name,
        code,
        primary: true,
    }
}

const fn alias(name: &'static str, code: u16) -> Status {
    Status {
        name,
        code,
        primary: false,
    }
}

static CATALOG: &[Status] = &[
    status("CONTINUE", 100),
    status("SWITCHING_PROTOCOLS", 101),
    status("PROCESSING", 102),
    status("OK", 200),
    alias("SUCCESS", 200),
    status("CREATED", 201),
    status("ACCEPTED", 202),
    status("NO_CONTENT", 204),
    status("PARTIAL_CONTENT", 206),
    status("MULTI_STATUS", 207),
    status("MULTIPLE_CHOICES", 300),
    status("MOVED_PERMANENTLY", 301),
    status("FOUND", 302),
    status("SEE_OTHER", 303),
    status("NOT_MODIFIED", 304),
    status("USE_PROXY", 305),
    status("TEMPORARY_REDIRECT", 307),
    status("BAD_REQUEST", 400),
    status("UNAUTHORIZED", 401),
    status("PAYMENT_REQUIRED", 402),
    status("FORBIDDEN", 403),
    status("NOT_FOUND", 404),
    status("METHOD_NOT_ALLOWED", 405),
    status("NOT_ACCEPTABLE", 406),
    status("REQUEST_TIMEOUT", 408),
    status("CONFLICT", 409),
    status("GONE", 410),
    status("LENGTH_REQUIRED", 411),
    status("PRECONDITION_FAILED", 412),
    status("PAYLOAD_TOO_LARGE", 413),
    status("REQUEST_URI_TOO_LONG", 414),
    status("UNSUPPORTED_MEDIA_TYPE", 415),
    status("REQUEST_RANGE_NOT_SATISFIABLE", 416),
    status("EXPECTATION_FAILED", 417),
    status("IM_A_TEAPOT", 418),
    status("ENHANCE_YOUR_CALM", 420),
    status("MISDIRECTED_REQUEST", 421),
    status("UNPROCESSABLE_ENTITY", 422),
    status("LOCKED", 423),
    status("FAILED_DEPENDENCY", 424),
    status("UNORDERED_COLLECTION", 425),
    status("UPGRADE_REQUIRED", 426),
    status("TOO_MANY_REQUESTS", 429),
    status("REQUEST_HEADER_FIELDS_TOO_LARGE", 431),
    status("NO_RESPONSE", 444),
    status("BLOCKED_BY_WINDOWS_PARENTAL_CONTROLS", 450),
    status("UNAVAILABLE_FOR_LEGAL_REASONS", 451),
    status("CLIENT_CLOSED_REQUEST", 499),
    status("INTERNAL_SERVER_ERROR", 500),
    status("NOT_IMPLEMENTED", 501),
    status("BAD_GATEWAY", 502),
    status("SERVICE_UNAVAILABLE", 503),
    status("GATEWAY_TIMEOUT", 504),
    status("VARIANT_ALSO_NEGOTIATES", 506),
    status("INSUFFICIENT_STORAGE", 507),
    status("LOOP_DETECTED", 508),
    status("BANDWIDTH_LIMIT_EXCEEDED", 509),
    status("NOT_EXTENDED", 510),
    status("NETWORK_AUTHENTICATION_REQUIRED", 511),
    status("NETWORK_CONNECT_TIMEOUT_ERROR", 599),
];

static BY_NAME: LazyLock<BTreeMap<&'static str, &'static Status>> =
    LazyLock::new(|| CATALOG.iter().map(|entry| (entry.name, entry)).collect());

static BY_CODE: LazyLock<BTreeMap<u16, &'static Status>> = LazyLock::new(|| {
    CATALOG
        .iter()
        .filter(|entry| entry.primary)
        .map(|entry| (entry.code, entry))
        .collect()
});

/// Every catalog entry, aliases included, in declaration order.
pub fn statuses() -> impl Iterator<Item = &'static Status> {
    CATALOG.iter()
}

/// Returns the primary entry for `code`.
pub fn lookup_by_code(code: u16) -> Option<&'static Status> {
    BY_CODE.get(&code).copied()
}

/// Returns the primary entry for the code named by `name`, which may be an alias.
///
/// `name` is normalised to `UPPER_SNAKE` form first.
pub fn lookup_by_name(name: &str) -> Option<&'static Status> {
    let entry = BY_NAME.get(to_lookup_form(name).as_str())?;
    lookup_by_code(entry.code)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_code_resolves_to_itself() {
        for entry in statuses() {
            let found = lookup_by_code(entry.code).expect("code in catalog");
            assert_eq!(found.code, entry.code);
            assert!(found.primary);
            assert!((100..=599).contains(&entry.code), "{entry}");
        }
    }

    #[test]
    fn names_are_unique_and_one_primary_per_code() {
        let mut names = HashSet::new();
        let mut primaries = HashSet::new();
        for entry in statuses() {
            assert!(names.insert(entry.name), "duplicate name {}", entry.name);
            if entry.primary {
                assert!(primaries.insert(entry.code), "two primaries for {}", entry.code);
            }
        }
        let codes: HashSet<u16> = statuses().map(|entry| entry.code).collect();
        assert_eq!(codes, primaries);
    }

    #[test]
    fn aliases_share_the_primary_entry() {
        let ok = lookup_by_name("OK").expect("OK");
        let success = lookup_by_name("success").expect("SUCCESS");
        assert_eq!(ok.code, 200);
        assert_eq!(success, ok);
        assert!(success.primary);
        assert_eq!(success.name, "OK");
        assert_eq!(success.display_name(), "Ok");
        assert_eq!(lookup_by_code(200), Some(success));
        assert!(statuses().any(|entry| entry.name == "SUCCESS" && !entry.primary));
    }

    #[test]
    fn every_name_resolves_to_its_codes_primary() {
        for entry in statuses() {
            let found = lookup_by_name(entry.name).expect("name in catalog");
            assert!(found.primary, "{}", entry.name);
            assert_eq!(Some(found), lookup_by_code(entry.code));
            assert_eq!(
                lookup_by_name(&entry.display_name()).map(Status::display_name),
                Some(found.display_name())
            );
        }
    }

    #[test]
    fn name_lookup_is_case_and_spacing_insensitive() {
        for name in ["not found", "NOT_FOUND", "Not Found", " not  found "] {
            assert_eq!(lookup_by_name(name).map(|entry| entry.code), Some(404), "{name}");
        }
    }

    #[test]
    fn informal_codes_are_present() {
        for code in [420, 444, 450, 499, 599] {
            assert!(lookup_by_code(code).is_some(), "{code}");
        }
        assert_eq!(
            lookup_by_code(420).map(Status::display_name).as_deref(),
            Some("Enhance Your Calm")
        );
    }

    #[test]
    fn misses() {
        assert!(lookup_by_code(999).is_none());
        assert!(lookup_by_code(0).is_none());
        assert!(lookup_by_code(203).is_none());
        assert!(lookup_by_name("not a status").is_none());
        assert!(lookup_by_name("").is_none());
    }
}
