//! Status codes implied by result-type names.
//!
//! Two static tables, both read-only and shared by every analysis:
//! - the result-type table, mapping well-known MVC result class names (and,
//!   by keyword, custom ones) to the status code they produce;
//! - the `HttpStatusCode` name table, mapping a status code to its
//!   enumeration member name.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// Well-known result types and the status code they always carry.
const KNOWN_RESULT_TYPES: &[(&str, i32)] = &[
    ("OkResult", 200),
    ("OkObjectResult", 200),
    ("CreatedResult", 201),
    ("CreatedAtActionResult", 201),
    ("CreatedAtRouteResult", 201),
    ("AcceptedResult", 202),
    ("NoContentResult", 204),
    ("BadRequestResult", 400),
    ("BadRequestObjectResult", 400),
    ("UnauthorizedResult", 401),
    ("ForbidResult", 403),
    ("NotFoundResult", 404),
    ("NotFoundObjectResult", 404),
    ("ConflictResult", 409),
];

/// Name keywords tried, in this order, when a type is not in the table.
/// The first keyword contained in the name wins.
const STATUS_KEYWORDS: &[(&str, i32)] = &[
    ("Ok", 200),
    ("Created", 201),
    ("Accepted", 202),
    ("NoContent", 204),
    ("BadRequest", 400),
    ("Unauthorized", 401),
    ("Forbidden", 403),
    ("NotFound", 404),
    ("Conflict", 409),
];

static KNOWN_RESULT_TYPE_MAP: Lazy<FxHashMap<&'static str, i32>> =
    Lazy::new(|| KNOWN_RESULT_TYPES.iter().copied().collect());

/// `System.Net.HttpStatusCode` member names.
const HTTP_STATUS_NAMES: &[(i32, &str)] = &[
    (100, "Continue"),
    (101, "SwitchingProtocols"),
    (102, "Processing"),
    (103, "EarlyHints"),
    (200, "OK"),
    (201, "Created"),
    (202, "Accepted"),
    (203, "NonAuthoritativeInformation"),
    (204, "NoContent"),
    (205, "ResetContent"),
    (206, "PartialContent"),
    (207, "MultiStatus"),
    (208, "AlreadyReported"),
    (226, "IMUsed"),
    (300, "MultipleChoices"),
    (301, "MovedPermanently"),
    (302, "Found"),
    (303, "SeeOther"),
    (304, "NotModified"),
    (305, "UseProxy"),
    (306, "Unused"),
    (307, "TemporaryRedirect"),
    (308, "PermanentRedirect"),
    (400, "BadRequest"),
    (401, "Unauthorized"),
    (402, "PaymentRequired"),
    (403, "Forbidden"),
    (404, "NotFound"),
    (405, "MethodNotAllowed"),
    (406, "NotAcceptable"),
    (407, "ProxyAuthenticationRequired"),
    (408, "RequestTimeout"),
    (409, "Conflict"),
    (410, "Gone"),
    (411, "LengthRequired"),
    (412, "PreconditionFailed"),
    (413, "RequestEntityTooLarge"),
    (414, "RequestUriTooLong"),
    (415, "UnsupportedMediaType"),
    (416, "RequestedRangeNotSatisfiable"),
    (417, "ExpectationFailed"),
    (421, "MisdirectedRequest"),
    (422, "UnprocessableEntity"),
    (423, "Locked"),
    (424, "FailedDependency"),
    (426, "UpgradeRequired"),
    (428, "PreconditionRequired"),
    (429, "TooManyRequests"),
    (431, "RequestHeaderFieldsTooLarge"),
    (451, "UnavailableForLegalReasons"),
    (500, "InternalServerError"),
    (501, "NotImplemented"),
    (502, "BadGateway"),
    (503, "ServiceUnavailable"),
    (504, "GatewayTimeout"),
    (505, "HttpVersionNotSupported"),
    (506, "VariantAlsoNegotiates"),
    (507, "InsufficientStorage"),
    (508, "LoopDetected"),
    (510, "NotExtended"),
    (511, "NetworkAuthenticationRequired"),
];

static HTTP_STATUS_NAME_MAP: Lazy<FxHashMap<i32, &'static str>> =
    Lazy::new(|| HTTP_STATUS_NAMES.iter().copied().collect());

pub struct StatusCodeTable;

impl StatusCodeTable {
    /// Status code implied by a result-type name: exact table entry first,
    /// then the first keyword (case-sensitive) the name contains.
    ///
    /// `CustomNotFoundResult` resolves to 404; `TeapotResult` is unresolved.
    pub fn resolve(type_name: &str) -> Option<i32> {
        Self::resolve_exact(type_name).or_else(|| Self::resolve_by_keyword(type_name))
    }

    pub fn resolve_exact(type_name: &str) -> Option<i32> {
        KNOWN_RESULT_TYPE_MAP.get(type_name).copied()
    }

    pub fn resolve_by_keyword(type_name: &str) -> Option<i32> {
        STATUS_KEYWORDS
            .iter()
            .find(|(keyword, _)| type_name.contains(keyword))
            .map(|&(_, code)| code)
    }

    /// `HttpStatusCode` member name of a status code (`404` → `NotFound`).
    pub fn http_status_name(code: i32) -> Option<&'static str> {
        HTTP_STATUS_NAME_MAP.get(&code).copied()
    }
}
