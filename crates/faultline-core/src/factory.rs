use crate::catalog;
use crate::structured::{Details, ErrorInput, ErrorKind, StructuredError};

/// Message used by named errors whose code is not cataloged
const FALLBACK_MESSAGE: &str = "Error";

/// Build a generic [`StructuredError`]
pub fn create_error(message: impl Into<ErrorInput>, code: Option<u16>, details: Option<Details>) -> StructuredError {
    StructuredError::new(message, code, details)
}

/// Factory bound to a single status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedError {
    code: u16,
    kind: ErrorKind,
}

impl NamedError {
    pub const fn new(code: u16) -> Self {
        Self {
            code,
            kind: ErrorKind::for_status(code),
        }
    }

    pub const fn code(self) -> u16 {
        self.code
    }

    pub const fn kind(self) -> ErrorKind {
        self.kind
    }

    pub fn name(self) -> &'static str {
        self.kind.name()
    }

    /// Message used when [`NamedError::create`] is called without one
    pub fn default_message(self) -> &'static str {
        catalog::get(self.code).map_or(FALLBACK_MESSAGE, |info| info.default_msg)
    }

    /// Build an error for this code
    ///
    /// Missing details become an empty map rather than `None`.
    pub fn create(self, message: Option<&str>, details: Option<Details>) -> StructuredError {
        let message = message.unwrap_or_else(|| self.default_message());
        StructuredError::with_kind(
            self.kind,
            ErrorInput::Text(message.to_owned()),
            Some(self.code),
            Some(details.unwrap_or_default()),
        )
    }
}

/// Return a factory bound to `code`
pub const fn make_named_error(code: u16) -> NamedError {
    NamedError::new(code)
}

pub const BAD_REQUEST_ERROR: NamedError = make_named_error(400);
pub const UNAUTHORIZED_ERROR: NamedError = make_named_error(401);
pub const FORBIDDEN_ERROR: NamedError = make_named_error(403);
pub const NOT_FOUND_ERROR: NamedError = make_named_error(404);
pub const CONFLICT_ERROR: NamedError = make_named_error(409);
pub const UNPROCESSABLE_ENTITY_ERROR: NamedError = make_named_error(422);
pub const TOO_MANY_REQUESTS_ERROR: NamedError = make_named_error(429);
pub const INTERNAL_SERVER_ERROR: NamedError = make_named_error(500);
pub const SERVICE_UNAVAILABLE_ERROR: NamedError = make_named_error(503);
pub const GATEWAY_TIMEOUT_ERROR: NamedError = make_named_error(504);

/// Every pre-bound named error, in catalog order
pub const NAMED_ERRORS: [NamedError; 10] = [
    BAD_REQUEST_ERROR,
    UNAUTHORIZED_ERROR,
    FORBIDDEN_ERROR,
    NOT_FOUND_ERROR,
    CONFLICT_ERROR,
    UNPROCESSABLE_ENTITY_ERROR,
    TOO_MANY_REQUESTS_ERROR,
    INTERNAL_SERVER_ERROR,
    SERVICE_UNAVAILABLE_ERROR,
    GATEWAY_TIMEOUT_ERROR,
];

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn id_details() -> Details {
        json!({ "id": 1 }).as_object().cloned().unwrap()
    }

    #[test]
    fn create_error_keeps_its_arguments() {
        let details = json!({ "field": "email" }).as_object().cloned().unwrap();
        let err = create_error("Email invalid", Some(400), Some(details.clone()));

        assert_eq!(err.message(), "Email invalid");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.details(), Some(&details));
        assert_eq!(err.name(), "StructuredError");
    }

    #[test]
    fn named_errors_match_their_codes() {
        let cases = [
            (NOT_FOUND_ERROR, "NotFoundError", 404, "⁉️"),
            (UNAUTHORIZED_ERROR, "UnauthorizedError", 401, "⛔"),
            (BAD_REQUEST_ERROR, "BadRequestError", 400, "❗"),
            (FORBIDDEN_ERROR, "ForbiddenError", 403, "⛔"),
            (UNPROCESSABLE_ENTITY_ERROR, "UnprocessableEntityError", 422, "❌"),
            (TOO_MANY_REQUESTS_ERROR, "TooManyRequestsError", 429, "⏸️"),
            (INTERNAL_SERVER_ERROR, "InternalServerError", 500, "⚙️"),
            (CONFLICT_ERROR, "ConflictError", 409, "⚔️"),
            (SERVICE_UNAVAILABLE_ERROR, "ServiceUnavailableError", 503, "⚙️"),
            (GATEWAY_TIMEOUT_ERROR, "GatewayTimeoutError", 504, "⏱️"),
        ];

        for (factory, name, status_code, emoji) in cases {
            let err = factory.create(Some("Test message"), Some(id_details()));

            assert_eq!(err.name(), name);
            assert_eq!(err.message(), "Test message");
            assert_eq!(err.emoji(), emoji);
            assert_eq!(err.status_code(), status_code);
            assert_eq!(err.details(), Some(&id_details()));
        }
    }

    #[test]
    fn missing_message_uses_catalog_default() {
        let err = make_named_error(404).create(None, None);

        assert_eq!(err.message(), "Resource not found");
        assert_eq!(err.emoji(), "⁉️");
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.name(), "NotFoundError");
    }

    #[test]
    fn missing_details_become_empty_map() {
        let err = NOT_FOUND_ERROR.create(Some("msg"), None);
        assert_eq!(err.details(), Some(&Details::new()));
    }

    #[test]
    fn uncataloged_code_uses_generic_fallbacks() {
        let teapot = make_named_error(418);
        let err = teapot.create(None, None);

        assert_eq!(teapot.default_message(), "Error");
        assert_eq!(err.message(), "Error");
        assert_eq!(err.name(), "StructuredError");
        assert_eq!(err.category(), "Unknown");
    }

    #[test]
    fn named_errors_cover_the_catalog() {
        let codes: Vec<u16> = NAMED_ERRORS.iter().map(|named| named.code()).collect();
        let cataloged: Vec<u16> = catalog::entries().map(|(code, _)| code).collect();
        assert_eq!(codes, cataloged);
    }
}
