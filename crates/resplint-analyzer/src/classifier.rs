//! Status-bearing result type classification.
//!
//! Only result types that carry an HTTP status code take part in matching.
//! A type qualifies when it, or any of its base types, is one of the two MVC
//! marker classes.

use resplint_model::types::base_chain;
use resplint_model::{TypeDatabase, TypeId};

/// Marker for results that carry only a status code.
pub const STATUS_CODE_RESULT: &str = "StatusCodeResult";
/// Marker for results that carry a status code and a payload object.
pub const OBJECT_RESULT: &str = "ObjectResult";

/// True if `ty` or one of its base types is a status-bearing marker class.
/// An absent type is not status-bearing.
pub fn is_status_bearing(db: &dyn TypeDatabase, ty: Option<TypeId>) -> bool {
    base_chain(db, ty).any(|link| {
        matches!(
            db.type_name(link),
            Some(STATUS_CODE_RESULT) | Some(OBJECT_RESULT)
        )
    })
}
