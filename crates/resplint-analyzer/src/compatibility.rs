//! Matching a return site against a declaration.
//!
//! A site satisfies a declaration when its status code matches and, if the
//! declaration names a payload type, its payload type is compatible.
//!
//! Status matching has two checks that must both hold:
//! - the integer check resolves the produced type's status code through
//!   `StatusCodeTable` and compares it with the declared code;
//! - the name check compares the produced type name with the
//!   `HttpStatusCode` member name of the declared code. It only applies to
//!   enum-typed status constants; integer constants pass it unconditionally.
//!
//! Integer constants skip the name check, so a custom
//! `ForbidResult : StatusCodeResult` still satisfies a plain `403`.

use resplint_model::types::base_chain;
use resplint_model::{TypeDatabase, TypeId};

use crate::classifier::is_status_bearing;
use crate::declarations::{Declaration, StatusCodeForm};
use crate::return_sites::ReturnSite;
use crate::status_codes::StatusCodeTable;

/// True if `site` can stand for `declaration`.
pub fn site_matches(
    db: &dyn TypeDatabase,
    site: &ReturnSite,
    declaration: &Declaration,
) -> bool {
    if !status_matches(db, site.produced_type, declaration) {
        return false;
    }
    match declaration.payload_type {
        Some(declared) => payload_matches(db, site.payload_type, declared),
        None => true,
    }
}

pub fn status_matches(db: &dyn TypeDatabase, produced: TypeId, declaration: &Declaration) -> bool {
    matches_status_code(db, produced, declaration.status_code)
        && matches_status_name(db, produced, declaration)
}

/// Integer check: `produced` is status-bearing and its name resolves to
/// `status_code`.
pub fn matches_status_code(db: &dyn TypeDatabase, produced: TypeId, status_code: i32) -> bool {
    if !is_status_bearing(db, Some(produced)) {
        return false;
    }
    db.type_name(produced)
        .and_then(StatusCodeTable::resolve)
        .is_some_and(|resolved| resolved == status_code)
}

/// Name check for enum-typed status constants: the lowercased produced type
/// name must contain the lowercased `HttpStatusCode` name of the code
/// (`NotFoundObjectResult` contains `notfound`).
pub fn matches_status_name(
    db: &dyn TypeDatabase,
    produced: TypeId,
    declaration: &Declaration,
) -> bool {
    if declaration.form != StatusCodeForm::Enum {
        return true;
    }
    let Some(status_name) = StatusCodeTable::http_status_name(declaration.status_code) else {
        return false;
    };
    db.type_name(produced)
        .is_some_and(|name| name.to_lowercase().contains(&status_name.to_lowercase()))
}

/// True if a site payload of type `site_payload` satisfies a declared
/// payload of type `declared`: the same type, a subclass of it, or a class
/// (or subclass of a class) that directly implements it as an interface.
///
/// A site without a known payload never satisfies a declared payload.
pub fn payload_matches(
    db: &dyn TypeDatabase,
    site_payload: Option<TypeId>,
    declared: TypeId,
) -> bool {
    let Some(payload) = site_payload else {
        return false;
    };
    if payload == declared {
        return true;
    }
    base_chain(db, Some(payload))
        .any(|link| link == declared || db.interfaces(link).contains(&declared))
}
