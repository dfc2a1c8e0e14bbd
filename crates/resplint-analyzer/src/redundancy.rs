//! The matched/orphaned decision.
//!
//! A declaration is orphaned when no return site satisfies it. The decision
//! is made per declaration and depends only on the declaration and the full
//! set of sites, so the result order is the declaration order.

use resplint_model::TypeDatabase;

use crate::compatibility::site_matches;
use crate::declarations::Declaration;
use crate::return_sites::ReturnSite;

/// Declarations no site in `sites` can satisfy, in declaration order.
pub fn find_redundant<'d>(
    db: &dyn TypeDatabase,
    declarations: &'d [Declaration],
    sites: &[ReturnSite],
) -> Vec<&'d Declaration> {
    declarations
        .iter()
        .filter(|declaration| !is_declaration_matched(db, declaration, sites))
        .collect()
}

pub fn is_declaration_matched(
    db: &dyn TypeDatabase,
    declaration: &Declaration,
    sites: &[ReturnSite],
) -> bool {
    let matched = sites.iter().find(|site| site_matches(db, site, declaration));
    tracing::trace!(
        status_code = declaration.status_code,
        payload = ?declaration.payload_type,
        matched_by = ?matched,
        "declaration decision"
    );
    matched.is_some()
}
