//! Prelude of well-known framework types.
//!
//! Registers the ASP.NET Core MVC result hierarchy (and the handful of BCL
//! types attribute arguments refer to) in a `TypeTable`, so hosts and tests
//! only have to describe their own types.

use crate::types::{TypeId, TypeKind, TypeTable};

pub const SYSTEM: &str = "System";
pub const SYSTEM_NET: &str = "System.Net";
pub const MVC: &str = "Microsoft.AspNetCore.Mvc";
pub const MVC_INFRASTRUCTURE: &str = "Microsoft.AspNetCore.Mvc.Infrastructure";

/// Ids of the registered prelude types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MvcTypes {
    pub object: TypeId,
    pub string: TypeId,
    pub int32: TypeId,
    pub system_type: TypeId,
    pub http_status_code: TypeId,

    pub i_action_result: TypeId,
    pub i_status_code_action_result: TypeId,
    pub i_client_error_action_result: TypeId,
    pub action_result: TypeId,
    pub controller_base: TypeId,
    pub produces_response_type_attribute: TypeId,

    pub status_code_result: TypeId,
    pub ok_result: TypeId,
    pub no_content_result: TypeId,
    pub bad_request_result: TypeId,
    pub unauthorized_result: TypeId,
    pub not_found_result: TypeId,
    pub conflict_result: TypeId,

    pub object_result: TypeId,
    pub ok_object_result: TypeId,
    pub created_result: TypeId,
    pub created_at_action_result: TypeId,
    pub created_at_route_result: TypeId,
    pub accepted_result: TypeId,
    pub bad_request_object_result: TypeId,
    pub unauthorized_object_result: TypeId,
    pub not_found_object_result: TypeId,
    pub conflict_object_result: TypeId,

    pub forbid_result: TypeId,
    pub challenge_result: TypeId,
    pub content_result: TypeId,
    pub empty_result: TypeId,
}

impl MvcTypes {
    /// Register the prelude. Re-registering on the same table returns the
    /// same ids.
    pub fn register(table: &mut TypeTable) -> Self {
        let object = table.define_class(SYSTEM, "Object", None);
        let string = table.define_class(SYSTEM, "String", Some(object));
        let value_type = table.define_class(SYSTEM, "ValueType", Some(object));
        let int32 = table.define(SYSTEM, "Int32", TypeKind::Struct);
        table.set_base(int32, Some(value_type));
        let system_type = table.define_class(SYSTEM, "Type", Some(object));
        let enum_base = table.define_class(SYSTEM, "Enum", Some(value_type));
        let http_status_code = table.define(SYSTEM_NET, "HttpStatusCode", TypeKind::Enum);
        table.set_base(http_status_code, Some(enum_base));
        let attribute = table.define_class(SYSTEM, "Attribute", Some(object));

        let i_action_result = table.define_interface(MVC, "IActionResult");
        let i_status_code_action_result =
            table.define_interface(MVC_INFRASTRUCTURE, "IStatusCodeActionResult");
        table.add_interface(i_status_code_action_result, i_action_result);
        let i_client_error_action_result =
            table.define_interface(MVC_INFRASTRUCTURE, "IClientErrorActionResult");
        table.add_interface(i_client_error_action_result, i_status_code_action_result);

        let action_result = table.define_class(MVC, "ActionResult", Some(object));
        table.add_interface(action_result, i_action_result);
        let controller_base = table.define_class(MVC, "ControllerBase", Some(object));
        let produces_response_type_attribute =
            table.define_class(MVC, "ProducesResponseTypeAttribute", Some(attribute));

        let status_code_result = table.define_class(MVC, "StatusCodeResult", Some(action_result));
        table.add_interface(status_code_result, i_status_code_action_result);
        let status = |table: &mut TypeTable, name: &str, client_error: bool| {
            let id = table.define_class(MVC, name, Some(status_code_result));
            if client_error {
                table.add_interface(id, i_client_error_action_result);
            }
            id
        };
        let ok_result = status(table, "OkResult", false);
        let no_content_result = status(table, "NoContentResult", false);
        let bad_request_result = status(table, "BadRequestResult", true);
        let unauthorized_result = status(table, "UnauthorizedResult", true);
        let not_found_result = status(table, "NotFoundResult", true);
        let conflict_result = status(table, "ConflictResult", true);

        let object_result = table.define_class(MVC, "ObjectResult", Some(action_result));
        table.add_interface(object_result, i_status_code_action_result);
        let with_object = |table: &mut TypeTable, name: &str| {
            table.define_class(MVC, name, Some(object_result))
        };
        let ok_object_result = with_object(table, "OkObjectResult");
        let created_result = with_object(table, "CreatedResult");
        let created_at_action_result = with_object(table, "CreatedAtActionResult");
        let created_at_route_result = with_object(table, "CreatedAtRouteResult");
        let accepted_result = with_object(table, "AcceptedResult");
        let bad_request_object_result = with_object(table, "BadRequestObjectResult");
        let unauthorized_object_result = with_object(table, "UnauthorizedObjectResult");
        let not_found_object_result = with_object(table, "NotFoundObjectResult");
        let conflict_object_result = with_object(table, "ConflictObjectResult");

        // These derive from ActionResult directly and carry no status code.
        let forbid_result = table.define_class(MVC, "ForbidResult", Some(action_result));
        let challenge_result = table.define_class(MVC, "ChallengeResult", Some(action_result));
        let content_result = table.define_class(MVC, "ContentResult", Some(action_result));
        let empty_result = table.define_class(MVC, "EmptyResult", Some(action_result));

        Self {
            object,
            string,
            int32,
            system_type,
            http_status_code,
            i_action_result,
            i_status_code_action_result,
            i_client_error_action_result,
            action_result,
            controller_base,
            produces_response_type_attribute,
            status_code_result,
            ok_result,
            no_content_result,
            bad_request_result,
            unauthorized_result,
            not_found_result,
            conflict_result,
            object_result,
            ok_object_result,
            created_result,
            created_at_action_result,
            created_at_route_result,
            accepted_result,
            bad_request_object_result,
            unauthorized_object_result,
            not_found_object_result,
            conflict_object_result,
            forbid_result,
            challenge_result,
            content_result,
            empty_result,
        }
    }
}
