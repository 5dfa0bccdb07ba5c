//! Static API documentation data.

use crate::response_types::{ApiDocsResponse, EndpointDoc, ParamDoc, ResponseDoc};

const fn body_param(description: &'static str, required: bool) -> ParamDoc {
    ParamDoc { name: "body", location: "body", required, description }
}

const fn response(status: u16, description: &'static str) -> ResponseDoc {
    ResponseDoc { status, description }
}

/// Returns API documentation for the fleet endpoints.
pub fn get_fleet_docs() -> ApiDocsResponse {
    ApiDocsResponse {
        title: "Taxi fleet API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: vec![
            EndpointDoc {
                path: "/fleet",
                method: "GET",
                description: "List every taxi in the fleet",
                params: vec![],
                responses: vec![response(200, "Array of taxi records")],
            },
            EndpointDoc {
                path: "/fleet",
                method: "POST",
                description: "Add a taxi; driver defaults to 'Unknown', status to 'free'",
                params: vec![body_param(
                    "JSON object {number, driver?, status?}; number is required",
                    true,
                )],
                responses: vec![
                    response(201, "Created taxi record"),
                    response(400, "Missing number or unparseable body"),
                ],
            },
            EndpointDoc {
                path: "/fleet/status/{status}",
                method: "GET",
                description: "List taxis whose status matches exactly (case-sensitive)",
                params: vec![ParamDoc {
                    name: "status",
                    location: "path",
                    required: true,
                    description: "Taxi status, e.g. 'free' or 'busy'",
                }],
                responses: vec![response(200, "Array of matching taxi records, possibly empty")],
            },
            EndpointDoc {
                path: "/fleet/{id}",
                method: "PUT",
                description: "Update any subset of number, driver and status; omitted fields are kept",
                params: vec![
                    ParamDoc {
                        name: "id",
                        location: "path",
                        required: true,
                        description: "Taxi identity",
                    },
                    body_param("JSON object with any of {number, driver, status}", true),
                ],
                responses: vec![
                    response(200, "Updated taxi record"),
                    response(400, "Missing or unparseable body"),
                    response(404, "No taxi with this id"),
                ],
            },
            EndpointDoc {
                path: "/fleet/{id}",
                method: "DELETE",
                description: "Remove one taxi",
                params: vec![ParamDoc {
                    name: "id",
                    location: "path",
                    required: true,
                    description: "Taxi identity",
                }],
                responses: vec![
                    response(200, "{\"result\": true}"),
                    response(404, "No taxi with this id"),
                ],
            },
            EndpointDoc {
                path: "/fleet/reset",
                method: "DELETE",
                description: "Remove every taxi from the fleet",
                params: vec![],
                responses: vec![response(200, "{\"result\": true}")],
            },
        ],
    }
}
