use super::{Access, CategoryInfo, Endpoint, Param, ParamKind, opt};
use crate::backend::HttpMethod;

pub const CATEGORY: CategoryInfo = CategoryInfo {
    name: "opportunities",
    label: "Opportunities",
    description: "Search, create, update and delete opportunities and list sales pipelines",
};

const OPPORTUNITY_ID: Param = Param::new("id", "The opportunity ID");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "opportunities_search",
        title: "Search Opportunities",
        description: "Search opportunities",
        method: HttpMethod::Get,
        path: "/opportunities/search",
        params: &[
            Param::new("location_id", "The location ID"),
            opt("pipeline_id", "Filter by pipeline ID"),
            opt("pipeline_stage_id", "Filter by pipeline stage ID"),
            opt("contact_id", "Filter by contact ID"),
            opt("status", "Filter by status (open, won, lost, abandoned, all)"),
            opt("assigned_to", "Filter by assigned user ID"),
            opt("q", "Search query"),
            opt("limit", "Maximum number of results").kind(ParamKind::Number),
            opt("page", "Page number").kind(ParamKind::Number),
        ],
        access: Access::Read,
    },
    Endpoint {
        name: "opportunities_get",
        title: "Get Opportunity",
        description: "Get an opportunity by ID",
        method: HttpMethod::Get,
        path: "/opportunities/{id}",
        params: &[OPPORTUNITY_ID],
        access: Access::Read,
    },
    Endpoint {
        name: "opportunities_create",
        title: "Create Opportunity",
        description: "Create a new opportunity",
        method: HttpMethod::Post,
        path: "/opportunities/",
        params: &[
            Param::new("locationId", "The location ID"),
            Param::new("pipelineId", "The pipeline ID"),
            Param::new("name", "Opportunity name"),
            Param::new("pipelineStageId", "The pipeline stage ID"),
            Param::new("contactId", "The contact ID"),
            Param::new("status", "Status (open, won, lost, abandoned)"),
            opt("monetaryValue", "Monetary value").kind(ParamKind::Number),
            opt("assignedTo", "Assigned user ID"),
        ],
        access: Access::Create,
    },
    Endpoint {
        name: "opportunities_update",
        title: "Update Opportunity",
        description: "Update an existing opportunity",
        method: HttpMethod::Put,
        path: "/opportunities/{id}",
        params: &[
            OPPORTUNITY_ID,
            opt("name", "Opportunity name"),
            opt("pipelineId", "The pipeline ID"),
            opt("pipelineStageId", "The pipeline stage ID"),
            opt("status", "Status (open, won, lost, abandoned)"),
            opt("monetaryValue", "Monetary value").kind(ParamKind::Number),
            opt("assignedTo", "Assigned user ID"),
        ],
        access: Access::Update,
    },
    Endpoint {
        name: "opportunities_delete",
        title: "Delete Opportunity",
        description: "Delete an opportunity",
        method: HttpMethod::Delete,
        path: "/opportunities/{id}",
        params: &[OPPORTUNITY_ID],
        access: Access::Delete,
    },
    Endpoint {
        name: "opportunities_upsert",
        title: "Upsert Opportunity",
        description: "Upsert an opportunity (create or update)",
        method: HttpMethod::Post,
        path: "/opportunities/upsert",
        params: &[
            Param::new("locationId", "The location ID"),
            Param::new("pipelineId", "The pipeline ID"),
            Param::new("name", "Opportunity name"),
            Param::new("pipelineStageId", "The pipeline stage ID"),
            Param::new("contactId", "The contact ID"),
            Param::new("status", "Status (open, won, lost, abandoned)"),
            opt("monetaryValue", "Monetary value").kind(ParamKind::Number),
            opt("assignedTo", "Assigned user ID"),
        ],
        access: Access::Update,
    },
    Endpoint {
        name: "opportunities_getPipelines",
        title: "Get Pipelines",
        description: "Get all pipelines for a location",
        method: HttpMethod::Get,
        path: "/opportunities/pipelines",
        params: &[Param::new("locationId", "The location ID")],
        access: Access::Read,
    },
];
