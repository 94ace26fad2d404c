use super::{Access, CategoryInfo, Endpoint, Param};
use crate::backend::HttpMethod;

pub const CATEGORY: CategoryInfo = CategoryInfo {
    name: "workflows",
    label: "Workflows",
    description: "List automation workflows",
};

pub const ENDPOINTS: &[Endpoint] = &[Endpoint {
    name: "workflows_list",
    title: "List Workflows",
    description: "Get workflows for a location",
    method: HttpMethod::Get,
    path: "/workflows/",
    params: &[Param::new("locationId", "The location ID")],
    access: Access::Read,
}];
