use super::{Access, CategoryInfo, Endpoint, Param, ParamKind, opt};
use crate::backend::HttpMethod;

pub const CATEGORY: CategoryInfo = CategoryInfo {
    name: "users",
    label: "Users",
    description: "Look up, search, create, update and delete users",
};

const USER_ID: Param = Param::new("userId", "The user ID");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "users_get",
        title: "Get User",
        description: "Get a user by ID",
        method: HttpMethod::Get,
        path: "/users/{userId}",
        params: &[USER_ID],
        access: Access::Read,
    },
    Endpoint {
        name: "users_search",
        title: "Search Users",
        description: "Search users",
        method: HttpMethod::Get,
        path: "/users/search",
        params: &[
            Param::new("companyId", "The agency company ID"),
            opt("locationId", "Filter by location ID"),
            opt("query", "Search query"),
            opt("limit", "Maximum number of results"),
            opt("skip", "Number of results to skip"),
            opt("type", "Filter by user type (agency, account)"),
            opt("role", "Filter by role (admin, user)"),
            opt("ids", "Comma-separated user IDs"),
            opt("sort", "Sort field"),
            opt("sortDirection", "Sort direction (asc, desc)"),
        ],
        access: Access::Read,
    },
    Endpoint {
        name: "users_update",
        title: "Update User",
        description: "Update an existing user",
        method: HttpMethod::Put,
        path: "/users/{userId}",
        params: &[
            USER_ID,
            opt("firstName", "First name"),
            opt("lastName", "Last name"),
            opt("email", "Email address"),
            opt("phone", "Phone number"),
            opt("type", "User type (agency, account)"),
            opt("role", "Role (admin, user)"),
            opt("companyId", "The agency company ID"),
            opt("locationIds", "Locations the user can access").kind(ParamKind::StringArray),
        ],
        access: Access::Update,
    },
    Endpoint {
        name: "users_delete",
        title: "Delete User",
        description: "Delete a user",
        method: HttpMethod::Delete,
        path: "/users/{userId}",
        params: &[USER_ID],
        access: Access::Delete,
    },
    Endpoint {
        name: "users_create",
        title: "Create User",
        description: "Create a new user",
        method: HttpMethod::Post,
        path: "/users/",
        params: &[
            Param::new("companyId", "The agency company ID"),
            Param::new("firstName", "First name"),
            Param::new("lastName", "Last name"),
            Param::new("email", "Email address"),
            Param::new("password", "Initial password"),
            opt("phone", "Phone number"),
            Param::new("type", "User type (agency, account)"),
            Param::new("role", "Role (admin, user)"),
            Param::new("locationIds", "Locations the user can access").kind(ParamKind::StringArray),
        ],
        access: Access::Create,
    },
];
