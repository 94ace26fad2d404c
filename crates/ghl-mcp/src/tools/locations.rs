use super::{Access, CategoryInfo, Endpoint, Param, ParamKind, opt};
use crate::backend::HttpMethod;

pub const CATEGORY: CategoryInfo = CategoryInfo {
    name: "locations",
    label: "Locations",
    description: "Manage sub-accounts (locations) and their tags, custom fields, custom values \
                  and templates",
};

const LOCATION_ID: Param = Param::new("locationId", "The location ID");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "locations_get",
        title: "Get Location",
        description: "Get a location by ID",
        method: HttpMethod::Get,
        path: "/locations/{locationId}",
        params: &[LOCATION_ID],
        access: Access::Read,
    },
    Endpoint {
        name: "locations_update",
        title: "Update Location",
        description: "Update an existing location",
        method: HttpMethod::Put,
        path: "/locations/{locationId}",
        params: &[
            LOCATION_ID,
            Param::new("companyId", "The agency company ID"),
            opt("name", "Business name"),
            opt("address", "Street address"),
            opt("city", "City"),
            opt("state", "State"),
            opt("country", "Country code"),
            opt("postalCode", "Postal code"),
            opt("phone", "Phone number"),
            opt("website", "Website URL"),
            opt("timezone", "Timezone"),
        ],
        access: Access::Update,
    },
    Endpoint {
        name: "locations_search",
        title: "Search Locations",
        description: "Search locations",
        method: HttpMethod::Get,
        path: "/locations/search",
        params: &[
            opt("companyId", "The agency company ID"),
            opt("skip", "Number of results to skip"),
            opt("limit", "Maximum number of results"),
            opt("order", "Sort order (asc, desc)"),
            opt("email", "Filter by email address"),
        ],
        access: Access::Read,
    },
    Endpoint {
        name: "locations_create",
        title: "Create Location",
        description: "Create a new location",
        method: HttpMethod::Post,
        path: "/locations/",
        params: &[
            Param::new("companyId", "The agency company ID"),
            Param::new("name", "Business name"),
            opt("address", "Street address"),
            opt("city", "City"),
            opt("state", "State"),
            opt("country", "Country code"),
            opt("postalCode", "Postal code"),
            opt("phone", "Phone number"),
            opt("website", "Website URL"),
            opt("timezone", "Timezone"),
        ],
        access: Access::Create,
    },
    Endpoint {
        name: "locations_delete",
        title: "Delete Location",
        description: "Delete a location by ID",
        method: HttpMethod::Delete,
        path: "/locations/{locationId}",
        params: &[
            LOCATION_ID,
            Param::new("deleteTwilioAccount", "Also delete the location's Twilio account")
                .kind(ParamKind::Boolean),
        ],
        access: Access::Delete,
    },
    Endpoint {
        name: "locations_getTags",
        title: "Get Location Tags",
        description: "Get tags for a location",
        method: HttpMethod::Get,
        path: "/locations/{locationId}/tags",
        params: &[LOCATION_ID],
        access: Access::Read,
    },
    Endpoint {
        name: "locations_createTag",
        title: "Create Location Tag",
        description: "Create a tag for a location",
        method: HttpMethod::Post,
        path: "/locations/{locationId}/tags",
        params: &[LOCATION_ID, Param::new("name", "Tag name")],
        access: Access::Create,
    },
    Endpoint {
        name: "locations_getCustomFields",
        title: "Get Location Custom Fields",
        description: "Get custom fields for a location",
        method: HttpMethod::Get,
        path: "/locations/{locationId}/customFields",
        params: &[LOCATION_ID],
        access: Access::Read,
    },
    Endpoint {
        name: "locations_getCustomValues",
        title: "Get Location Custom Values",
        description: "Get custom values for a location",
        method: HttpMethod::Get,
        path: "/locations/{locationId}/customValues",
        params: &[LOCATION_ID],
        access: Access::Read,
    },
    Endpoint {
        name: "locations_createCustomValue",
        title: "Create Location Custom Value",
        description: "Create a custom value for a location",
        method: HttpMethod::Post,
        path: "/locations/{locationId}/customValues",
        params: &[
            LOCATION_ID,
            Param::new("name", "Custom value name"),
            Param::new("value", "Custom value"),
        ],
        access: Access::Create,
    },
    Endpoint {
        name: "locations_getTemplates",
        title: "Get Location Templates",
        description: "Get email/SMS templates for a location",
        method: HttpMethod::Get,
        path: "/locations/{locationId}/templates",
        params: &[
            LOCATION_ID,
            Param::new("originId", "Origin ID of the templates"),
            opt("deleted", "Include deleted templates").kind(ParamKind::Boolean),
            opt("skip", "Number of results to skip"),
            opt("limit", "Maximum number of results"),
            opt("type", "Template type (sms, email, whatsapp)"),
        ],
        access: Access::Read,
    },
];
