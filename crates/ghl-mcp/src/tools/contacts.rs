use super::{Access, CategoryInfo, Endpoint, Param, ParamKind, opt};
use crate::backend::HttpMethod;

pub const CATEGORY: CategoryInfo = CategoryInfo {
    name: "contacts",
    label: "Contacts",
    description: "Search, create, update and delete contacts; manage their tags, tasks, notes, \
                  followers, campaigns and workflows",
};

const CONTACT_ID: Param = Param::new("contactId", "The contact ID");
const LOCATION_ID: Param = Param::new("locationId", "The location ID");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "contacts_search",
        title: "Search Contacts",
        description: "Search contacts with advanced filters",
        method: HttpMethod::Post,
        path: "/contacts/search",
        params: &[
            LOCATION_ID,
            opt("filters", "Array of filter objects").kind(ParamKind::ObjectArray),
            opt("page", "Page number").kind(ParamKind::Number),
            opt("pageLimit", "Results per page").kind(ParamKind::Number),
        ],
        access: Access::Read,
    },
    Endpoint {
        name: "contacts_get",
        title: "Get Contact",
        description: "Get a contact by ID",
        method: HttpMethod::Get,
        path: "/contacts/{contactId}",
        params: &[CONTACT_ID],
        access: Access::Read,
    },
    Endpoint {
        name: "contacts_create",
        title: "Create Contact",
        description: "Create a new contact",
        method: HttpMethod::Post,
        path: "/contacts/",
        params: &[
            LOCATION_ID,
            opt("firstName", "First name"),
            opt("lastName", "Last name"),
            opt("name", "Full name"),
            opt("email", "Email address"),
            opt("phone", "Phone number"),
            opt("dateOfBirth", "Date of birth"),
            opt("address1", "Address line 1"),
            opt("city", "City"),
            opt("state", "State"),
            opt("postalCode", "Postal code"),
            opt("country", "Country"),
            opt("website", "Website URL"),
            opt("timezone", "Timezone"),
            opt("dnd", "Do Not Disturb flag").kind(ParamKind::Boolean),
            opt("tags", "Tags to add").kind(ParamKind::StringArray),
            opt("customFields", "Custom field values").kind(ParamKind::ObjectArray),
            opt("source", "Contact source"),
            opt("companyName", "Company name"),
        ],
        access: Access::Create,
    },
    Endpoint {
        name: "contacts_update",
        title: "Update Contact",
        description: "Update an existing contact",
        method: HttpMethod::Put,
        path: "/contacts/{contactId}",
        params: &[
            CONTACT_ID,
            opt("firstName", "First name"),
            opt("lastName", "Last name"),
            opt("name", "Full name"),
            opt("email", "Email address"),
            opt("phone", "Phone number"),
            opt("dateOfBirth", "Date of birth"),
            opt("address1", "Address line 1"),
            opt("city", "City"),
            opt("state", "State"),
            opt("postalCode", "Postal code"),
            opt("country", "Country"),
            opt("website", "Website URL"),
            opt("timezone", "Timezone"),
            opt("dnd", "Do Not Disturb flag").kind(ParamKind::Boolean),
            opt("tags", "Tags (replaces existing tags)").kind(ParamKind::StringArray),
            opt("customFields", "Custom field values").kind(ParamKind::ObjectArray),
            opt("source", "Contact source"),
            opt("companyName", "Company name"),
        ],
        access: Access::Update,
    },
    Endpoint {
        name: "contacts_delete",
        title: "Delete Contact",
        description: "Delete a contact by ID",
        method: HttpMethod::Delete,
        path: "/contacts/{contactId}",
        params: &[CONTACT_ID],
        access: Access::Delete,
    },
    Endpoint {
        name: "contacts_upsert",
        title: "Upsert Contact",
        description: "Upsert a contact (create or update based on matching criteria)",
        method: HttpMethod::Post,
        path: "/contacts/upsert",
        params: &[
            LOCATION_ID,
            opt("firstName", "First name"),
            opt("lastName", "Last name"),
            opt("name", "Full name"),
            opt("email", "Email address"),
            opt("phone", "Phone number"),
            opt("address1", "Address line 1"),
            opt("city", "City"),
            opt("state", "State"),
            opt("postalCode", "Postal code"),
            opt("country", "Country"),
            opt("timezone", "Timezone"),
            opt("tags", "Tags").kind(ParamKind::StringArray),
            opt("customFields", "Custom field values").kind(ParamKind::ObjectArray),
            opt("source", "Contact source"),
            opt("companyName", "Company name"),
        ],
        access: Access::Update,
    },
    Endpoint {
        name: "contacts_get_duplicate",
        title: "Get Duplicate Contact",
        description: "Get duplicate contact by email or phone number",
        method: HttpMethod::Get,
        path: "/contacts/search/duplicate",
        params: &[
            LOCATION_ID,
            opt("number", "Phone number to check"),
            opt("email", "Email address to check"),
        ],
        access: Access::Read,
    },
    Endpoint {
        name: "contacts_get_by_business",
        title: "Get Contacts by Business",
        description: "Get contacts by business ID",
        method: HttpMethod::Get,
        path: "/contacts/business/{businessId}",
        params: &[
            Param::new("businessId", "The business ID"),
            LOCATION_ID,
            opt("limit", "Maximum number of results"),
            opt("skip", "Number of results to skip"),
            opt("query", "Search query"),
        ],
        access: Access::Read,
    },
    Endpoint {
        name: "contacts_add_tags",
        title: "Add Tags to Contact",
        description: "Add tags to a contact",
        method: HttpMethod::Post,
        path: "/contacts/{contactId}/tags",
        params: &[
            CONTACT_ID,
            Param::new("tags", "Tags to add").kind(ParamKind::StringArray),
        ],
        access: Access::Create,
    },
    Endpoint {
        name: "contacts_remove_tags",
        title: "Remove Tags from Contact",
        description: "Remove tags from a contact",
        method: HttpMethod::Delete,
        path: "/contacts/{contactId}/tags",
        params: &[
            CONTACT_ID,
            Param::new("tags", "Tags to remove")
                .kind(ParamKind::StringArray)
                .body(),
        ],
        access: Access::Delete,
    },
    Endpoint {
        name: "contacts_get_tasks",
        title: "Get Contact Tasks",
        description: "Get all tasks for a contact",
        method: HttpMethod::Get,
        path: "/contacts/{contactId}/tasks",
        params: &[CONTACT_ID],
        access: Access::Read,
    },
    Endpoint {
        name: "contacts_create_task",
        title: "Create Contact Task",
        description: "Create a task for a contact",
        method: HttpMethod::Post,
        path: "/contacts/{contactId}/tasks",
        params: &[
            CONTACT_ID,
            Param::new("title", "Task title"),
            opt("body", "Task body"),
            Param::new("dueDate", "Due date (ISO 8601)"),
            Param::new("completed", "Whether the task is completed").kind(ParamKind::Boolean),
            opt("assignedTo", "User ID to assign the task to"),
        ],
        access: Access::Create,
    },
    Endpoint {
        name: "contacts_get_notes",
        title: "Get Contact Notes",
        description: "Get all notes for a contact",
        method: HttpMethod::Get,
        path: "/contacts/{contactId}/notes",
        params: &[CONTACT_ID],
        access: Access::Read,
    },
    Endpoint {
        name: "contacts_create_note",
        title: "Create Contact Note",
        description: "Create a note for a contact",
        method: HttpMethod::Post,
        path: "/contacts/{contactId}/notes",
        params: &[
            CONTACT_ID,
            Param::new("body", "Note body"),
            opt("userId", "ID of the user creating the note"),
        ],
        access: Access::Create,
    },
    Endpoint {
        name: "contacts_add_to_campaign",
        title: "Add Contact to Campaign",
        description: "Add a contact to a campaign",
        method: HttpMethod::Post,
        path: "/contacts/{contactId}/campaigns/{campaignId}",
        params: &[CONTACT_ID, Param::new("campaignId", "The campaign ID")],
        access: Access::Create,
    },
    Endpoint {
        name: "contacts_remove_from_campaign",
        title: "Remove Contact from Campaign",
        description: "Remove a contact from a campaign",
        method: HttpMethod::Delete,
        path: "/contacts/{contactId}/campaigns/{campaignId}",
        params: &[CONTACT_ID, Param::new("campaignId", "The campaign ID")],
        access: Access::Delete,
    },
    Endpoint {
        name: "contacts_add_to_workflow",
        title: "Add Contact to Workflow",
        description: "Add a contact to a workflow",
        method: HttpMethod::Post,
        path: "/contacts/{contactId}/workflow/{workflowId}",
        params: &[
            CONTACT_ID,
            Param::new("workflowId", "The workflow ID"),
            opt("eventStartTime", "Event start time (ISO 8601)"),
        ],
        access: Access::Create,
    },
    Endpoint {
        name: "contacts_add_followers",
        title: "Add Followers to Contact",
        description: "Add followers to a contact",
        method: HttpMethod::Post,
        path: "/contacts/{contactId}/followers",
        params: &[
            CONTACT_ID,
            Param::new("followers", "User IDs to add as followers").kind(ParamKind::StringArray),
        ],
        access: Access::Create,
    },
    Endpoint {
        name: "contacts_remove_followers",
        title: "Remove Followers from Contact",
        description: "Remove followers from a contact",
        method: HttpMethod::Delete,
        path: "/contacts/{contactId}/followers",
        params: &[
            CONTACT_ID,
            Param::new("followers", "User IDs to remove as followers")
                .kind(ParamKind::StringArray)
                .body(),
        ],
        access: Access::Delete,
    },
];
