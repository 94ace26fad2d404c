use super::{Access, CategoryInfo, Endpoint, Param, ParamKind, opt};
use crate::backend::HttpMethod;

pub const CATEGORY: CategoryInfo = CategoryInfo {
    name: "calendars",
    label: "Calendars",
    description: "Manage calendars, calendar groups, free slots, appointments and block slots",
};

const CALENDAR_ID: Param = Param::new("calendarId", "The calendar ID");
const EVENT_ID: Param = Param::new("eventId", "The event ID");
const GROUP_ID: Param = Param::new("groupId", "The calendar group ID");
const LOCATION_ID: Param = Param::new("locationId", "The location ID");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "calendars_list",
        title: "List Calendars",
        description: "Get all calendars for a location",
        method: HttpMethod::Get,
        path: "/calendars/",
        params: &[
            LOCATION_ID,
            opt("groupId", "Filter by calendar group ID"),
            opt("showDrafted", "Include draft calendars").kind(ParamKind::Boolean),
        ],
        access: Access::Read,
    },
    Endpoint {
        name: "calendars_create",
        title: "Create Calendar",
        description: "Create a new calendar",
        method: HttpMethod::Post,
        path: "/calendars/",
        params: &[
            LOCATION_ID,
            Param::new("name", "Calendar name"),
            opt("description", "Calendar description"),
            opt("slug", "URL slug"),
            opt("widgetSlug", "Widget URL slug"),
            opt("calendarType", "Calendar type (round_robin, event, class_booking, collective, service_booking, personal)"),
            opt("widgetType", "Widget type (default, classic)"),
            opt("eventTitle", "Title template for booked events"),
            opt("eventColor", "Event color"),
            opt("meetingLocation", "Meeting location"),
            opt("slotDuration", "Slot duration in minutes").kind(ParamKind::Number),
            opt("slotBuffer", "Buffer after each slot in minutes").kind(ParamKind::Number),
            opt("slotInterval", "Interval between slots in minutes").kind(ParamKind::Number),
            opt("preBuffer", "Buffer before each slot in minutes").kind(ParamKind::Number),
            opt("appoinmentPerSlot", "Maximum appointments per slot").kind(ParamKind::Number),
            opt("appoinmentPerDay", "Maximum appointments per day").kind(ParamKind::Number),
            opt("openHours", "Weekly open hours").kind(ParamKind::ObjectArray),
            opt("enableRecurring", "Allow recurring bookings").kind(ParamKind::Boolean),
            opt("formId", "Booking form ID"),
            opt("stickyContact", "Keep contacts with the same team member").kind(ParamKind::Boolean),
            opt("isLivePaymentMode", "Take live payments").kind(ParamKind::Boolean),
            opt("autoConfirm", "Confirm bookings automatically").kind(ParamKind::Boolean),
            opt("consentLabel", "Consent checkbox label"),
            opt("calendarCoverImage", "Cover image URL"),
            opt("notifications", "Notification settings").kind(ParamKind::ObjectArray),
            opt("groupId", "Calendar group ID"),
            opt("teamMembers", "Team members").kind(ParamKind::ObjectArray),
        ],
        access: Access::Create,
    },
    Endpoint {
        name: "calendars_get",
        title: "Get Calendar",
        description: "Get a calendar by ID",
        method: HttpMethod::Get,
        path: "/calendars/{calendarId}",
        params: &[CALENDAR_ID],
        access: Access::Read,
    },
    Endpoint {
        name: "calendars_update",
        title: "Update Calendar",
        description: "Update an existing calendar",
        method: HttpMethod::Put,
        path: "/calendars/{calendarId}",
        params: &[
            CALENDAR_ID,
            opt("name", "Calendar name"),
            opt("description", "Calendar description"),
            opt("slug", "URL slug"),
            opt("widgetSlug", "Widget URL slug"),
            opt("widgetType", "Widget type (default, classic)"),
            opt("eventTitle", "Title template for booked events"),
            opt("eventColor", "Event color"),
            opt("meetingLocation", "Meeting location"),
            opt("slotDuration", "Slot duration in minutes").kind(ParamKind::Number),
            opt("slotBuffer", "Buffer after each slot in minutes").kind(ParamKind::Number),
            opt("slotInterval", "Interval between slots in minutes").kind(ParamKind::Number),
            opt("preBuffer", "Buffer before each slot in minutes").kind(ParamKind::Number),
            opt("appoinmentPerSlot", "Maximum appointments per slot").kind(ParamKind::Number),
            opt("appoinmentPerDay", "Maximum appointments per day").kind(ParamKind::Number),
            opt("openHours", "Weekly open hours").kind(ParamKind::ObjectArray),
            opt("enableRecurring", "Allow recurring bookings").kind(ParamKind::Boolean),
            opt("formId", "Booking form ID"),
            opt("stickyContact", "Keep contacts with the same team member").kind(ParamKind::Boolean),
            opt("isLivePaymentMode", "Take live payments").kind(ParamKind::Boolean),
            opt("autoConfirm", "Confirm bookings automatically").kind(ParamKind::Boolean),
            opt("consentLabel", "Consent checkbox label"),
            opt("calendarCoverImage", "Cover image URL"),
            opt("notifications", "Notification settings").kind(ParamKind::ObjectArray),
            opt("groupId", "Calendar group ID"),
            opt("teamMembers", "Team members").kind(ParamKind::ObjectArray),
        ],
        access: Access::Update,
    },
    Endpoint {
        name: "calendars_delete",
        title: "Delete Calendar",
        description: "Delete a calendar by ID",
        method: HttpMethod::Delete,
        path: "/calendars/{calendarId}",
        params: &[CALENDAR_ID],
        access: Access::Delete,
    },
    Endpoint {
        name: "calendars_get_slots",
        title: "Get Calendar Slots",
        description: "Get free/available slots for a calendar",
        method: HttpMethod::Get,
        path: "/calendars/{calendarId}/free-slots",
        params: &[
            CALENDAR_ID,
            Param::new("startDate", "Start of the range (epoch milliseconds)").kind(ParamKind::Number),
            Param::new("endDate", "End of the range (epoch milliseconds)").kind(ParamKind::Number),
            opt("timezone", "Timezone for the returned slots"),
            opt("userId", "Only slots for this user"),
        ],
        access: Access::Read,
    },
    Endpoint {
        name: "calendars_get_groups",
        title: "Get Calendar Groups",
        description: "Get all calendar groups for a location",
        method: HttpMethod::Get,
        path: "/calendars/groups",
        params: &[LOCATION_ID],
        access: Access::Read,
    },
    Endpoint {
        name: "calendars_create_group",
        title: "Create Calendar Group",
        description: "Create a new calendar group",
        method: HttpMethod::Post,
        path: "/calendars/groups",
        params: &[
            LOCATION_ID,
            Param::new("name", "Group name"),
            opt("description", "Group description"),
            Param::new("slug", "URL slug"),
        ],
        access: Access::Create,
    },
    Endpoint {
        name: "calendars_delete_group",
        title: "Delete Calendar Group",
        description: "Delete a calendar group by ID",
        method: HttpMethod::Delete,
        path: "/calendars/groups/{groupId}",
        params: &[GROUP_ID],
        access: Access::Delete,
    },
    Endpoint {
        name: "calendars_edit_group",
        title: "Edit Calendar Group",
        description: "Edit an existing calendar group",
        method: HttpMethod::Put,
        path: "/calendars/groups/{groupId}",
        params: &[
            GROUP_ID,
            opt("name", "Group name"),
            opt("description", "Group description"),
            opt("slug", "URL slug"),
        ],
        access: Access::Update,
    },
    Endpoint {
        name: "calendars_create_appointment",
        title: "Create Appointment",
        description: "Create a new appointment",
        method: HttpMethod::Post,
        path: "/calendars/events/appointments",
        params: &[
            CALENDAR_ID,
            LOCATION_ID,
            Param::new("contactId", "The contact ID"),
            Param::new("startTime", "Start time (ISO 8601)"),
            Param::new("endTime", "End time (ISO 8601)"),
            opt("title", "Appointment title"),
            opt("appointmentStatus", "Status (new, confirmed, cancelled, showed, noshow, invalid)"),
            opt("assignedUserId", "Assigned user ID"),
            opt("address", "Meeting address"),
            opt("ignoreDateRange", "Ignore the calendar's date range").kind(ParamKind::Boolean),
            opt("toNotify", "Send notifications").kind(ParamKind::Boolean),
            opt("notes", "Appointment notes"),
        ],
        access: Access::Create,
    },
    Endpoint {
        name: "calendars_edit_appointment",
        title: "Edit Appointment",
        description: "Edit an existing appointment",
        method: HttpMethod::Put,
        path: "/calendars/events/appointments/{eventId}",
        params: &[
            EVENT_ID,
            opt("calendarId", "Move to this calendar"),
            opt("startTime", "Start time (ISO 8601)"),
            opt("endTime", "End time (ISO 8601)"),
            opt("title", "Appointment title"),
            opt("appointmentStatus", "Status (new, confirmed, cancelled, showed, noshow, invalid)"),
            opt("assignedUserId", "Assigned user ID"),
            opt("address", "Meeting address"),
            opt("ignoreDateRange", "Ignore the calendar's date range").kind(ParamKind::Boolean),
            opt("toNotify", "Send notifications").kind(ParamKind::Boolean),
            opt("notes", "Appointment notes"),
        ],
        access: Access::Update,
    },
    Endpoint {
        name: "calendars_get_appointment",
        title: "Get Appointment",
        description: "Get an appointment by event ID",
        method: HttpMethod::Get,
        path: "/calendars/events/appointments/{eventId}",
        params: &[EVENT_ID],
        access: Access::Read,
    },
    Endpoint {
        name: "calendars_get_events",
        title: "Get Calendar Events",
        description: "Get calendar events within a time range",
        method: HttpMethod::Get,
        path: "/calendars/events",
        params: &[
            LOCATION_ID,
            Param::new("startTime", "Range start (epoch milliseconds)"),
            Param::new("endTime", "Range end (epoch milliseconds)"),
            opt("calendarId", "Filter by calendar ID"),
            opt("userId", "Filter by user ID"),
            opt("groupId", "Filter by calendar group ID"),
        ],
        access: Access::Read,
    },
    Endpoint {
        name: "calendars_delete_event",
        title: "Delete Calendar Event",
        description: "Delete a calendar event",
        method: HttpMethod::Delete,
        path: "/calendars/events/{eventId}",
        params: &[EVENT_ID],
        access: Access::Delete,
    },
    Endpoint {
        name: "calendars_create_block_slot",
        title: "Create Block Slot",
        description: "Create a block slot on a calendar",
        method: HttpMethod::Post,
        path: "/calendars/events/block-slots",
        params: &[
            CALENDAR_ID,
            LOCATION_ID,
            Param::new("startTime", "Start time (ISO 8601)"),
            Param::new("endTime", "End time (ISO 8601)"),
            opt("title", "Block slot title"),
            opt("assignedUserId", "Assigned user ID"),
        ],
        access: Access::Create,
    },
];
