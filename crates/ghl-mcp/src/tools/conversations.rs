use super::{Access, CategoryInfo, Endpoint, Param, ParamKind, opt};
use crate::backend::HttpMethod;

pub const CATEGORY: CategoryInfo = CategoryInfo {
    name: "conversations",
    label: "Conversations",
    description: "Search and manage conversations, read and send messages, and handle message \
                  status, recordings and attachments",
};

const CONVERSATION_ID: Param = Param::new("conversationId", "The conversation ID");
const MESSAGE_ID: Param = Param::new("messageId", "The message ID");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "conversations_search",
        title: "Search Conversations",
        description: "Search conversations",
        method: HttpMethod::Get,
        path: "/conversations/search",
        params: &[
            Param::new("locationId", "The location ID"),
            opt("contactId", "Filter by contact ID"),
            opt("assignedTo", "Filter by assigned user ID"),
            opt("query", "Search query"),
            opt("sort", "Sort order (asc, desc)"),
            opt("limit", "Maximum number of results").kind(ParamKind::Number),
            opt("status", "Filter by status (all, read, unread, starred, recents)"),
            opt("lastMessageType", "Filter by type of the last message"),
        ],
        access: Access::Read,
    },
    Endpoint {
        name: "conversations_get",
        title: "Get Conversation",
        description: "Get a conversation by ID",
        method: HttpMethod::Get,
        path: "/conversations/{conversationId}",
        params: &[CONVERSATION_ID],
        access: Access::Read,
    },
    Endpoint {
        name: "conversations_create",
        title: "Create Conversation",
        description: "Create a new conversation",
        method: HttpMethod::Post,
        path: "/conversations/",
        params: &[
            Param::new("locationId", "The location ID"),
            Param::new("contactId", "The contact ID"),
        ],
        access: Access::Create,
    },
    Endpoint {
        name: "conversations_update",
        title: "Update Conversation",
        description: "Update a conversation",
        method: HttpMethod::Put,
        path: "/conversations/{conversationId}",
        params: &[
            CONVERSATION_ID,
            opt("locationId", "The location ID"),
            opt("assignedTo", "Assigned user ID"),
            opt("starred", "Star or unstar the conversation").kind(ParamKind::Boolean),
            opt("unreadCount", "Unread message count").kind(ParamKind::Number),
        ],
        access: Access::Update,
    },
    Endpoint {
        name: "conversations_delete",
        title: "Delete Conversation",
        description: "Delete a conversation",
        method: HttpMethod::Delete,
        path: "/conversations/{conversationId}",
        params: &[CONVERSATION_ID],
        access: Access::Delete,
    },
    Endpoint {
        name: "conversations_getMessages",
        title: "Get Messages",
        description: "Get messages for a conversation",
        method: HttpMethod::Get,
        path: "/conversations/{conversationId}/messages",
        params: &[
            CONVERSATION_ID,
            opt("lastMessageId", "Return messages before this message ID"),
            opt("limit", "Maximum number of messages").kind(ParamKind::Number),
            opt("type", "Filter by message type"),
        ],
        access: Access::Read,
    },
    Endpoint {
        name: "conversations_sendMessage",
        title: "Send Message",
        description: "Send a new message",
        method: HttpMethod::Post,
        path: "/conversations/messages",
        params: &[
            Param::new("type", "Message type (SMS, Email, WhatsApp, GMB, IG, FB, Custom, Live_Chat)"),
            Param::new("contactId", "The contact ID"),
            opt("message", "Message text"),
            opt("subject", "Email subject"),
            opt("html", "Email HTML body"),
            opt("conversationId", "The conversation ID"),
            opt("conversationProviderId", "Conversation provider ID"),
            opt("emailFrom", "Sender email address"),
        ],
        access: Access::Create,
    },
    Endpoint {
        name: "conversations_addInboundMessage",
        title: "Add Inbound Message",
        description: "Add an inbound message to a conversation",
        method: HttpMethod::Post,
        path: "/conversations/messages/inbound",
        params: &[
            Param::new("type", "Message type"),
            CONVERSATION_ID,
            Param::new("conversationProviderId", "Conversation provider ID"),
            Param::new("message", "Message text"),
        ],
        access: Access::Create,
    },
    Endpoint {
        name: "conversations_cancelScheduledMessage",
        title: "Cancel Scheduled Message",
        description: "Cancel a scheduled message",
        method: HttpMethod::Delete,
        path: "/conversations/messages/{messageId}/schedule",
        params: &[MESSAGE_ID],
        access: Access::Delete,
    },
    Endpoint {
        name: "conversations_updateMessageStatus",
        title: "Update Message Status",
        description: "Update the status of a message",
        method: HttpMethod::Put,
        path: "/conversations/messages/{messageId}/status",
        params: &[
            MESSAGE_ID,
            Param::new("status", "New status (delivered, failed, pending, read)"),
            opt("error", "Error details for a failed message").kind(ParamKind::Object),
        ],
        access: Access::Update,
    },
    Endpoint {
        name: "conversations_getMessageRecording",
        title: "Get Message Recording",
        description: "Get the recording for a message by message ID",
        method: HttpMethod::Get,
        path: "/conversations/messages/{messageId}/locations/{locationId}/recording",
        params: &[Param::new("locationId", "The location ID"), MESSAGE_ID],
        access: Access::Read,
    },
    Endpoint {
        name: "conversations_uploadFileAttachments",
        title: "Upload File Attachments",
        description: "Upload a file attachment to a conversation",
        method: HttpMethod::Post,
        path: "/conversations/messages/upload",
        params: &[
            CONVERSATION_ID,
            Param::new("locationId", "The location ID"),
            Param::new("attachmentUrl", "URL of the file to attach"),
        ],
        access: Access::Create,
    },
];
