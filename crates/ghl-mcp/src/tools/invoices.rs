use super::{Access, CategoryInfo, Endpoint, Param, ParamKind, opt};
use crate::backend::HttpMethod;

pub const CATEGORY: CategoryInfo = CategoryInfo {
    name: "invoices",
    label: "Invoices",
    description: "List, create, update, send, void and delete invoices and record payments",
};

const INVOICE_ID: Param = Param::new("invoiceId", "The invoice ID");
const ALT_ID: Param = Param::new("altId", "Location ID the invoice belongs to");
const ALT_TYPE: Param = Param::new("altType", "Owner type, always \"location\"");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "invoices_list",
        title: "List Invoices",
        description: "List invoices",
        method: HttpMethod::Get,
        path: "/invoices/",
        params: &[
            ALT_ID,
            ALT_TYPE,
            Param::new("limit", "Maximum number of results"),
            Param::new("offset", "Number of results to skip"),
            opt("status", "Filter by status (draft, sent, payment_processing, paid, void, partially_paid)"),
            opt("contactId", "Filter by contact ID"),
            opt("startAt", "Issued on or after (YYYY-MM-DD)"),
            opt("endAt", "Issued on or before (YYYY-MM-DD)"),
            opt("search", "Search by invoice number or name"),
            opt("paymentMode", "Payment mode (live, test)"),
            opt("sortField", "Sort field"),
            opt("sortOrder", "Sort order (ascend, descend)"),
        ],
        access: Access::Read,
    },
    Endpoint {
        name: "invoices_get",
        title: "Get Invoice",
        description: "Get an invoice by ID",
        method: HttpMethod::Get,
        path: "/invoices/{invoiceId}",
        params: &[INVOICE_ID, ALT_ID, ALT_TYPE],
        access: Access::Read,
    },
    Endpoint {
        name: "invoices_create",
        title: "Create Invoice",
        description: "Create a new invoice",
        method: HttpMethod::Post,
        path: "/invoices/",
        params: &[
            ALT_ID,
            ALT_TYPE,
            Param::new("name", "Invoice name"),
            Param::new("currency", "Currency code, e.g. USD"),
            Param::new("issueDate", "Issue date (YYYY-MM-DD)"),
            opt("dueDate", "Due date (YYYY-MM-DD)"),
            opt("liveMode", "Create in live payment mode").kind(ParamKind::Boolean),
            Param::new("businessDetails", "Business details shown on the invoice").kind(ParamKind::Object),
            Param::new("contactDetails", "Details of the billed contact").kind(ParamKind::Object),
            opt("sentTo", "Email and phone recipients").kind(ParamKind::Object),
            Param::new("items", "Line items").kind(ParamKind::ObjectArray),
            opt("discount", "Invoice-level discount").kind(ParamKind::Object),
            opt("title", "Invoice title"),
            opt("termsNotes", "Terms and notes"),
            opt("invoiceNumber", "Invoice number"),
        ],
        access: Access::Create,
    },
    Endpoint {
        name: "invoices_update",
        title: "Update Invoice",
        description: "Update an existing invoice",
        method: HttpMethod::Put,
        path: "/invoices/{invoiceId}",
        params: &[
            INVOICE_ID,
            ALT_ID,
            ALT_TYPE,
            Param::new("name", "Invoice name"),
            Param::new("currency", "Currency code, e.g. USD"),
            Param::new("issueDate", "Issue date (YYYY-MM-DD)"),
            Param::new("dueDate", "Due date (YYYY-MM-DD)"),
            Param::new("invoiceItems", "Line items").kind(ParamKind::ObjectArray),
            opt("title", "Invoice title"),
            opt("description", "Invoice description"),
            opt("termsNotes", "Terms and notes"),
            opt("contactId", "The contact ID"),
        ],
        access: Access::Update,
    },
    Endpoint {
        name: "invoices_delete",
        title: "Delete Invoice",
        description: "Delete an invoice",
        method: HttpMethod::Delete,
        path: "/invoices/{invoiceId}",
        params: &[INVOICE_ID, ALT_ID, ALT_TYPE],
        access: Access::Delete,
    },
    Endpoint {
        name: "invoices_send",
        title: "Send Invoice",
        description: "Send an invoice",
        method: HttpMethod::Post,
        path: "/invoices/{invoiceId}/send",
        params: &[
            INVOICE_ID,
            ALT_ID,
            ALT_TYPE,
            Param::new("userId", "ID of the sending user"),
            Param::new("action", "Delivery channel (email, sms, sms_and_email, send_manually)"),
            Param::new("liveMode", "Send in live payment mode").kind(ParamKind::Boolean),
        ],
        access: Access::Create,
    },
    Endpoint {
        name: "invoices_void",
        title: "Void Invoice",
        description: "Void an invoice",
        method: HttpMethod::Post,
        path: "/invoices/{invoiceId}/void",
        params: &[INVOICE_ID, ALT_ID, ALT_TYPE],
        access: Access::Delete,
    },
    Endpoint {
        name: "invoices_recordPayment",
        title: "Record Invoice Payment",
        description: "Record a manual payment for an invoice",
        method: HttpMethod::Post,
        path: "/invoices/{invoiceId}/record-payment",
        params: &[
            INVOICE_ID,
            ALT_ID,
            ALT_TYPE,
            Param::new("mode", "Payment mode (cash, card, cheque, bank_transfer, other)"),
            opt("card", "Card details for card payments").kind(ParamKind::Object),
            opt("cheque", "Cheque details for cheque payments").kind(ParamKind::Object),
            Param::new("notes", "Payment notes"),
            opt("amount", "Amount paid; defaults to the amount due").kind(ParamKind::Number),
        ],
        access: Access::Create,
    },
];
