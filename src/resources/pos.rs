//! Point-of-sale: customer accounts, addresses, payments and transactions.

use crate::config::{CreateHook, FieldDef, KeyDef, Messages, Operations, ResourceDef, SqlType};

pub static CUSTOMERS: ResourceDef = ResourceDef {
    family: "pos",
    path: "customers",
    table: "CustomerAccount",
    label: "Customer",
    key: KeyDef::Surrogate { field: "accountID", column: "AccountID" },
    fields: &[
        FieldDef::new("email", "Email", SqlType::Text).required(),
        FieldDef::new("username", "Username", SqlType::Text).required(),
        FieldDef::new("password", "PasswordHash", SqlType::Text).required().secret(),
        FieldDef::new("status", "Status", SqlType::Text).not_null().default_text("active"),
    ],
    unique: &[&["Email"], &["Username"]],
    operations: Operations::ALL,
    messages: Messages::new(
        "Customer account created.",
        "Customer accounts retrieved.",
        "Customer retrieved.",
        "Customer account updated.",
        "Customer deleted.",
        "Customer not found.",
    )
    .duplicate("Email or username already exists."),
    sensitive: true,
    create_hook: CreateHook::None,
    joins: &[],
    narrow_patches: &[],
};

pub static CUSTOMER_ADDRESS: ResourceDef = ResourceDef {
    family: "pos",
    path: "customeraddress",
    table: "CustomerAddress",
    label: "Address",
    key: KeyDef::Surrogate { field: "addressID", column: "AddressID" },
    fields: &[
        FieldDef::reference("accountID", "AccountID").required().fixed(),
        FieldDef::new("line1", "Line1", SqlType::Text).required(),
        FieldDef::new("line2", "Line2", SqlType::Text).default_text(""),
        FieldDef::new("city", "City", SqlType::Text).required(),
        FieldDef::new("provinceState", "ProvinceState", SqlType::Text).required(),
        FieldDef::new("postalCode", "PostalCode", SqlType::Text).required(),
        FieldDef::new("country", "Country", SqlType::Text).required(),
    ],
    unique: &[&["AccountID"]],
    operations: Operations::ALL,
    messages: Messages::new(
        "Customer address created.",
        "Customer addresses retrieved.",
        "Customer address retrieved.",
        "Customer address updated.",
        "Customer address deleted.",
        "Address not found.",
    )
    .duplicate("Address for this account already exists."),
    sensitive: false,
    create_hook: CreateHook::None,
    joins: &[],
    narrow_patches: &[],
};

pub static PAYMENTS: ResourceDef = ResourceDef {
    family: "pos",
    path: "payments",
    table: "Payment",
    label: "Payment",
    key: KeyDef::Surrogate { field: "paymentID", column: "PaymentID" },
    fields: &[
        FieldDef::reference("accountID", "AccountID").required().fixed(),
        FieldDef::reference("billingAddressID", "BillingAddressID").fixed(),
        FieldDef::new("cardLast4", "CardLast4", SqlType::Text).fixed(),
        FieldDef::new("cardToken", "CardToken", SqlType::Text).fixed(),
        FieldDef::new("paymentMethod", "PaymentMethod", SqlType::Text)
            .fixed()
            .default_text("credit_card"),
        FieldDef::new("amount", "Amount", SqlType::Numeric).required().nonzero().fixed(),
        FieldDef::new("paidAt", "PaidAt", SqlType::Timestamp)
            .fixed()
            .db_default("CURRENT_TIMESTAMP"),
    ],
    unique: &[],
    operations: Operations::APPEND_ONLY,
    messages: Messages::new(
        "Payment recorded.",
        "Payments retrieved.",
        "Payment retrieved.",
        "Payment updated.",
        "Payment deleted.",
        "Payment not found.",
    ),
    sensitive: true,
    create_hook: CreateHook::CardPayment,
    joins: &[],
    narrow_patches: &[],
};

pub static ITEM_TRANSACTIONS: ResourceDef = ResourceDef {
    family: "pos",
    path: "item-transactions",
    table: "ItemTransaction",
    label: "Item transaction",
    key: KeyDef::Surrogate { field: "itemTransactionID", column: "ItemTransactionID" },
    fields: &[
        FieldDef::reference("paymentID", "PaymentID").required().fixed(),
        FieldDef::reference("productID", "ProductID").required().fixed(),
        FieldDef::new("quantity", "Quantity", SqlType::Int).nonzero().fixed().default_int(1),
        FieldDef::new("subtotal", "Subtotal", SqlType::Numeric).required().nonzero().fixed(),
    ],
    unique: &[],
    operations: Operations::APPEND_ONLY,
    messages: Messages::new(
        "Item transaction recorded.",
        "Item transactions retrieved.",
        "Item transaction retrieved.",
        "Item transaction updated.",
        "Item transaction deleted.",
        "Item transaction not found.",
    ),
    sensitive: false,
    create_hook: CreateHook::None,
    joins: &[],
    narrow_patches: &[],
};

pub static SERVICE_TRANSACTIONS: ResourceDef = ResourceDef {
    family: "pos",
    path: "service-transactions",
    table: "ServiceTransaction",
    label: "Service transaction",
    key: KeyDef::Surrogate { field: "serviceTransactionID", column: "ServiceTransactionID" },
    fields: &[
        FieldDef::reference("paymentID", "PaymentID").required().fixed(),
        FieldDef::reference("serviceID", "ServiceID").required().fixed(),
        FieldDef::new("hoursWorked", "HoursWorked", SqlType::Numeric).fixed().default_int(0),
        FieldDef::new("subtotal", "Subtotal", SqlType::Numeric).required().nonzero().fixed(),
    ],
    unique: &[],
    operations: Operations::APPEND_ONLY,
    messages: Messages::new(
        "Service transaction recorded.",
        "Service transactions retrieved.",
        "Service transaction retrieved.",
        "Service transaction updated.",
        "Service transaction deleted.",
        "Service transaction not found.",
    ),
    sensitive: false,
    create_hook: CreateHook::None,
    joins: &[],
    narrow_patches: &[],
};

/// Field used to look up accounts at login.
pub const LOGIN_FIELD: &str = "username";
pub const ACTIVE_STATUS: &str = "active";
