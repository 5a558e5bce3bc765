//! Fleet rental: equipment, rentals, maintenance and staff.

use crate::config::{CreateHook, FieldDef, KeyDef, Messages, NarrowPatch, Operations, ResourceDef, SqlType};

pub static EQUIPMENT: ResourceDef = ResourceDef {
    family: "fleet",
    path: "equipment",
    table: "Equipment",
    label: "Equipment",
    key: KeyDef::Surrogate { field: "equipmentID", column: "EquipmentID" },
    fields: &[
        FieldDef::new("equipmentcode", "EquipmentCode", SqlType::Text).required(),
        FieldDef::new("name", "EquipmentName", SqlType::Text).required(),
        FieldDef::new("description", "EquipmentDescription", SqlType::Text).default_text(""),
        FieldDef::new("value", "EquipmentValue", SqlType::Numeric).required().nonzero(),
        FieldDef::new("category", "EquipmentCategory", SqlType::Text).required(),
        FieldDef::new("type", "EquipmentType", SqlType::Text).required(),
        FieldDef::new("trackingid", "EquipmentTrackingID", SqlType::Text),
        FieldDef::new("availability", "EquipmentAvailability", SqlType::Text)
            .not_null()
            .default_text("Available"),
    ],
    unique: &[&["EquipmentCode"]],
    operations: Operations::ALL,
    messages: Messages::new(
        "Equipment created.",
        "Equipment retrieved.",
        "Equipment retrieved.",
        "Equipment updated.",
        "Equipment deleted.",
        "Equipment not found.",
    )
    .duplicate("Equipment code already exists."),
    sensitive: false,
    create_hook: CreateHook::None,
    joins: &[],
    narrow_patches: &[],
};

pub static RENTED_EQUIPMENT: ResourceDef = ResourceDef {
    family: "fleet",
    path: "rented-equipment",
    table: "RentedEquipment",
    label: "Rented Equipment",
    key: KeyDef::Surrogate { field: "rentedEquipmentID", column: "RentedEquipmentID" },
    fields: &[
        FieldDef::reference("rentalid", "RentalID").required(),
        FieldDef::reference("equipmentid", "EquipmentID").required(),
    ],
    unique: &[],
    operations: Operations::ALL,
    messages: Messages::new(
        "Rented Equipment record created.",
        "Rented Equipment retrieved.",
        "Rented Equipment retrieved.",
        "Rented Equipment updated.",
        "Rented Equipment deleted.",
        "Rented Equipment not found.",
    ),
    sensitive: false,
    create_hook: CreateHook::None,
    joins: &[],
    narrow_patches: &[],
};

pub static RENTAL: ResourceDef = ResourceDef {
    family: "fleet",
    path: "rental",
    table: "Rental",
    label: "Rental",
    key: KeyDef::Surrogate { field: "rentalID", column: "RentalID" },
    fields: &[
        FieldDef::new("rentalcode", "RentalCode", SqlType::Text).required(),
        FieldDef::reference("accountid", "AccountID").required(),
        FieldDef::new("start", "StartDate", SqlType::Date).required(),
        FieldDef::new("end", "EndDate", SqlType::Date).required(),
        FieldDef::new("status", "RentalStatus", SqlType::Text)
            .not_null()
            .default_text("Reserved"),
        FieldDef::new("notes", "Notes", SqlType::Text).default_text(""),
        FieldDef::new("scope", "Scope", SqlType::Text).not_null().default_text("Internal"),
    ],
    unique: &[&["RentalCode"]],
    operations: Operations::ALL,
    messages: Messages::new(
        "Rental created.",
        "Rentals retrieved.",
        "Rental retrieved.",
        "Rental updated.",
        "Rental deleted.",
        "Rental not found.",
    )
    .duplicate("Rental code already exists."),
    sensitive: false,
    create_hook: CreateHook::None,
    joins: &[],
    narrow_patches: &[NarrowPatch {
        segment: "rental-status",
        fields: &["status"],
        message: "Rental status updated.",
    }],
};

pub static MAINTENANCE: ResourceDef = ResourceDef {
    family: "fleet",
    path: "maintenance",
    table: "Maintenance",
    label: "Maintenance record",
    key: KeyDef::Surrogate { field: "maintenanceID", column: "MaintenanceID" },
    fields: &[
        FieldDef::new("maintenancecode", "MaintenanceCode", SqlType::Text).required(),
        FieldDef::reference("equipmentid", "EquipmentID").required(),
        FieldDef::reference("rentalid", "RentalID"),
        FieldDef::new("lastservice", "LastServiceDate", SqlType::Date),
        FieldDef::new("nextservice", "NextServiceDate", SqlType::Date),
        FieldDef::new("status", "MaintenanceStatus", SqlType::Text)
            .not_null()
            .default_text("open"),
        FieldDef::new("opened", "OpenedAt", SqlType::Timestamp).required(),
        FieldDef::new("closed", "ClosedAt", SqlType::Timestamp),
        FieldDef::new("outcome", "Outcome", SqlType::Text).default_text("Working"),
        FieldDef::new("technician", "Technician", SqlType::Text).default_text(""),
        FieldDef::new("notes", "Notes", SqlType::Text).default_text(""),
    ],
    unique: &[&["MaintenanceCode"]],
    operations: Operations::ALL,
    messages: Messages::new(
        "Maintenance record created.",
        "Maintenance records retrieved.",
        "Maintenance records retrieved.",
        "Maintenance records updated.",
        "Maintenance records deleted.",
        "Maintenance records not found.",
    )
    .duplicate("Maintenance code already exists."),
    sensitive: false,
    create_hook: CreateHook::None,
    joins: &[],
    narrow_patches: &[],
};

pub static EMPLOYEE: ResourceDef = ResourceDef {
    family: "fleet",
    path: "employee",
    table: "Employee",
    label: "Employee",
    key: KeyDef::Surrogate { field: "employeeID", column: "EmployeeID" },
    fields: &[
        FieldDef::new("name", "EmployeeName", SqlType::Text).required(),
        FieldDef::new("username", "Username", SqlType::Text).required(),
        FieldDef::new("password", "PasswordHash", SqlType::Text).required().secret(),
    ],
    unique: &[&["Username"]],
    operations: Operations::ALL,
    messages: Messages::new(
        "Employee created.",
        "Employees retrieved.",
        "Employee retrieved.",
        "Employee updated.",
        "Employee deleted.",
        "Employee not found.",
    )
    .duplicate("Username already exists."),
    sensitive: true,
    create_hook: CreateHook::None,
    joins: &[],
    narrow_patches: &[
        NarrowPatch {
            segment: "name",
            fields: &["name"],
            message: "Employee name updated.",
        },
        NarrowPatch {
            segment: "username",
            fields: &["username"],
            message: "Employee username updated.",
        },
        NarrowPatch {
            segment: "password",
            fields: &["password"],
            message: "Employee password updated.",
        },
    ],
};
