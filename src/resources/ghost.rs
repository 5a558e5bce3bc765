//! Ghost diagnostics: inquiry forms, responses and trait links.

use crate::config::{CreateHook, FieldDef, JoinRead, KeyDef, Messages, Operations, ResourceDef, SqlType};

pub static INQUIRY_FORMS: ResourceDef = ResourceDef {
    family: "ghostDiagnostics",
    path: "inquiry-forms",
    table: "InquiryForm",
    label: "Inquiry form",
    key: KeyDef::Surrogate { field: "inquiryFormID", column: "InquiryFormID" },
    fields: &[
        FieldDef::reference("accountID", "AccountID").required().fixed(),
        FieldDef::new("description", "Description", SqlType::Text),
    ],
    unique: &[],
    operations: Operations::ALL,
    messages: Messages::new(
        "Inquiry form created.",
        "Inquiry forms retrieved.",
        "Inquiry form retrieved.",
        "Inquiry form updated.",
        "Inquiry form deleted.",
        "Inquiry form not found.",
    )
    .missing("Missing accountID."),
    sensitive: true,
    create_hook: CreateHook::None,
    joins: &[],
    narrow_patches: &[],
};

pub static INQUIRY_FORM_RESPONSES: ResourceDef = ResourceDef {
    family: "ghostDiagnostics",
    path: "inquiry-form-responses",
    table: "InquiryFormResponse",
    label: "Response",
    key: KeyDef::Surrogate { field: "inquiryFormResponseID", column: "InquiryFormResponseID" },
    fields: &[
        FieldDef::reference("inquiryFormID", "InquiryFormID").required().fixed(),
        FieldDef::reference("ghostID", "GhostID").required(),
        FieldDef::new("description", "Description", SqlType::Text),
    ],
    unique: &[],
    operations: Operations::ALL,
    messages: Messages::new(
        "Response created.",
        "Responses retrieved.",
        "Response retrieved.",
        "Response updated.",
        "Response deleted.",
        "Response not found.",
    ),
    sensitive: false,
    create_hook: CreateHook::None,
    joins: &[],
    narrow_patches: &[],
};

pub static TRAITS: ResourceDef = ResourceDef {
    family: "ghostDiagnostics",
    path: "traits",
    table: "Trait",
    label: "Trait",
    key: KeyDef::Surrogate { field: "traitID", column: "TraitID" },
    fields: &[
        FieldDef::new("name", "TraitName", SqlType::Text).required(),
        FieldDef::new("type", "TraitType", SqlType::Text).required(),
    ],
    unique: &[],
    operations: Operations::ALL,
    messages: Messages::new(
        "Trait created.",
        "Traits retrieved.",
        "Trait retrieved.",
        "Trait updated.",
        "Trait deleted.",
        "Trait not found.",
    ),
    sensitive: false,
    create_hook: CreateHook::None,
    joins: &[],
    narrow_patches: &[],
};

const TRAIT_COLUMNS: &[&str] = &["TraitName", "TraitType"];

pub static CHOSEN_TRAITS: ResourceDef = ResourceDef {
    family: "ghostDiagnostics",
    path: "chosen-traits",
    table: "ChosenTrait",
    label: "Chosen trait",
    key: KeyDef::Composite(["inquiryFormID", "traitID"]),
    fields: &[
        FieldDef::reference("inquiryFormID", "InquiryFormID").required().fixed(),
        FieldDef::reference("traitID", "TraitID").required().fixed(),
    ],
    unique: &[],
    operations: Operations::LINK,
    messages: Messages::new(
        "Chosen trait added.",
        "Chosen traits retrieved.",
        "Chosen trait retrieved.",
        "Chosen trait updated.",
        "Chosen trait removed.",
        "Chosen trait not found.",
    )
    .duplicate("Trait already chosen for this form."),
    sensitive: false,
    create_hook: CreateHook::None,
    joins: &[JoinRead {
        segment: "form",
        filter_column: "InquiryFormID",
        table: "Trait",
        on_column: "TraitID",
        columns: TRAIT_COLUMNS,
        message: "Chosen traits retrieved.",
    }],
    narrow_patches: &[],
};

pub static IDENTIFYING_TRAITS: ResourceDef = ResourceDef {
    family: "ghostDiagnostics",
    path: "identifying-traits",
    table: "IdentifyingTrait",
    label: "Identifying trait",
    key: KeyDef::Composite(["ghostID", "traitID"]),
    fields: &[
        FieldDef::reference("ghostID", "GhostID").required().fixed(),
        FieldDef::reference("traitID", "TraitID").required().fixed(),
    ],
    unique: &[],
    operations: Operations::LINK,
    messages: Messages::new(
        "Identifying trait added.",
        "Identifying traits retrieved.",
        "Identifying trait retrieved.",
        "Identifying trait updated.",
        "Identifying trait removed.",
        "Trait not found for ghost.",
    )
    .missing("Missing fields.")
    .duplicate("Trait already exists for ghost."),
    sensitive: false,
    create_hook: CreateHook::None,
    joins: &[JoinRead {
        segment: "ghost",
        filter_column: "GhostID",
        table: "Trait",
        on_column: "TraitID",
        columns: TRAIT_COLUMNS,
        message: "Identifying traits retrieved.",
    }],
    narrow_patches: &[],
};
