//! Reviews of products, rentals and services. Ratings are integers from 1 to 5.

use crate::config::{CreateHook, FieldDef, KeyDef, Messages, Operations, ResourceDef, SqlType};
use crate::service::{RATING_MAX, RATING_MIN};

const REVIEW_KEY: KeyDef = KeyDef::Surrogate { field: "ReviewID", column: "ReviewID" };
const MISSING: &str = "Missing required fields";

const fn rating() -> FieldDef {
    FieldDef::new("rating", "Rating", SqlType::Int).required().range(RATING_MIN, RATING_MAX)
}

const fn comment() -> FieldDef {
    FieldDef::new("comment", "Comment", SqlType::Text).default_text("")
}

pub static PRODUCT_REVIEWS: ResourceDef = ResourceDef {
    family: "reviews",
    path: "products",
    table: "ProductReview",
    label: "Product Review",
    key: REVIEW_KEY,
    fields: &[
        FieldDef::reference("productID", "ProductID").required().fixed(),
        FieldDef::reference("accountID", "AccountID").required().fixed(),
        rating(),
        comment(),
    ],
    unique: &[],
    operations: Operations::ALL,
    messages: Messages::new(
        "Product Review created.",
        "Product Reviews retrieved.",
        "Product Review retrieved.",
        "Product Review updated.",
        "Product Review deleted.",
        "Product Review not found.",
    )
    .missing(MISSING),
    sensitive: false,
    create_hook: CreateHook::None,
    joins: &[],
    narrow_patches: &[],
};

pub static RENTAL_REVIEWS: ResourceDef = ResourceDef {
    family: "reviews",
    path: "rentals",
    table: "RentalReview",
    label: "Rental Review",
    key: REVIEW_KEY,
    fields: &[
        FieldDef::reference("rentalID", "RentalID").required().fixed(),
        FieldDef::reference("accountID", "AccountID").required().fixed(),
        rating(),
        comment(),
    ],
    unique: &[],
    operations: Operations::ALL,
    messages: Messages::new(
        "Rental Review created.",
        "Rental Reviews retrieved.",
        "Rental Review retrieved.",
        "Rental Review updated.",
        "Rental Review deleted.",
        "Rental Review not found.",
    )
    .missing(MISSING),
    sensitive: false,
    create_hook: CreateHook::None,
    joins: &[],
    narrow_patches: &[],
};

pub static SERVICE_REVIEWS: ResourceDef = ResourceDef {
    family: "reviews",
    path: "services",
    table: "ServiceReview",
    label: "Service Review",
    key: REVIEW_KEY,
    fields: &[
        FieldDef::reference("serviceID", "ServiceID").required().fixed(),
        FieldDef::reference("accountID", "AccountID").required().fixed(),
        rating(),
        comment(),
    ],
    unique: &[],
    operations: Operations::ALL,
    messages: Messages::new(
        "Service Review created.",
        "Service Reviews retrieved.",
        "Service Review retrieved.",
        "Service Review updated.",
        "Service Review deleted.",
        "Service Review not found.",
    )
    .missing(MISSING),
    sensitive: false,
    create_hook: CreateHook::None,
    joins: &[],
    narrow_patches: &[],
};
