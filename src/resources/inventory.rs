//! Inventory: products, categories, stock levels and supplier orders.

use crate::config::{CreateHook, FieldDef, KeyDef, Messages, NarrowPatch, Operations, ResourceDef, SqlType};

pub static PRODUCTS: ResourceDef = ResourceDef {
    family: "inventory",
    path: "products",
    table: "Product",
    label: "Product",
    key: KeyDef::Surrogate { field: "productID", column: "ProductID" },
    fields: &[
        FieldDef::new("name", "Name", SqlType::Text).required(),
        FieldDef::new("description", "Description", SqlType::Text).default_text(""),
        FieldDef::new("price", "Price", SqlType::Numeric).required().nonzero(),
        FieldDef::new("stock", "Stock", SqlType::Int).not_null().default_int(0),
        FieldDef::new("status", "Status", SqlType::Text).not_null().default_text("active"),
    ],
    unique: &[],
    operations: Operations::ALL,
    messages: Messages::new(
        "Product created.",
        "Products retrieved.",
        "Product retrieved.",
        "Product updated.",
        "Product deleted.",
        "Product not found.",
    ),
    sensitive: false,
    create_hook: CreateHook::None,
    joins: &[],
    narrow_patches: &[],
};

pub static CATEGORIES: ResourceDef = ResourceDef {
    family: "inventory",
    path: "categories",
    table: "Category",
    label: "Category",
    key: KeyDef::Surrogate { field: "categoryID", column: "CategoryID" },
    fields: &[
        FieldDef::new("name", "Name", SqlType::Text).required(),
        FieldDef::new("description", "Description", SqlType::Text).default_text(""),
    ],
    unique: &[],
    operations: Operations::ALL,
    messages: Messages::new(
        "Category created.",
        "Categories retrieved.",
        "Category retrieved.",
        "Category updated.",
        "Category deleted.",
        "Category not found.",
    )
    .missing("Missing required field: name."),
    sensitive: false,
    create_hook: CreateHook::None,
    joins: &[],
    narrow_patches: &[],
};

pub static PRODUCT_STOCK: ResourceDef = ResourceDef {
    family: "inventory",
    path: "product-stock",
    table: "ProductStock",
    label: "Product stock",
    key: KeyDef::Surrogate { field: "productStockID", column: "ProductStockID" },
    fields: &[
        FieldDef::reference("productid", "ProductID").required(),
        FieldDef::new("qty", "Quantity", SqlType::Int).required(),
        FieldDef::new("restock", "RestockThreshold", SqlType::Int),
        FieldDef::new("lastrestock", "LastRestockDate", SqlType::Date),
    ],
    unique: &[],
    operations: Operations::ALL,
    messages: Messages::new(
        "Product stock created.",
        "Product stock retrieved.",
        "Product stock retrieved.",
        "Product stock updated.",
        "Product stock deleted.",
        "Product stock not found.",
    ),
    sensitive: false,
    create_hook: CreateHook::None,
    joins: &[],
    narrow_patches: &[],
};

pub static STOCK_ORDER: ResourceDef = ResourceDef {
    family: "inventory",
    path: "stock-order",
    table: "StockOrder",
    label: "Stock order",
    key: KeyDef::Surrogate { field: "stockOrderID", column: "StockOrderID" },
    fields: &[
        FieldDef::reference("productid", "ProductID").required(),
        FieldDef::new("qty", "Quantity", SqlType::Int).required(),
        FieldDef::new("suppliername", "SupplierName", SqlType::Text).required(),
        FieldDef::new("ordered", "OrderedDate", SqlType::Date).required(),
        FieldDef::new("received", "ReceivedDate", SqlType::Date),
    ],
    unique: &[],
    operations: Operations::ALL,
    messages: Messages::new(
        "Stock order created.",
        "Stock orders retrieved.",
        "Stock order retrieved.",
        "Stock order updated.",
        "Stock order deleted.",
        "Stock order not found.",
    ),
    sensitive: false,
    create_hook: CreateHook::None,
    joins: &[],
    narrow_patches: &[NarrowPatch {
        segment: "received",
        fields: &["received"],
        message: "Stock order received date updated.",
    }],
};
