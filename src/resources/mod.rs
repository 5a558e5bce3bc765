//! Every table exposed over HTTP, grouped by route family.

pub mod fleet;
pub mod ghost;
pub mod inventory;
pub mod pos;
pub mod reviews;

use crate::config::ResourceDef;

/// All resource definitions in mount order.
pub fn all() -> Vec<&'static ResourceDef> {
    vec![
        &pos::CUSTOMERS,
        &pos::CUSTOMER_ADDRESS,
        &pos::PAYMENTS,
        &pos::ITEM_TRANSACTIONS,
        &pos::SERVICE_TRANSACTIONS,
        &inventory::PRODUCTS,
        &inventory::CATEGORIES,
        &inventory::PRODUCT_STOCK,
        &inventory::STOCK_ORDER,
        &fleet::EQUIPMENT,
        &fleet::RENTED_EQUIPMENT,
        &fleet::RENTAL,
        &fleet::MAINTENANCE,
        &fleet::EMPLOYEE,
        &ghost::INQUIRY_FORMS,
        &ghost::INQUIRY_FORM_RESPONSES,
        &ghost::TRAITS,
        &ghost::CHOSEN_TRAITS,
        &ghost::IDENTIFYING_TRAITS,
        &reviews::PRODUCT_REVIEWS,
        &reviews::RENTAL_REVIEWS,
        &reviews::SERVICE_REVIEWS,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResourceCatalog;

    #[test]
    fn catalog_is_valid() {
        let catalog = ResourceCatalog::new(&all()).unwrap();
        assert_eq!(
            catalog.families(),
            vec!["pos", "inventory", "fleet", "ghostDiagnostics", "reviews"]
        );
    }

    #[test]
    fn secrets_never_projected() {
        for def in all() {
            assert!(def.projected().all(|f| !f.secret), "{}", def.route_key());
        }
        assert!(pos::CUSTOMERS.has_secrets());
        assert!(fleet::EMPLOYEE.has_secrets());
    }

    #[test]
    fn review_routes_share_a_path_segment_with_inventory_without_conflict() {
        let catalog = ResourceCatalog::new(&all()).unwrap();
        assert_eq!(catalog.get("reviews", "products").unwrap().table, "ProductReview");
        assert_eq!(catalog.get("inventory", "products").unwrap().table, "Product");
    }
}
