//! The route table.
//!
//! ```text
//! /                                    -> Home              (public)
//! /categories/{categoryId}/products    -> CategoryProducts  (public)
//! /products/{productId}                -> ProductDetail     (public)
//! /cart                                -> Cart              (customer)
//! /wishlist                            -> Wishlist          (customer)
//! /checkout                            -> Checkout          (customer)
//! /orders                              -> Orders            (customer)
//! /orders/{orderId}                    -> OrderDetail       (customer)
//! /profile                             -> Profile           (customer)
//! /chats/{conversationId}              -> Chat              (customer)
//! /support/returns                     -> (unimplemented)   (customer)
//! /seller/dashboard                    -> SellerDashboard   (seller)
//! /seller/products                     -> SellerProducts    (seller)
//! /seller/orders                       -> SellerOrders      (seller)
//! /admin/dashboard                     -> AdminDashboard    (admin)
//! /admin/customers                     -> AdminCustomers    (admin)
//! /admin/customers/{customerId}        -> AdminCustomerDetail (admin)
//! /admin/sellers                       -> AdminSellers      (admin)
//! /admin/sellers/{sellerId}            -> AdminSellerDetail (admin)
//! ```

use souk_core::Role;

use crate::screen::{Screen, ScreenId};

/// Logical route names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKey {
    Home,
    CategoryProducts,
    ProductDetail,
    Cart,
    Wishlist,
    Checkout,
    Orders,
    OrderDetail,
    Profile,
    Chat,
    SupportReturns,
    SellerDashboard,
    SellerProducts,
    SellerOrders,
    AdminDashboard,
    AdminCustomers,
    AdminCustomerDetail,
    AdminSellers,
    AdminSellerDetail,
}

/// One row of the route table.
pub struct RouteEntry {
    pub key: RouteKey,
    /// Pure URL builder. `None` substitutes the route's `:param`
    /// placeholder (for building `<Route path=...>` patterns).
    pub path: fn(Option<&str>) -> String,
    /// Role required to enter, or `None` for public routes. Enforced
    /// by the layout guard, not here.
    pub permission: Option<Role>,
    pub screen: Screen,
}

// ---------------------------------------------------------------------------
// Path builders
// ---------------------------------------------------------------------------

fn home_path(_: Option<&str>) -> String {
    "/".to_string()
}

fn category_products_path(category_id: Option<&str>) -> String {
    format!("/categories/{}/products", category_id.unwrap_or(":categoryId"))
}

fn product_detail_path(product_id: Option<&str>) -> String {
    format!("/products/{}", product_id.unwrap_or(":productId"))
}

fn cart_path(_: Option<&str>) -> String {
    "/cart".to_string()
}

fn wishlist_path(_: Option<&str>) -> String {
    "/wishlist".to_string()
}

fn checkout_path(_: Option<&str>) -> String {
    "/checkout".to_string()
}

fn orders_path(_: Option<&str>) -> String {
    "/orders".to_string()
}

fn order_detail_path(order_id: Option<&str>) -> String {
    format!("/orders/{}", order_id.unwrap_or(":orderId"))
}

fn profile_path(_: Option<&str>) -> String {
    "/profile".to_string()
}

fn chat_path(conversation_id: Option<&str>) -> String {
    format!("/chats/{}", conversation_id.unwrap_or(":conversationId"))
}

fn support_returns_path(_: Option<&str>) -> String {
    "/support/returns".to_string()
}

fn seller_dashboard_path(_: Option<&str>) -> String {
    "/seller/dashboard".to_string()
}

fn seller_products_path(_: Option<&str>) -> String {
    "/seller/products".to_string()
}

fn seller_orders_path(_: Option<&str>) -> String {
    "/seller/orders".to_string()
}

fn admin_dashboard_path(_: Option<&str>) -> String {
    "/admin/dashboard".to_string()
}

fn admin_customers_path(_: Option<&str>) -> String {
    "/admin/customers".to_string()
}

fn admin_customer_detail_path(customer_id: Option<&str>) -> String {
    format!("/admin/customers/{}", customer_id.unwrap_or(":customerId"))
}

fn admin_sellers_path(_: Option<&str>) -> String {
    "/admin/sellers".to_string()
}

fn admin_seller_detail_path(seller_id: Option<&str>) -> String {
    format!("/admin/sellers/{}", seller_id.unwrap_or(":sellerId"))
}

// ---------------------------------------------------------------------------
// The table
// ---------------------------------------------------------------------------

/// Every route in the storefront, public first, then per role.
pub static ROUTES: &[RouteEntry] = &[
    RouteEntry {
        key: RouteKey::Home,
        path: home_path,
        permission: None,
        screen: Screen::Routed(ScreenId::Home),
    },
    RouteEntry {
        key: RouteKey::CategoryProducts,
        path: category_products_path,
        permission: None,
        screen: Screen::Routed(ScreenId::CategoryProducts),
    },
    RouteEntry {
        key: RouteKey::ProductDetail,
        path: product_detail_path,
        permission: None,
        screen: Screen::Routed(ScreenId::ProductDetail),
    },
    RouteEntry {
        key: RouteKey::Cart,
        path: cart_path,
        permission: Some(Role::Customer),
        screen: Screen::Routed(ScreenId::Cart),
    },
    RouteEntry {
        key: RouteKey::Wishlist,
        path: wishlist_path,
        permission: Some(Role::Customer),
        screen: Screen::Routed(ScreenId::Wishlist),
    },
    RouteEntry {
        key: RouteKey::Checkout,
        path: checkout_path,
        permission: Some(Role::Customer),
        screen: Screen::Routed(ScreenId::Checkout),
    },
    RouteEntry {
        key: RouteKey::Orders,
        path: orders_path,
        permission: Some(Role::Customer),
        screen: Screen::Routed(ScreenId::Orders),
    },
    RouteEntry {
        key: RouteKey::OrderDetail,
        path: order_detail_path,
        permission: Some(Role::Customer),
        screen: Screen::Routed(ScreenId::OrderDetail),
    },
    RouteEntry {
        key: RouteKey::Profile,
        path: profile_path,
        permission: Some(Role::Customer),
        screen: Screen::Routed(ScreenId::Profile),
    },
    RouteEntry {
        key: RouteKey::Chat,
        path: chat_path,
        permission: Some(Role::Customer),
        screen: Screen::Routed(ScreenId::Chat),
    },
    RouteEntry {
        key: RouteKey::SupportReturns,
        path: support_returns_path,
        permission: Some(Role::Customer),
        screen: Screen::Unimplemented,
    },
    RouteEntry {
        key: RouteKey::SellerDashboard,
        path: seller_dashboard_path,
        permission: Some(Role::Seller),
        screen: Screen::Routed(ScreenId::SellerDashboard),
    },
    RouteEntry {
        key: RouteKey::SellerProducts,
        path: seller_products_path,
        permission: Some(Role::Seller),
        screen: Screen::Routed(ScreenId::SellerProducts),
    },
    RouteEntry {
        key: RouteKey::SellerOrders,
        path: seller_orders_path,
        permission: Some(Role::Seller),
        screen: Screen::Routed(ScreenId::SellerOrders),
    },
    RouteEntry {
        key: RouteKey::AdminDashboard,
        path: admin_dashboard_path,
        permission: Some(Role::Admin),
        screen: Screen::Routed(ScreenId::AdminDashboard),
    },
    RouteEntry {
        key: RouteKey::AdminCustomers,
        path: admin_customers_path,
        permission: Some(Role::Admin),
        screen: Screen::Routed(ScreenId::AdminCustomers),
    },
    RouteEntry {
        key: RouteKey::AdminCustomerDetail,
        path: admin_customer_detail_path,
        permission: Some(Role::Admin),
        screen: Screen::Routed(ScreenId::AdminCustomerDetail),
    },
    RouteEntry {
        key: RouteKey::AdminSellers,
        path: admin_sellers_path,
        permission: Some(Role::Admin),
        screen: Screen::Routed(ScreenId::AdminSellers),
    },
    RouteEntry {
        key: RouteKey::AdminSellerDetail,
        path: admin_seller_detail_path,
        permission: Some(Role::Admin),
        screen: Screen::Routed(ScreenId::AdminSellerDetail),
    },
];

/// Look up a route by key.
///
/// The table is small and static; a linear scan keeps the entries in
/// one place without a parallel map to maintain.
pub fn entry(key: RouteKey) -> &'static RouteEntry {
    ROUTES
        .iter()
        .find(|route| route.key == key)
        .expect("every RouteKey has a table row")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_resolves() {
        for route in ROUTES {
            assert_eq!(entry(route.key).key, route.key);
        }
    }

    #[test]
    fn path_builders_are_pure() {
        let first = (entry(RouteKey::ProductDetail).path)(Some("abc"));
        let second = (entry(RouteKey::ProductDetail).path)(Some("abc"));
        assert_eq!(first, second);
        assert_eq!(first, "/products/abc");
    }

    #[test]
    fn missing_param_substitutes_placeholder() {
        assert_eq!(
            (entry(RouteKey::ProductDetail).path)(None),
            "/products/:productId"
        );
        assert_eq!(
            (entry(RouteKey::CategoryProducts).path)(None),
            "/categories/:categoryId/products"
        );
    }

    #[test]
    fn public_routes_have_no_permission() {
        assert!(entry(RouteKey::Home).permission.is_none());
        assert!(entry(RouteKey::ProductDetail).permission.is_none());
    }

    #[test]
    fn role_areas_require_their_role() {
        assert_eq!(entry(RouteKey::Cart).permission, Some(Role::Customer));
        assert_eq!(
            entry(RouteKey::SellerDashboard).permission,
            Some(Role::Seller)
        );
        assert_eq!(
            entry(RouteKey::AdminCustomers).permission,
            Some(Role::Admin)
        );
    }

    #[test]
    fn unimplemented_routes_carry_no_screen() {
        assert_eq!(entry(RouteKey::SupportReturns).screen.screen_id(), None);
        assert!(entry(RouteKey::Cart).screen.screen_id().is_some());
    }
}
