//! Screen identifiers bound to routes.

/// Every renderable screen in the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
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
    SellerDashboard,
    SellerProducts,
    SellerOrders,
    AdminDashboard,
    AdminCustomers,
    AdminCustomerDetail,
    AdminSellers,
    AdminSellerDetail,
}

/// What a route renders.
///
/// Routes whose screen has not shipped yet are declared
/// [`Screen::Unimplemented`] rather than left as a nullable component
/// reference, so rendering code has to handle the case explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Routed(ScreenId),
    Unimplemented,
}

impl Screen {
    /// The bound screen, if one has shipped.
    pub fn screen_id(self) -> Option<ScreenId> {
        match self {
            Screen::Routed(id) => Some(id),
            Screen::Unimplemented => None,
        }
    }
}
