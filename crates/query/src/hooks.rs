//! Per-resource accessors over the registry and cache.
//!
//! [`Queries`] is the facade UI code talks to. Reads go through the
//! cache; mutations go straight to the transport and invalidate the
//! dependent read families on success, so the next read observes the
//! change.
//!
//! Normalization is asymmetric on purpose: cart, wishlist, the
//! wishlist membership probe, and the dashboards substitute their
//! documented empty-state objects when the backend answers
//! `result: null`, because consumers read fields off those payloads
//! directly. Catalog, order, profile, admin, and chat envelopes pass
//! through untouched; their screens branch on the absence themselves.

use std::sync::Arc;

use souk_client::ApiClient;
use souk_core::admin::{AccountStatus, AdminCustomer, AdminSeller};
use souk_core::cart::{AddToCartRequest, Cart, UpdateCartItemRequest};
use souk_core::catalog::{Category, Product, ProductSummary};
use souk_core::chat::{ChatMessage, Conversation, SendMessageRequest};
use souk_core::dashboard::{AdminDashboard, SellerDashboard, StatRange};
use souk_core::order::{CheckoutRequest, Order, OrderStatus};
use souk_core::page::{Page, PageQuery};
use souk_core::profile::{Profile, UpdateProfileRequest};
use souk_core::wishlist::Wishlist;
use souk_core::Envelope;

use crate::cache::QueryCache;
use crate::error::QueryError;
use crate::options::QueryOptions;
use crate::registry::{self, family};

/// UI-facing query facade: shared API client + shared cache.
///
/// Cheap to clone; both halves are behind `Arc`.
#[derive(Clone)]
pub struct Queries {
    api: Arc<ApiClient>,
    cache: Arc<QueryCache>,
}

impl Queries {
    /// Build a facade with a fresh, empty cache.
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            cache: Arc::new(QueryCache::new()),
        }
    }

    /// Build a facade over an existing cache (e.g. shared across
    /// role-specific facades).
    pub fn with_cache(api: Arc<ApiClient>, cache: Arc<QueryCache>) -> Self {
        Self { api, cache }
    }

    /// The underlying cache, for explicit invalidation.
    pub fn cache(&self) -> &Arc<QueryCache> {
        &self.cache
    }

    // -----------------------------------------------------------------------
    // Catalog reads (pass-through envelopes)
    // -----------------------------------------------------------------------

    pub async fn categories(
        &self,
        options: QueryOptions,
    ) -> Result<Envelope<Vec<Category>>, QueryError> {
        let spec = registry::categories(Arc::clone(&self.api));
        Ok(self.cache.run(&spec, options).await?.as_ref().clone())
    }

    pub async fn category(
        &self,
        id: &str,
        options: QueryOptions,
    ) -> Result<Envelope<Category>, QueryError> {
        let spec = registry::category(Arc::clone(&self.api), id);
        Ok(self.cache.run(&spec, options).await?.as_ref().clone())
    }

    pub async fn products(
        &self,
        query: &PageQuery,
        category_id: Option<&str>,
        options: QueryOptions,
    ) -> Result<Envelope<Page<ProductSummary>>, QueryError> {
        let spec = registry::products(Arc::clone(&self.api), query, category_id);
        Ok(self.cache.run(&spec, options).await?.as_ref().clone())
    }

    pub async fn product(
        &self,
        id: &str,
        options: QueryOptions,
    ) -> Result<Envelope<Product>, QueryError> {
        let spec = registry::product(Arc::clone(&self.api), id);
        Ok(self.cache.run(&spec, options).await?.as_ref().clone())
    }

    pub async fn seller_products(
        &self,
        query: &PageQuery,
        options: QueryOptions,
    ) -> Result<Envelope<Page<ProductSummary>>, QueryError> {
        let spec = registry::seller_products(Arc::clone(&self.api), query);
        Ok(self.cache.run(&spec, options).await?.as_ref().clone())
    }

    // -----------------------------------------------------------------------
    // Cart and wishlist reads (empty-state normalized)
    // -----------------------------------------------------------------------

    /// The current cart; `result: null` becomes [`Cart::empty`].
    pub async fn cart(&self, options: QueryOptions) -> Result<Envelope<Cart>, QueryError> {
        let spec = registry::cart(Arc::clone(&self.api));
        Ok(self.cache.run(&spec, options).await?.as_ref().clone().or_empty())
    }

    /// The wishlist; `result: null` becomes [`Wishlist::empty`].
    pub async fn wishlist(&self, options: QueryOptions) -> Result<Envelope<Wishlist>, QueryError> {
        let spec = registry::wishlist(Arc::clone(&self.api));
        Ok(self.cache.run(&spec, options).await?.as_ref().clone().or_empty())
    }

    /// Whether a product is on the wishlist; `result: null` reads as
    /// `false`.
    pub async fn check_product_in_wishlist(
        &self,
        product_id: &str,
        options: QueryOptions,
    ) -> Result<Envelope<bool>, QueryError> {
        let spec = registry::wishlist_contains(Arc::clone(&self.api), product_id);
        Ok(self.cache.run(&spec, options).await?.as_ref().clone().or_empty())
    }

    // -----------------------------------------------------------------------
    // Order / profile / admin / chat reads (pass-through envelopes)
    // -----------------------------------------------------------------------

    pub async fn orders(
        &self,
        query: &PageQuery,
        options: QueryOptions,
    ) -> Result<Envelope<Page<Order>>, QueryError> {
        let spec = registry::orders(Arc::clone(&self.api), query);
        Ok(self.cache.run(&spec, options).await?.as_ref().clone())
    }

    pub async fn order(
        &self,
        id: &str,
        options: QueryOptions,
    ) -> Result<Envelope<Order>, QueryError> {
        let spec = registry::order(Arc::clone(&self.api), id);
        Ok(self.cache.run(&spec, options).await?.as_ref().clone())
    }

    pub async fn seller_orders(
        &self,
        query: &PageQuery,
        options: QueryOptions,
    ) -> Result<Envelope<Page<Order>>, QueryError> {
        let spec = registry::seller_orders(Arc::clone(&self.api), query);
        Ok(self.cache.run(&spec, options).await?.as_ref().clone())
    }

    pub async fn profile(&self, options: QueryOptions) -> Result<Envelope<Profile>, QueryError> {
        let spec = registry::profile(Arc::clone(&self.api));
        Ok(self.cache.run(&spec, options).await?.as_ref().clone())
    }

    pub async fn admin_customers(
        &self,
        query: &PageQuery,
        options: QueryOptions,
    ) -> Result<Envelope<Page<AdminCustomer>>, QueryError> {
        let spec = registry::admin_customers(Arc::clone(&self.api), query);
        Ok(self.cache.run(&spec, options).await?.as_ref().clone())
    }

    pub async fn admin_customer(
        &self,
        id: &str,
        options: QueryOptions,
    ) -> Result<Envelope<AdminCustomer>, QueryError> {
        let spec = registry::admin_customer(Arc::clone(&self.api), id);
        Ok(self.cache.run(&spec, options).await?.as_ref().clone())
    }

    pub async fn admin_sellers(
        &self,
        query: &PageQuery,
        options: QueryOptions,
    ) -> Result<Envelope<Page<AdminSeller>>, QueryError> {
        let spec = registry::admin_sellers(Arc::clone(&self.api), query);
        Ok(self.cache.run(&spec, options).await?.as_ref().clone())
    }

    pub async fn admin_seller(
        &self,
        id: &str,
        options: QueryOptions,
    ) -> Result<Envelope<AdminSeller>, QueryError> {
        let spec = registry::admin_seller(Arc::clone(&self.api), id);
        Ok(self.cache.run(&spec, options).await?.as_ref().clone())
    }

    pub async fn conversations(
        &self,
        options: QueryOptions,
    ) -> Result<Envelope<Vec<Conversation>>, QueryError> {
        let spec = registry::conversations(Arc::clone(&self.api));
        Ok(self.cache.run(&spec, options).await?.as_ref().clone())
    }

    pub async fn messages(
        &self,
        conversation_id: &str,
        options: QueryOptions,
    ) -> Result<Envelope<Vec<ChatMessage>>, QueryError> {
        let spec = registry::messages(Arc::clone(&self.api), conversation_id);
        Ok(self.cache.run(&spec, options).await?.as_ref().clone())
    }

    // -----------------------------------------------------------------------
    // Dashboard reads (empty-state normalized)
    // -----------------------------------------------------------------------

    pub async fn seller_dashboard(
        &self,
        range: StatRange,
        options: QueryOptions,
    ) -> Result<Envelope<SellerDashboard>, QueryError> {
        let spec = registry::seller_dashboard(Arc::clone(&self.api), range);
        Ok(self.cache.run(&spec, options).await?.as_ref().clone().or_empty())
    }

    pub async fn admin_dashboard(
        &self,
        range: StatRange,
        options: QueryOptions,
    ) -> Result<Envelope<AdminDashboard>, QueryError> {
        let spec = registry::admin_dashboard(Arc::clone(&self.api), range);
        Ok(self.cache.run(&spec, options).await?.as_ref().clone().or_empty())
    }

    // -----------------------------------------------------------------------
    // Mutations (transport call + dependent-family invalidation)
    // -----------------------------------------------------------------------

    /// Add a product to the cart and invalidate cached cart reads.
    pub async fn add_to_cart(
        &self,
        request: &AddToCartRequest,
    ) -> Result<Envelope<Cart>, QueryError> {
        let envelope = souk_client::cart::add_item(&self.api, request).await?;
        self.invalidated(family::CART).await;
        Ok(envelope)
    }

    /// Change a cart line's quantity and invalidate cached cart reads.
    pub async fn update_cart_item(
        &self,
        item_id: &str,
        request: &UpdateCartItemRequest,
    ) -> Result<Envelope<Cart>, QueryError> {
        let envelope = souk_client::cart::update_item(&self.api, item_id, request).await?;
        self.invalidated(family::CART).await;
        Ok(envelope)
    }

    /// Remove a cart line and invalidate cached cart reads.
    pub async fn remove_cart_item(&self, item_id: &str) -> Result<Envelope<Cart>, QueryError> {
        let envelope = souk_client::cart::remove_item(&self.api, item_id).await?;
        self.invalidated(family::CART).await;
        Ok(envelope)
    }

    /// Empty the cart and invalidate cached cart reads.
    pub async fn clear_cart(&self) -> Result<Envelope<Cart>, QueryError> {
        let envelope = souk_client::cart::clear_cart(&self.api).await?;
        self.invalidated(family::CART).await;
        Ok(envelope)
    }

    /// Toggle wishlist membership and invalidate cached wishlist reads
    /// (including membership probes).
    pub async fn toggle_wishlist(
        &self,
        product_id: &str,
    ) -> Result<Envelope<Wishlist>, QueryError> {
        let envelope = souk_client::wishlist::toggle_product(&self.api, product_id).await?;
        self.invalidated(family::WISHLIST).await;
        Ok(envelope)
    }

    /// Place an order from the cart. The backend drains the cart, so
    /// both the cart and order families go stale.
    pub async fn checkout(&self, request: &CheckoutRequest) -> Result<Envelope<Order>, QueryError> {
        let envelope = souk_client::order::checkout(&self.api, request).await?;
        self.invalidated(family::CART).await;
        self.invalidated(family::ORDER).await;
        Ok(envelope)
    }

    /// Move an order to a new status and invalidate cached order reads.
    pub async fn update_order_status(
        &self,
        id: &str,
        status: OrderStatus,
    ) -> Result<Envelope<Order>, QueryError> {
        let envelope = souk_client::order::update_order_status(&self.api, id, status).await?;
        self.invalidated(family::ORDER).await;
        Ok(envelope)
    }

    /// Update the profile and invalidate the cached profile read.
    pub async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> Result<Envelope<Profile>, QueryError> {
        let envelope = souk_client::profile::update_profile(&self.api, request).await?;
        self.invalidated(family::PROFILE).await;
        Ok(envelope)
    }

    /// Change a customer account's status (admin).
    pub async fn update_customer_status(
        &self,
        id: &str,
        status: AccountStatus,
    ) -> Result<Envelope<AdminCustomer>, QueryError> {
        let envelope = souk_client::admin::update_customer_status(&self.api, id, status).await?;
        self.invalidated(family::ADMIN_CUSTOMER).await;
        Ok(envelope)
    }

    /// Change a seller account's status (admin).
    pub async fn update_seller_status(
        &self,
        id: &str,
        status: AccountStatus,
    ) -> Result<Envelope<AdminSeller>, QueryError> {
        let envelope = souk_client::admin::update_seller_status(&self.api, id, status).await?;
        self.invalidated(family::ADMIN_SELLER).await;
        Ok(envelope)
    }

    /// Send a chat message and invalidate cached conversation reads.
    pub async fn send_message(
        &self,
        conversation_id: &str,
        request: &SendMessageRequest,
    ) -> Result<Envelope<ChatMessage>, QueryError> {
        let envelope = souk_client::chat::send_message(&self.api, conversation_id, request).await?;
        self.invalidated(family::CHAT).await;
        Ok(envelope)
    }

    // ---- private helpers ----

    async fn invalidated(&self, family: &str) {
        let removed = self.cache.invalidate_family(family).await;
        tracing::debug!(family, removed, "mutation invalidated family");
    }
}
