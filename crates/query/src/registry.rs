//! The query registry: one pure factory per read operation.
//!
//! Each factory takes a shared [`ApiClient`] plus request parameters
//! and returns a [`QuerySpec`] pairing the normalized cache key with a
//! zero-argument fetch function. Declaring a spec has no side effects;
//! the fetch only runs when the [`QueryCache`](crate::QueryCache)
//! invokes it.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use souk_client::{ApiClient, ClientError};
use souk_core::admin::{AdminCustomer, AdminSeller};
use souk_core::cart::Cart;
use souk_core::catalog::{Category, Product, ProductSummary};
use souk_core::chat::{ChatMessage, Conversation};
use souk_core::dashboard::{AdminDashboard, SellerDashboard, StatRange};
use souk_core::order::Order;
use souk_core::page::{Page, PageQuery};
use souk_core::profile::Profile;
use souk_core::wishlist::Wishlist;
use souk_core::Envelope;

use crate::key::QueryKey;

/// Boxed future returned by a spec's fetch function.
pub type FetchFuture<T> = Pin<Box<dyn Future<Output = Result<T, ClientError>> + Send>>;

/// A declared query: cache key plus fetch function.
pub struct QuerySpec<T> {
    key: QueryKey,
    fetch: Box<dyn Fn() -> FetchFuture<T> + Send + Sync>,
}

impl<T> QuerySpec<T> {
    /// Pair a key with its fetch function.
    pub fn new(key: QueryKey, fetch: impl Fn() -> FetchFuture<T> + Send + Sync + 'static) -> Self {
        Self {
            key,
            fetch: Box::new(fetch),
        }
    }

    /// The cache key this spec is stored under.
    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    /// Start one fetch. Each invocation issues a fresh request.
    pub fn invoke(&self) -> FetchFuture<T> {
        (self.fetch)()
    }
}

/// Resource-family names used as the first component of every key.
pub mod family {
    pub const CATEGORY: &str = "category";
    pub const PRODUCT: &str = "product";
    pub const CART: &str = "cart";
    pub const WISHLIST: &str = "wishlist";
    pub const ORDER: &str = "order";
    pub const PROFILE: &str = "profile";
    pub const ADMIN_CUSTOMER: &str = "admin-customer";
    pub const ADMIN_SELLER: &str = "admin-seller";
    pub const DASHBOARD: &str = "dashboard";
    pub const CHAT: &str = "chat";
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

pub fn categories(api: Arc<ApiClient>) -> QuerySpec<Envelope<Vec<Category>>> {
    QuerySpec::new(QueryKey::new(family::CATEGORY), move || {
        let api = Arc::clone(&api);
        Box::pin(async move { souk_client::category::list_categories(&api).await })
    })
}

pub fn category(api: Arc<ApiClient>, id: &str) -> QuerySpec<Envelope<Category>> {
    let key = QueryKey::new(family::CATEGORY).with("id", id);
    let id = id.to_string();
    QuerySpec::new(key, move || {
        let api = Arc::clone(&api);
        let id = id.clone();
        Box::pin(async move { souk_client::category::get_category(&api, &id).await })
    })
}

// ---------------------------------------------------------------------------
// Product
// ---------------------------------------------------------------------------

pub fn products(
    api: Arc<ApiClient>,
    query: &PageQuery,
    category_id: Option<&str>,
) -> QuerySpec<Envelope<Page<ProductSummary>>> {
    let mut key = QueryKey::new(family::PRODUCT)
        .with("view", "catalog")
        .with_pairs(&query.to_query_pairs());
    if let Some(category_id) = category_id {
        key = key.with("categoryId", category_id);
    }
    let query = query.clone();
    let category_id = category_id.map(str::to_string);
    QuerySpec::new(key, move || {
        let api = Arc::clone(&api);
        let query = query.clone();
        let category_id = category_id.clone();
        Box::pin(async move {
            souk_client::product::list_products(&api, &query, category_id.as_deref()).await
        })
    })
}

pub fn product(api: Arc<ApiClient>, id: &str) -> QuerySpec<Envelope<Product>> {
    let key = QueryKey::new(family::PRODUCT).with("id", id);
    let id = id.to_string();
    QuerySpec::new(key, move || {
        let api = Arc::clone(&api);
        let id = id.clone();
        Box::pin(async move { souk_client::product::get_product(&api, &id).await })
    })
}

pub fn seller_products(
    api: Arc<ApiClient>,
    query: &PageQuery,
) -> QuerySpec<Envelope<Page<ProductSummary>>> {
    let key = QueryKey::new(family::PRODUCT)
        .with("view", "seller")
        .with_pairs(&query.to_query_pairs());
    let query = query.clone();
    QuerySpec::new(key, move || {
        let api = Arc::clone(&api);
        let query = query.clone();
        Box::pin(async move { souk_client::product::list_seller_products(&api, &query).await })
    })
}

// ---------------------------------------------------------------------------
// Cart / wishlist
// ---------------------------------------------------------------------------

pub fn cart(api: Arc<ApiClient>) -> QuerySpec<Envelope<Cart>> {
    QuerySpec::new(QueryKey::new(family::CART), move || {
        let api = Arc::clone(&api);
        Box::pin(async move { souk_client::cart::get_cart(&api).await })
    })
}

pub fn wishlist(api: Arc<ApiClient>) -> QuerySpec<Envelope<Wishlist>> {
    QuerySpec::new(QueryKey::new(family::WISHLIST), move || {
        let api = Arc::clone(&api);
        Box::pin(async move { souk_client::wishlist::get_wishlist(&api).await })
    })
}

pub fn wishlist_contains(api: Arc<ApiClient>, product_id: &str) -> QuerySpec<Envelope<bool>> {
    let key = QueryKey::new(family::WISHLIST)
        .with("view", "contains")
        .with("productId", product_id);
    let product_id = product_id.to_string();
    QuerySpec::new(key, move || {
        let api = Arc::clone(&api);
        let product_id = product_id.clone();
        Box::pin(async move { souk_client::wishlist::check_product(&api, &product_id).await })
    })
}

// ---------------------------------------------------------------------------
// Order
// ---------------------------------------------------------------------------

pub fn orders(api: Arc<ApiClient>, query: &PageQuery) -> QuerySpec<Envelope<Page<Order>>> {
    let key = QueryKey::new(family::ORDER)
        .with("view", "customer")
        .with_pairs(&query.to_query_pairs());
    let query = query.clone();
    QuerySpec::new(key, move || {
        let api = Arc::clone(&api);
        let query = query.clone();
        Box::pin(async move { souk_client::order::list_orders(&api, &query).await })
    })
}

pub fn order(api: Arc<ApiClient>, id: &str) -> QuerySpec<Envelope<Order>> {
    let key = QueryKey::new(family::ORDER).with("id", id);
    let id = id.to_string();
    QuerySpec::new(key, move || {
        let api = Arc::clone(&api);
        let id = id.clone();
        Box::pin(async move { souk_client::order::get_order(&api, &id).await })
    })
}

pub fn seller_orders(api: Arc<ApiClient>, query: &PageQuery) -> QuerySpec<Envelope<Page<Order>>> {
    let key = QueryKey::new(family::ORDER)
        .with("view", "seller")
        .with_pairs(&query.to_query_pairs());
    let query = query.clone();
    QuerySpec::new(key, move || {
        let api = Arc::clone(&api);
        let query = query.clone();
        Box::pin(async move { souk_client::order::list_seller_orders(&api, &query).await })
    })
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

pub fn profile(api: Arc<ApiClient>) -> QuerySpec<Envelope<Profile>> {
    QuerySpec::new(QueryKey::new(family::PROFILE), move || {
        let api = Arc::clone(&api);
        Box::pin(async move { souk_client::profile::get_profile(&api).await })
    })
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

pub fn admin_customers(
    api: Arc<ApiClient>,
    query: &PageQuery,
) -> QuerySpec<Envelope<Page<AdminCustomer>>> {
    let key = QueryKey::new(family::ADMIN_CUSTOMER).with_pairs(&query.to_query_pairs());
    let query = query.clone();
    QuerySpec::new(key, move || {
        let api = Arc::clone(&api);
        let query = query.clone();
        Box::pin(async move { souk_client::admin::list_customers(&api, &query).await })
    })
}

pub fn admin_customer(api: Arc<ApiClient>, id: &str) -> QuerySpec<Envelope<AdminCustomer>> {
    let key = QueryKey::new(family::ADMIN_CUSTOMER).with("id", id);
    let id = id.to_string();
    QuerySpec::new(key, move || {
        let api = Arc::clone(&api);
        let id = id.clone();
        Box::pin(async move { souk_client::admin::get_customer(&api, &id).await })
    })
}

pub fn admin_sellers(
    api: Arc<ApiClient>,
    query: &PageQuery,
) -> QuerySpec<Envelope<Page<AdminSeller>>> {
    let key = QueryKey::new(family::ADMIN_SELLER).with_pairs(&query.to_query_pairs());
    let query = query.clone();
    QuerySpec::new(key, move || {
        let api = Arc::clone(&api);
        let query = query.clone();
        Box::pin(async move { souk_client::admin::list_sellers(&api, &query).await })
    })
}

pub fn admin_seller(api: Arc<ApiClient>, id: &str) -> QuerySpec<Envelope<AdminSeller>> {
    let key = QueryKey::new(family::ADMIN_SELLER).with("id", id);
    let id = id.to_string();
    QuerySpec::new(key, move || {
        let api = Arc::clone(&api);
        let id = id.clone();
        Box::pin(async move { souk_client::admin::get_seller(&api, &id).await })
    })
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

pub fn seller_dashboard(
    api: Arc<ApiClient>,
    range: StatRange,
) -> QuerySpec<Envelope<SellerDashboard>> {
    let key = QueryKey::new(family::DASHBOARD)
        .with("view", "seller")
        .with_pairs(&range.to_query_pairs());
    QuerySpec::new(key, move || {
        let api = Arc::clone(&api);
        Box::pin(async move { souk_client::dashboard::seller_stats(&api, &range).await })
    })
}

pub fn admin_dashboard(
    api: Arc<ApiClient>,
    range: StatRange,
) -> QuerySpec<Envelope<AdminDashboard>> {
    let key = QueryKey::new(family::DASHBOARD)
        .with("view", "admin")
        .with_pairs(&range.to_query_pairs());
    QuerySpec::new(key, move || {
        let api = Arc::clone(&api);
        Box::pin(async move { souk_client::dashboard::admin_stats(&api, &range).await })
    })
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

pub fn conversations(api: Arc<ApiClient>) -> QuerySpec<Envelope<Vec<Conversation>>> {
    let key = QueryKey::new(family::CHAT).with("view", "conversations");
    QuerySpec::new(key, move || {
        let api = Arc::clone(&api);
        Box::pin(async move { souk_client::chat::list_conversations(&api).await })
    })
}

pub fn messages(api: Arc<ApiClient>, conversation_id: &str) -> QuerySpec<Envelope<Vec<ChatMessage>>> {
    let key = QueryKey::new(family::CHAT)
        .with("view", "messages")
        .with("conversationId", conversation_id);
    let conversation_id = conversation_id.to_string();
    QuerySpec::new(key, move || {
        let api = Arc::clone(&api);
        let conversation_id = conversation_id.clone();
        Box::pin(async move { souk_client::chat::list_messages(&api, &conversation_id).await })
    })
}
