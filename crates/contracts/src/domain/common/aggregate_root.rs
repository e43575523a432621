use super::AggregateId;

/// Aggregate root contract.
///
/// Besides per-record accessors it carries the static naming of the aggregate,
/// which the frontend uses for titles and for building REST paths.
pub trait AggregateRoot {
    /// Identifier type of the aggregate
    type Id: AggregateId;

    // ============================================================================
    // Instance data
    // ============================================================================

    /// Record id
    fn id(&self) -> Self::Id;

    /// Human-facing code (product slug, batch number)
    fn code(&self) -> &str;

    /// Display name of the record
    fn description(&self) -> &str;

    // ============================================================================
    // Static aggregate metadata
    // ============================================================================

    /// Aggregate index in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// REST collection name (e.g. "products")
    fn collection_name() -> &'static str;

    /// Singular UI name (e.g. "Product")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Products")
    fn list_name() -> &'static str;

    // ============================================================================
    // Defaults
    // ============================================================================

    /// Full aggregate name (e.g. "a001_products")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Collection endpoint (e.g. "/api/products")
    fn api_path() -> String {
        format!("/api/{}", Self::collection_name())
    }

    /// Single record endpoint (e.g. "/api/products/urea-gold")
    fn item_api_path(id: &Self::Id) -> String {
        format!("{}/{}", Self::api_path(), id.as_string())
    }
}
