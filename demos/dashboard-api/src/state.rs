use pricebook_sdk::AsyncPricebookSdk;

/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// The async Pricebook SDK instance. Handles dispatching blocking SDK
    /// operations to a thread pool internally.
    pub sdk: AsyncPricebookSdk,
}
