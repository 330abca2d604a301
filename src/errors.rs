//! Unified error types and result handling for the quotation domain.
//!
//! Every failure is local and recoverable: callers report it to the user and
//! carry on. No variant here is fatal to the process.

use thiserror::Error;

/// Errors produced by catalog loading, pricing queries, quotations and sessions.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Product not found: {id}")]
    ProductNotFound { id: String },

    #[error("Supplier not found: {id}")]
    SupplierNotFound { id: String },

    #[error("Supplier {supplier_id} does not offer product {product_id}")]
    OfferNotFound {
        product_id: String,
        supplier_id: String,
    },

    #[error("No line item at position {index}")]
    LineItemNotFound { index: usize },

    #[error("Product {product_id} from supplier {supplier_id} is already in the quotation")]
    DuplicateEntry {
        product_id: String,
        supplier_id: String,
    },

    #[error("Invalid quantity: {quantity}. Quantity must be a positive integer")]
    InvalidQuantity { quantity: i64 },

    #[error("Invalid price: {price}. Price must be a finite, non-negative number")]
    InvalidPrice { price: f64 },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("No data available for {context}")]
    NoData { context: String },

    #[error("Permission denied: {message}")]
    PermissionDenied { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true for the "unknown id" family of errors.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ProductNotFound { .. }
                | Self::SupplierNotFound { .. }
                | Self::OfferNotFound { .. }
                | Self::LineItemNotFound { .. }
        )
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
