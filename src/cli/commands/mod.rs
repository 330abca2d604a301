/// Administrator views: dashboard, catalog browsing, comparison and history
pub mod admin;
/// Quotation building
pub mod quotation;
/// Supplier views: own catalog and price edits
pub mod supplier;
