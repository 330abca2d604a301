//! Core business logic - the quotation domain, independent of any front end.

pub mod catalog;
pub mod history;
pub mod pricing;
pub mod quotation;
pub mod report;
pub mod session;

pub use catalog::Catalog;
pub use quotation::{Quotation, QuotationLineItem};
pub use session::{Role, RoleKind, SessionState};
