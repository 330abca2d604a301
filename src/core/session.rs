//! Session state - Which role is currently logged in.
//!
//! Login only selects a role; there are no credentials. The session is a plain
//! value owned by the caller and passed by reference to the operations that
//! depend on it.

use crate::{
    core::catalog::Catalog,
    errors::{Error, Result},
};
use tracing::{debug, info, warn};

/// The kind of role requested at login.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleKind {
    /// Restaurant administrator: compares prices and builds quotations
    Administrator,
    /// Supplier: maintains its own catalog prices
    Supplier,
}

/// An active role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Role {
    Administrator,
    Supplier { supplier_id: String },
}

/// Current session. `Default` is the logged-out state.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    role: Option<Role>,
}

impl SessionState {
    /// Creates a logged-out session.
    #[must_use]
    pub const fn new() -> Self {
        Self { role: None }
    }

    /// Logs in with the given role, replacing any previous role.
    ///
    /// Supplier logins must name a registered supplier. Administrator logins
    /// ignore `supplier_id`.
    ///
    /// # Errors
    /// Returns `Error::InvalidArgument` for a supplier login without an id and
    /// `Error::SupplierNotFound` when the id is not registered in the catalog.
    pub fn login(
        &mut self,
        catalog: &Catalog,
        kind: RoleKind,
        supplier_id: Option<&str>,
    ) -> Result<&Role> {
        let role = match kind {
            RoleKind::Administrator => {
                if let Some(id) = supplier_id {
                    debug!(supplier_id = id, "Ignoring supplier id for administrator login");
                }
                Role::Administrator
            }
            RoleKind::Supplier => {
                let Some(id) = supplier_id.map(str::trim).filter(|id| !id.is_empty()) else {
                    warn!("Supplier login attempted without a supplier id");
                    return Err(Error::InvalidArgument {
                        message: "Supplier login requires a supplier id".to_string(),
                    });
                };
                let supplier = catalog.require_supplier(id)?;
                Role::Supplier {
                    supplier_id: supplier.id.clone(),
                }
            }
        };

        info!(?role, "Logged in");
        Ok(&*self.role.insert(role))
    }

    /// Logs out, returning the role that was active.
    pub fn logout(&mut self) -> Option<Role> {
        let previous = self.role.take();
        if previous.is_some() {
            info!("Logged out");
        }
        previous
    }

    /// Returns the active role, if any.
    #[must_use]
    pub const fn role(&self) -> Option<&Role> {
        self.role.as_ref()
    }

    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.role.is_some()
    }

    /// Returns the logged-in supplier's id, if the session is a supplier session.
    #[must_use]
    pub fn current_supplier(&self) -> Option<&str> {
        match &self.role {
            Some(Role::Supplier { supplier_id }) => Some(supplier_id),
            _ => None,
        }
    }

    /// Ensures the session belongs to an administrator.
    ///
    /// # Errors
    /// Returns `Error::PermissionDenied` otherwise.
    pub fn require_admin(&self) -> Result<()> {
        match self.role {
            Some(Role::Administrator) => Ok(()),
            _ => Err(Error::PermissionDenied {
                message: "administrator login required".to_string(),
            }),
        }
    }

    /// Ensures the session belongs to a supplier and returns its id.
    ///
    /// # Errors
    /// Returns `Error::PermissionDenied` otherwise.
    pub fn require_supplier(&self) -> Result<&str> {
        self.current_supplier()
            .ok_or_else(|| Error::PermissionDenied {
                message: "supplier login required".to_string(),
            })
    }
}
