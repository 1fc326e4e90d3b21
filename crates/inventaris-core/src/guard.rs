//! Role-based access guards.
//!
//! Mirrors the backend's route protection on the client so a user is told
//! up front that an operation is admin-only, instead of burning a round
//! trip to be told the same thing by the server.

use crate::models::Role;

/// Application areas with distinct access rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Borrower-facing dashboard and product browsing
    UserDashboard,
    /// Borrower's own borrowing history
    UserHistory,
    /// Admin dashboard
    AdminDashboard,
    /// Product and category management
    AdminInventory,
    /// Borrowing approval and return verification
    AdminBorrowings,
    /// User management
    AdminUsers,
    /// Activity log
    AdminActivity,
    /// Report preview and download
    AdminReports,
}

impl Route {
    /// The minimum role required to enter this route.
    pub fn required_role(&self) -> Role {
        match self {
            Route::UserDashboard | Route::UserHistory => Role::Pengguna,
            Route::AdminDashboard
            | Route::AdminInventory
            | Route::AdminBorrowings
            | Route::AdminUsers
            | Route::AdminActivity
            | Route::AdminReports => Role::Admin,
        }
    }
}

/// Outcome of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The role may proceed
    Allow,
    /// The role must be sent to its home route instead
    Redirect(Route),
}

/// Checks whether `role` may enter `route`.
///
/// Admins can use the borrower-facing routes too; a regular user asking for
/// an admin route is redirected to their own dashboard, matching the
/// backend's redirect-on-forbidden behavior.
pub fn check_access(role: Role, route: Route) -> Access {
    match (role, route.required_role()) {
        (Role::Admin, _) => Access::Allow,
        (Role::Pengguna, Role::Pengguna) => Access::Allow,
        (Role::Pengguna, Role::Admin) => Access::Redirect(Route::UserDashboard),
    }
}

/// Home route for a role, used after login.
pub fn home_route(role: Role) -> Route {
    match role {
        Role::Admin => Route::AdminDashboard,
        Role::Pengguna => Route::UserDashboard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_allowed_everywhere() {
        for route in [
            Route::UserDashboard,
            Route::UserHistory,
            Route::AdminDashboard,
            Route::AdminInventory,
            Route::AdminBorrowings,
            Route::AdminUsers,
            Route::AdminActivity,
            Route::AdminReports,
        ] {
            assert_eq!(check_access(Role::Admin, route), Access::Allow);
        }
    }

    #[test]
    fn test_pengguna_redirected_from_admin_routes() {
        assert_eq!(check_access(Role::Pengguna, Route::UserDashboard), Access::Allow);
        assert_eq!(check_access(Role::Pengguna, Route::UserHistory), Access::Allow);
        assert_eq!(
            check_access(Role::Pengguna, Route::AdminBorrowings),
            Access::Redirect(Route::UserDashboard)
        );
        assert_eq!(
            check_access(Role::Pengguna, Route::AdminReports),
            Access::Redirect(Route::UserDashboard)
        );
    }

    #[test]
    fn test_home_routes() {
        assert_eq!(home_route(Role::Admin), Route::AdminDashboard);
        assert_eq!(home_route(Role::Pengguna), Route::UserDashboard);
    }
}
