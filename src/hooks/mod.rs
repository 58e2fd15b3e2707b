pub mod use_auth;
pub mod use_packages;
pub mod use_package_update;

pub use use_auth::{attempt_login, use_auth, LoginOutcome, UseAuthHandle};
pub use use_packages::{use_packages, PackagesState, UsePackagesHandle};
pub use use_package_update::{use_package_update, FormError, UpdatePage, UpdateState, UsePackageUpdateHandle};
