/// localStorage key of the session flag
pub const STORAGE_KEY_VALID_ADMIN: &str = "valid_admin";

/// Stored value meaning "logged in"
pub const VALID_ADMIN_VALUE: &str = "true";

pub const PACKAGE_NOT_FOUND_MESSAGE: &str = "Package not found or you don't have permission to view it";
pub const UPDATE_SUCCESS_MESSAGE: &str = "Package updated successfully!";
