pub mod package;
pub mod status;
pub mod update_form;

pub use package::{Milestone, Package};
pub use status::{latest_status, LatestStatus, PackageStatus};
pub use update_form::{FormField, PackageUpdateForm};
