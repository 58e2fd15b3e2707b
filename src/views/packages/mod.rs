mod package_card;
mod package_list;
mod package_update;
mod update_field;

pub use package_card::*;
pub use package_list::*;
pub use package_update::*;
pub use update_field::*;
