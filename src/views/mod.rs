pub mod auth;
pub mod home;
pub mod packages;
pub mod shared;

pub use auth::LoginView;
pub use home::HomeView;
pub use packages::{PackageListView, PackageUpdateView};
pub use shared::Header;
