pub mod app;
pub mod guard;

pub use app::App;
pub use guard::ReplaceRedirect;
