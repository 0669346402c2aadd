mod form;
mod guard;
mod layout;
mod listing;
mod loading;
mod screen;
mod toast;

pub use form::{parse_amount, require, AssetSelect, Field};
pub use guard::{gate, Gate, ProtectedRoute};
pub use layout::AppLayout;
pub use listing::Listing;
pub use loading::Loading;
pub use screen::ScreenFrame;
pub use toast::{notify, Level, Sonner, Toast, Toaster};
