pub mod auth;
pub mod booking;
pub mod toast;

pub use auth::AuthProvider;
pub use booking::BookingProvider;
pub use toast::ToastProvider;
