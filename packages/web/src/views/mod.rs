mod login;
pub use login::Login;

mod events;
pub use events::Events;
