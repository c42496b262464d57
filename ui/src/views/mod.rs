mod home;
pub use home::Home;

mod overview;
pub use overview::Overview;

mod errors;
pub use errors::Errors;
