mod fetch_profile;
mod generate_roast;
mod ports;

pub use fetch_profile::FetchProfile;
pub use generate_roast::GenerateRoast;
pub use ports::{ProfileSource, RoastModel};
