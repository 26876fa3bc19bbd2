mod biodata;
mod language;
mod profile;
mod roast;

pub use biodata::{display_value, Biodata};
pub use language::Language;
pub use profile::Profile;
pub use roast::Roast;
