pub mod careers;
pub mod home;
pub mod off_market;
pub mod prayer;
pub mod properties;

pub use careers::{careers_form, careers_page};
pub use home::home_page;
pub use off_market::{off_market_form, off_market_page};
pub use prayer::{faith_community_page, prayer_form};
pub use properties::{properties_page, PropertiesVm};
