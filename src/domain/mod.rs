pub mod filters;
pub mod lead;
pub mod listing;
pub mod search;
