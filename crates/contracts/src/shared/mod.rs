pub mod api;
pub mod dates;
pub mod documents;
pub mod validation;
