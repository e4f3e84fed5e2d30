pub mod navbar;
pub mod project_card;
