pub mod collective;
pub mod cta;
pub mod footer;
pub mod hero;
pub mod projects;
