pub mod health;
pub mod places;
