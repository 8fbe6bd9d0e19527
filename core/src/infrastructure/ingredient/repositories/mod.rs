pub mod ingredient_repository;
pub mod stock_repository;
