pub mod db_init;
pub mod holding;
pub mod product_control;
