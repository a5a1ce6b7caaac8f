mod database;
mod db_model;
mod settings;

pub use database::get_db_pool;
pub use db_model::*;
pub use settings::*;
