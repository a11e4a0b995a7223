pub mod configuration;
pub mod dao;
pub mod database;
pub mod errors;
pub mod model;
pub mod observability;
pub mod routes;
pub mod startup;
