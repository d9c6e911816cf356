pub mod clients;
pub mod config;
pub mod db;
pub mod dto;
pub mod entity;
pub mod error;
pub mod extract;
pub mod migration;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
