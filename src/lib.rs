pub mod collector;
pub mod config;
pub mod db;
pub mod error;
pub mod nature_remo;
pub mod room_condition;
