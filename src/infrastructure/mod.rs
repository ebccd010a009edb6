pub mod db;
pub mod sitegen;
pub mod storage;
pub mod telemetry;
