pub mod health_controller;
pub mod lot_controller;
pub mod vehicle_controller;
