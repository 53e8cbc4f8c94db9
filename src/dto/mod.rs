pub mod health_dto;
pub mod vehicle_dto;
