pub mod activities_service;
pub mod signup_service;
