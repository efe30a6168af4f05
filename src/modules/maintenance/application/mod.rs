pub mod maintenance_use_cases;
pub mod ports;
pub mod services;
