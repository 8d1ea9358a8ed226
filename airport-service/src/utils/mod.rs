pub mod catch_panic;
pub mod health_check;
pub mod meltdown;
