// Chirpy API library crate (main.rs 와 통합 테스트에서 공유)
pub mod domains;
pub mod routes;
pub mod shared;
