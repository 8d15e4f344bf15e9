/// Application layer - Use cases, DTOs and adapter factories
///
/// This layer orchestrates the graph rendering domain and reaches
/// infrastructure only through ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
