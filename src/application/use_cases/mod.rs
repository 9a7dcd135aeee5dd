/// Use cases module containing application business logic orchestration
mod check_consistency;

pub use check_consistency::CheckConsistencyUseCase;
