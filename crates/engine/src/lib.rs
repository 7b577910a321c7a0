pub use calculations::Calculation;
pub use commands::{CreateCalculationCmd, UpdateCalculationCmd};
pub use error::EngineError;
pub use eval::{Operation, evaluate};
pub use ops::{Engine, EngineBuilder};

mod calculations;
mod commands;
mod error;
mod eval;
mod ops;

type ResultEngine<T> = Result<T, EngineError>;
