pub mod health;
pub mod welcome;
pub mod item;
pub mod error;

pub use health::*;
pub use welcome::*;
pub use item::*;
pub use error::*;
