pub mod health;
pub mod root;
pub mod item;
pub mod fallback;

pub use health::*;
pub use root::*;
pub use item::*;
pub use fallback::*;
