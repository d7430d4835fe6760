pub mod environment;
pub mod order;
pub mod price;
pub mod product;

pub use environment::*;
pub use order::*;
pub use price::*;
pub use product::*;
