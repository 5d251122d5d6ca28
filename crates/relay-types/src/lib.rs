pub mod account;
pub mod delivery;
pub mod intent;
pub mod quote;

pub use account::*;
pub use delivery::*;
pub use intent::*;
pub use quote::*;
