pub mod generate;
pub mod init;
pub mod inspect;

pub use generate::{generate, GenerateArgs};
pub use init::{init, InitArgs};
pub use inspect::{inspect, InspectArgs};
