pub mod chat;
pub mod contact;
pub mod page;

pub use chat::*;
pub use contact::*;
pub use page::*;
