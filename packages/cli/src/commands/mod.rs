pub mod edit;
pub mod init;
pub mod list;
pub mod new;
pub mod render;
pub mod search;
pub mod validate;

pub use edit::{edit, EditArgs};
pub use init::{init, InitArgs};
pub use list::{list, ListArgs};
pub use new::{new, NewArgs};
pub use render::{render, RenderArgs};
pub use search::{search, SearchArgs};
pub use validate::{validate, ValidateArgs};
