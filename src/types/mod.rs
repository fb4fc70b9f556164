//! Data types shared by the renderer, the clipboard controller and the models.

mod cell;
mod column;
mod edit_type;
mod row;
mod selection;

pub use cell::*;
pub use column::*;
pub use edit_type::*;
pub use row::*;
pub use selection::*;
