mod classification;
mod event;
mod form;
mod history;
mod reading;
mod screen;

pub use classification::*;
pub use event::*;
pub use form::*;
pub use history::*;
pub use reading::*;
pub use screen::*;
