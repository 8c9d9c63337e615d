mod app_state;
pub mod events;
mod weather_session;

pub use app_state::*;
pub use weather_session::*;
