pub mod use_game_session;

use yew::prelude::*;

use crate::services::WebServices;

pub use use_game_session::{SessionHandle, use_game_session};

/// The application service bundle, falling back to an inert bundle when no
/// provider is mounted.
#[hook]
pub fn use_services() -> WebServices {
    use_context::<WebServices>().unwrap_or_else(WebServices::inert)
}
