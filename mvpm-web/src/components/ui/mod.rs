pub mod email_form;
pub mod feedback_box;
pub mod game_card;
pub mod loading_indicator;
pub mod share_buttons;
pub mod timer_display;
