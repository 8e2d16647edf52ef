mod button;
mod container;
mod input;

pub use button::{
    link_button_style, menu_toggle_style, nav_link_style, outline_button_style,
    primary_button_style, scroll_top_button_style, submit_button_style,
};
pub use container::{card_style, menu_panel_style, navbar_style, tag_style, veil_style};
pub use input::{editor_style, input_style};
