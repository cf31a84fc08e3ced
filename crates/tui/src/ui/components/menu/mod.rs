mod menu_component;
mod state;

pub use menu_component::MenuComponent;
pub use state::MenuState;
