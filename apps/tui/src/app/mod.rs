// App module for the Car Market dashboard
// Holds application state and keyboard handling

pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::App;
