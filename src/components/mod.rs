pub mod lookup_form;
pub mod title_header;
pub mod weather_card;
pub mod weather_display;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use lookup_form::{LookupForm, LookupFormProps};
pub use title_header::{TitleHeader, TitleHeaderProps};
pub use weather_card::{WeatherCard, WeatherCardProps};
pub use weather_display::{ERROR_ICON, FOOTER, WeatherDisplay, WeatherDisplayProps};
