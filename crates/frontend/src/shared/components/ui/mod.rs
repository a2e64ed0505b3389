pub mod badge;
pub mod button;
pub mod input;
pub mod select;

pub use badge::OptionBadge;
pub use button::Button;
pub use input::Input;
pub use select::Select;
