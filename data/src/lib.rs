pub use self::card::Card;
pub use self::config::Config;
pub use self::fragment::Fragment;
pub use self::loader::Source;
pub use self::page::Page;
pub use self::view::View;

pub mod card;
pub mod config;
pub mod environment;
pub mod fragment;
pub mod loader;
pub mod logging;
pub mod page;
mod serde;
pub mod view;
