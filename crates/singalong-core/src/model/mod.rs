pub mod convention;
pub mod song;

pub use convention::NamingConvention;
pub use song::ParsedSong;
