pub mod text;
pub mod youtube;

pub use text::truncate_with_ellipsis;
