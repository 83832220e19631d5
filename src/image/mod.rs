pub mod io;
pub mod luma;
pub mod raw;

pub use self::luma::LumaBuffer;
pub use self::raw::RawImage;
