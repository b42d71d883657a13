pub mod enums;
pub mod shared;
