pub mod decode;
pub mod detect;
pub mod encode;
pub mod load;
pub mod preset;
pub mod share;
