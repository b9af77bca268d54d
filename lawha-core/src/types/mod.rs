pub mod key;
pub mod layout;

pub use key::{KeyClass, KeyDef, SpecialKey, ARABIC_DIGITS, TASHKEEL_MARKS};
pub use layout::{Layout, TextDirection};
