pub mod allowed;
pub mod number;
pub mod object;
pub mod string;

pub use allowed::{EnumCandidate, EnumConstants};
pub use number::Number;
