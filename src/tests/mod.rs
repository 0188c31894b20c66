#[macro_use]
mod util;

mod validation;
mod parsing;
