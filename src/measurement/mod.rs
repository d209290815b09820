pub mod parser;
pub mod types;


pub use parser::{parse_measurement, ParseError};
pub use types::{Measurement, Quantity};
