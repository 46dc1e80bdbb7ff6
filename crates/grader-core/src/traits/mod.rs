pub mod oracle;
pub mod parser;

pub use oracle::IScoringOracle;
pub use parser::IDependencyParser;
