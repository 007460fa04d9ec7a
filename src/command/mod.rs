mod visualize;

pub use visualize::{parse_invocation, run_visualize, ParsedInvocation};
