pub mod common;
pub mod dfa;
pub mod nfa;
pub mod run;
