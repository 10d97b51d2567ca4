mod expense;
mod interval;
mod ledger;
mod money;
mod state;
mod transaction;

pub use expense::*;
pub use interval::*;
pub use ledger::*;
pub use money::*;
pub use state::*;
pub use transaction::*;
