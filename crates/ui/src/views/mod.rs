mod rules;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use rules::RulesView;
pub use state::{ViewError, ViewState, view_state_from_resource};
