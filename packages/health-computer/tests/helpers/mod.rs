pub use self::{
    mock_computer::*, prop_test_runner_borrow::*, prop_test_runner_withdraw::*,
    prop_test_strategies::*,
};

mod mock_computer;
mod prop_test_runner_borrow;
mod prop_test_runner_withdraw;
mod prop_test_strategies;
