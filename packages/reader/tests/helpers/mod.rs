pub use self::mock_querier::*;

mod mock_querier;
