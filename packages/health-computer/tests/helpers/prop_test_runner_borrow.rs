use cosmwasm_std::Decimal;
use proptest::test_runner::{Config, TestRunner};

use super::{assert_close, random_health_computer};

/// Borrowing the solver's amount must land on or just above `floor`.
pub fn max_borrow_prop_test_runner(cases: u32, floor: Decimal) {
    let config = Config::with_cases(cases);

    let mut runner = TestRunner::new(config);
    runner
        .run(&random_health_computer(), |h| {
            let max_borrow = h.max_borrow_amount_estimate(floor).unwrap();

            let hf_before = h.compute_health().unwrap().liquidation_health_factor.unwrap();
            if hf_before < floor {
                assert_eq!(Decimal::zero(), max_borrow);
                return Ok(());
            }
            if max_borrow.is_zero() {
                return Ok(());
            }

            let res = h.simulate_borrow(&max_borrow.to_string()).unwrap();
            let simulated = res.simulated_health_factor.unwrap().finite().unwrap();
            assert!(simulated >= floor, "{} borrowed leaves HF {} below {}", max_borrow, simulated, floor);
            assert_close(simulated, floor, Decimal::from_atomics(1u128, 6).unwrap());
            Ok(())
        })
        .unwrap();
}
