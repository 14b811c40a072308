use cosmwasm_std::Decimal;
use lendview_health_computer::HealthComputer;
use proptest::{
    strategy::Strategy,
    test_runner::{Config, TestRunner},
};

use super::{assert_close, random_health_computer};

/// Simulating the solver's amount must land on or just above `floor`.
pub fn max_withdraw_prop_test_runner(cases: u32, floor: Decimal) {
    let config = Config::with_cases(cases);

    let mut runner = TestRunner::new(config);
    runner
        .run(
            &random_health_computer()
                .prop_filter("Withdraw needs at least one deposit", |h| !h.holdings.is_empty()),
            |h| {
                let asset = h.holdings.first().unwrap().asset.clone();
                let max_withdraw = h.max_withdraw_amount_estimate(&asset, floor).unwrap();

                let health_before = h.compute_health().unwrap();
                let hf_before = health_before.liquidation_health_factor.unwrap();
                if hf_before < floor {
                    assert_eq!(Decimal::zero(), max_withdraw);
                    return Ok(());
                }
                if max_withdraw.is_zero() {
                    return Ok(());
                }

                let res = h.simulate_withdraw(&asset, &max_withdraw.to_string()).unwrap();
                let simulated = res.simulated_health_factor.unwrap().finite().unwrap();
                assert!(simulated >= floor, "{} withdrawn leaves HF {} below {}", max_withdraw, simulated, floor);

                if !withdraws_everything(&h, &asset, max_withdraw) {
                    assert_close(simulated, floor, Decimal::from_atomics(1u128, 6).unwrap());
                }
                Ok(())
            },
        )
        .unwrap();
}

fn withdraws_everything(h: &HealthComputer, asset: &str, amount: Decimal) -> bool {
    let config = h.asset_config(asset).unwrap();
    amount >= config.amount_to_decimal(h.deposited_amount(asset)).unwrap()
}
