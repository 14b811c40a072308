use std::str::FromStr;

use cosmwasm_std::Decimal;
use lendview_types::{
    health::Health,
    simulation::{BorrowSimulation, DepositSimulation, RepaySimulation, WithdrawSimulation},
};
use wasm_bindgen::prelude::*;

use crate::{gauge_percentage, health_band, HealthComputer};

// Note: Arguments and return values must use:
//          #[derive(Tsify)]
//          #[tsify(into_wasm_abi, from_wasm_abi)]
//      as attributes in order for Typescript type generation to work

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

fn js_err(e: impl ToString) -> JsError {
    JsError::new(&e.to_string())
}

#[wasm_bindgen]
pub fn compute_health_js(c: HealthComputer) -> Result<Health, JsError> {
    c.compute_health().map_err(js_err)
}

#[wasm_bindgen]
pub fn health_band_js(c: HealthComputer) -> Result<Option<String>, JsError> {
    let health = c.compute_health().map_err(js_err)?;
    Ok(health_band(health.liquidation_health_factor).map(|band| band.label().to_string()))
}

#[wasm_bindgen]
pub fn gauge_percentage_js(c: HealthComputer) -> Result<String, JsError> {
    let health = c.compute_health().map_err(js_err)?;
    Ok(gauge_percentage(health.liquidation_health_factor).map_err(js_err)?.to_string())
}

#[wasm_bindgen]
pub fn simulate_borrow_js(c: HealthComputer, amount: String) -> Result<BorrowSimulation, JsError> {
    c.simulate_borrow(&amount).map_err(js_err)
}

#[wasm_bindgen]
pub fn simulate_repay_js(c: HealthComputer, amount: String) -> Result<RepaySimulation, JsError> {
    c.simulate_repay(&amount).map_err(js_err)
}

#[wasm_bindgen]
pub fn simulate_withdraw_js(
    c: HealthComputer,
    asset: String,
    amount: String,
) -> Result<WithdrawSimulation, JsError> {
    c.simulate_withdraw(&asset, &amount).map_err(js_err)
}

#[wasm_bindgen]
pub fn simulate_deposit_js(
    c: HealthComputer,
    asset: String,
    amount: String,
) -> Result<DepositSimulation, JsError> {
    c.simulate_deposit(&asset, &amount).map_err(js_err)
}

#[wasm_bindgen]
pub fn max_withdraw_estimate_js(
    c: HealthComputer,
    asset: String,
    floor: String,
) -> Result<String, JsError> {
    let floor = Decimal::from_str(&floor).map_err(js_err)?;
    Ok(c.max_withdraw_amount_estimate(&asset, floor).map_err(js_err)?.to_string())
}

#[wasm_bindgen]
pub fn max_borrow_estimate_js(c: HealthComputer, floor: String) -> Result<String, JsError> {
    let floor = Decimal::from_str(&floor).map_err(js_err)?;
    Ok(c.max_borrow_amount_estimate(floor).map_err(js_err)?.to_string())
}
