use std::{env::current_dir, fs};

use lendview_health_computer::HealthComputer;
use lendview_types::simulation::{
    BorrowSimulation, DepositSimulation, RepaySimulation, WithdrawSimulation,
};
use schemars::schema_for;

fn main() -> std::io::Result<()> {
    let mut out_dir = current_dir()?;
    out_dir.push("schema");
    fs::create_dir_all(&out_dir)?;

    let schemas = [
        ("lendview-health-computer.json", schema_for!(HealthComputer)),
        ("borrow-simulation.json", schema_for!(BorrowSimulation)),
        ("repay-simulation.json", schema_for!(RepaySimulation)),
        ("withdraw-simulation.json", schema_for!(WithdrawSimulation)),
        ("deposit-simulation.json", schema_for!(DepositSimulation)),
    ];
    for (file, schema) in schemas {
        let output = serde_json::to_string_pretty(&schema)?;
        fs::write(out_dir.join(file), output)?;
    }

    Ok(())
}
