//! Command-line rebalance sizing (the original tool's surface).
//!
//! Reads the six-parameter input surface from argv, solves the split,
//! and prints the encoded uint256 word for downstream transport.
//!
//! # Run
//!
//! ```bash
//! cargo run --example rebalance -- 5000000000 59000 62000 60000 true 8 6
//! ```

use std::env;
use std::process::ExitCode;

use range_rebalancer::encode::encode_word;
use range_rebalancer::solver::{solve_rebalance, RebalanceRequest};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let request = match RebalanceRequest::from_args(&args) {
        Ok(request) => request,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!(
                "usage: rebalance <amount> <lower_tick> <upper_tick> \
                 <current_tick> <is_token0> <dec0> <dec1>"
            );
            return ExitCode::FAILURE;
        }
    };

    match solve_rebalance(&request) {
        Ok(amount) => {
            println!("{}", encode_word(amount));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
