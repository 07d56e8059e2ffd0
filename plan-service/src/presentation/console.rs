//! Console front end: prompts for a request on a reader and prints the plan
//!
//! Reader and writer are injected so the flow runs the same against stdin or
//! an in-memory buffer.

use rust_decimal::Decimal;
use splitfill_core::Side;
use splitfill_ports::{ExchangeRepository, ExecutionPlanner};
use std::io::{self, BufRead, Write};

use crate::application::{ExecutionPlanDto, GetExecutionPlanRequest, GetExecutionPlanUseCase};

/// Prompt for order type and amount, then print the resulting plan.
///
/// Invalid input ends the session with a message; planning failures are
/// reported on the writer. Only I/O failures are returned as errors.
pub async fn run_interactive<R, P, I, O>(
    use_case: &GetExecutionPlanUseCase<R, P>,
    mut input: I,
    output: &mut O,
) -> io::Result<()>
where
    R: ExchangeRepository,
    P: ExecutionPlanner,
    I: BufRead,
    O: Write,
{
    writeln!(output, "Enter order type (buy/sell): ")?;
    let Some(side) = read_line(&mut input)?.and_then(|line| line.parse::<Side>().ok()) else {
        writeln!(output, "Invalid order type. Exiting.")?;
        return Ok(());
    };

    writeln!(output, "Enter the amount of Crypto: ")?;
    let Some(amount) = read_line(&mut input)?.and_then(|line| line.trim().parse::<Decimal>().ok())
    else {
        writeln!(output, "Invalid amount. Exiting.")?;
        return Ok(());
    };

    match use_case
        .execute(GetExecutionPlanRequest { side, amount })
        .await
    {
        Ok(plan) => print_plan(&plan, output),
        Err(e) => writeln!(
            output,
            "An error occurred while processing the order: {}",
            e
        ),
    }
}

/// Print one line per fill followed by the total cost or revenue
pub fn print_plan<O: Write>(plan: &ExecutionPlanDto, output: &mut O) -> io::Result<()> {
    writeln!(output, "Execution Plan:")?;

    for order in &plan.orders {
        writeln!(
            output,
            "Exchange: {}; Price: {}; Amount: {}",
            order.exchange_id, order.price, order.amount
        )?;
    }

    writeln!(
        output,
        "Total {}: {}",
        plan.side.total_label(),
        plan.total_cost
    )
}

/// `None` at end of input
fn read_line<I: BufRead>(input: &mut I) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
