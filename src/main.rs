mod postfix_engine;

#[cfg(all(feature = "line", not(feature = "tui")))]
mod line_mode;
#[cfg(feature = "tui")]
mod render_help;
#[cfg(feature = "tui")]
mod tui_mode;

use anyhow::Result;

fn main() -> Result<()> {
    run()
}

#[cfg(feature = "tui")]
fn run() -> Result<()> {
    tui_mode::run_tui()
}

#[cfg(all(feature = "line", not(feature = "tui")))]
fn run() -> Result<()> {
    line_mode::run_line()
}

#[cfg(not(any(feature = "tui", feature = "line")))]
fn run() -> Result<()> {
    use std::io::{self, Write};

    use crate::postfix_engine::{convert, Limits, TRACE_HEADER};

    print!("Enter the expression\t->\t");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    match convert(input.trim(), Limits::default()) {
        Ok(conversion) => {
            println!("Postfix : {}", conversion.postfix);
            println!("{}", TRACE_HEADER);
            for step in &conversion.steps {
                println!("{}", step);
            }
        }
        Err(e) => println!("Error: {}", e),
    }
    Ok(())
}
