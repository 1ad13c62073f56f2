//! Scripted Session Example
//!
//! Feeds a few key scripts through the engine and prints what the screen
//! would show after each one.
//!
//! Run with: cargo run --example scripted_session

use keypad_calculator::prelude::*;

fn main() -> Result<(), CalcError> {
    let scripts = ["5+3=", "9÷0=", "2+3×4=", "1..5", "7+-2=", "1÷3="];

    let mut engine = Engine::new();
    for script in scripts {
        engine.clear();
        engine.press_all(parse_key_script(script)?);
        println!("{script:>8}  ->  {:<12} [{}]", engine.display(), engine.equation());
    }

    Ok(())
}
