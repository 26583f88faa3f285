//! Polynomial Driver
//!
//! Reads two polynomials from standard input as `coefficient exponent` pairs,
//! each terminated by `-1 -1`, then prints them along with their sum,
//! difference and product.
//!
//! Run with: cargo run --example poly_driver
//!
//! ```text
//! $ printf '3 2 -1 1 5 0 -1 -1\n1 1 2 0 -1 -1\n' | cargo run --example poly_driver
//! ```
//!
//! Set `RUST_LOG=intpoly=trace` to see buffer growth as the input is applied.

use std::io::{self, BufRead};
use std::process::ExitCode;

use intpoly::{Poly, PolyError, TokenReader};
use tracing_subscriber::{prelude::*, EnvFilter};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(io::stdin().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run<R: BufRead>(input: R) -> Result<(), PolyError> {
    let mut tokens = TokenReader::new(input);

    let mut p = Poly::default();
    p.read_from(&mut tokens)?;
    let mut q = Poly::default();
    q.read_from(&mut tokens)?;

    println!("p     ={}", p);
    println!("q     ={}", q);
    println!("p + q ={}", &p + &q);
    println!("p - q ={}", &p - &q);
    println!("p * q ={}", &p * &q);
    println!("p == q: {}", p == q);
    println!("p(2)  = {}", p.eval(2));

    let mut acc = p.clone();
    acc *= &q;
    acc += &p;
    println!("p * q + p ={}", acc);

    Ok(())
}
