// Reconstruct an image from its k largest singular values.
//
// Usage: cargo run --example rank_k_image -- <IMAGE> [k] [OUT]

use std::env;
use std::error::Error;
use std::process;

use rusty_lowrank::prelude::*;

pub fn main() -> std::result::Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let path = args.next().unwrap_or_else(|| {
        eprintln!("Usage: cargo run --example rank_k_image -- <IMAGE> [k] [OUT]");
        process::exit(1);
    });
    let requested = match args.next() {
        Some(k) => Some(k.parse::<usize>()?),
        None => None,
    };
    let out = args.next().unwrap_or_else(|| "rank_k.png".to_string());

    let session = Session::new(load_grayscale(&path)?)?;
    let rank = match requested {
        Some(k) => session.clamp_rank(k),
        None => session.default_rank(),
    };

    let approx = session.approximate(rank)?;

    println!(
        "Image reconstructed from the first {} of {} singular values.",
        rank,
        session.max_rank()
    );
    println!();
    println!("{}", approx.storage);
    println!(
        "Relative error: {:.3E}",
        approx.matrix.rel_diff(session.input().view())
    );
    if let Some(db) = psnr(approx.matrix.view(), session.input().view()) {
        println!("PSNR: {:.2} dB", db);
    }

    save_grayscale(&out, approx.matrix.view())?;
    println!("Saved {}", out);

    Ok(())
}
