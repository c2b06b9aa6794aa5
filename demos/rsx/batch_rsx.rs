//! RSX Examples
//!
//! This example demonstrates the RSX oscillator in each execution mode:
//! - One-shot filtering of a daily close series
//! - Batch processing with a full summary
//! - Chunked streaming and per-sample online updates
//! - A sweep over lengths 2 through 15
//!
//! Set `RUST_LOG=debug` to see adapter logging.

#[cfg(feature = "std")]
use rsx::prelude::*;

#[cfg(feature = "std")]
const CLOSES: [f64; 40] = [
    91.500, 94.815, 94.375, 95.095, 93.780, 94.625, 92.530, 92.750, 90.315, 92.470, 96.125,
    97.250, 98.500, 89.875, 91.000, 92.815, 89.155, 89.345, 91.625, 89.875, 88.375, 87.625,
    84.780, 83.000, 83.500, 81.375, 84.440, 89.250, 86.375, 86.250, 85.250, 87.125, 85.815,
    88.970, 88.470, 86.875, 86.815, 84.875, 84.190, 83.875,
];

#[cfg(feature = "std")]
fn main() -> Result<(), RsxError> {
    env_logger::init();

    println!("{}", "=".repeat(80));
    println!("RSX - Relative Strength Xtra");
    println!("{}", "=".repeat(80));
    println!();

    example_1_one_shot()?;
    example_2_batch_summary()?;
    example_3_streaming_and_online()?;
    example_4_sweep()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: One-shot filtering
fn example_1_one_shot() -> Result<(), RsxError> {
    println!("Example 1: One-shot");
    println!("{}", "-".repeat(80));

    let values = compute_rsx(&CLOSES, 3.0)?;
    for (close, value) in CLOSES.iter().zip(&values).skip(4).take(6) {
        println!("close {:>8.3}  rsx(3) {:>8.3}", close, value);
    }
    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Batch processing with the result summary
fn example_2_batch_summary() -> Result<(), RsxError> {
    println!("Example 2: Batch");
    println!("{}", "-".repeat(80));

    let model = Rsx::new().length(14.0).adapter(Batch).build()?;
    let result = model.compute(&CLOSES)?;
    println!("{}", result);
    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Streaming and online processing give the batch values
fn example_3_streaming_and_online() -> Result<(), RsxError> {
    println!("Example 3: Streaming and Online");
    println!("{}", "-".repeat(80));

    let batch = compute_rsx(&CLOSES, 5.0)?;

    let mut stream = Rsx::new().length(5.0).adapter(Streaming).build()?;
    let mut streamed = Vec::new();
    for chunk in CLOSES.chunks(8) {
        streamed.extend(stream.process_chunk(chunk)?);
    }

    let mut online = Rsx::new().length(5.0).adapter(Online).build()?;
    let live = online.update_all(&CLOSES);

    println!("{}: {}", online.name(), online.description());
    println!("streaming matches batch: {}", streamed == batch);
    println!("online matches batch:    {}", live == batch);
    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 4: Sweep over the default lengths
fn example_4_sweep() -> Result<(), RsxError> {
    println!("Example 4: Sweep");
    println!("{}", "-".repeat(80));

    let entries = Rsx::new().adapter(Sweep).parallel(true).build()?.compute(&CLOSES)?;

    println!("{:>8} {:>12} {:>12}", "Length", "Last", "Primed at");
    for entry in &entries {
        let last = entry.result.values.last().copied().unwrap_or(f64::NAN);
        let primed_at = entry
            .result
            .primed_at
            .map_or_else(|| "never".to_string(), |i| i.to_string());
        println!("{:>8} {:>12.6} {:>12}", entry.length, last, primed_at);
    }
    println!();
    Ok(())
}
