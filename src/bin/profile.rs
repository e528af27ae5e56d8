use std::time::Instant;

use kruskal_maze::create;

fn main() -> Result<(), kruskal_maze::MazeError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(100);
    let width = args.next().and_then(|s| s.parse::<u16>().ok()).unwrap_or(255);
    let height = args.next().and_then(|s| s.parse::<u16>().ok()).unwrap_or(255);

    tracing::info!(
        "[profile] Generating {} mazes of {}x{} cells",
        num_iters,
        width,
        height
    );
    let started = Instant::now();
    for i in 0..num_iters {
        create(width, height, Some(i as u64))?;
    }
    let elapsed = started.elapsed();
    tracing::info!(
        "[profile] Done in {:?} ({:.3} ms per maze)",
        elapsed,
        elapsed.as_secs_f64() * 1000.0 / num_iters.max(1) as f64
    );
    Ok(())
}
