//! Step timing across grid sizes

use std::time::Instant;
use toroidal_life::Grid;

const SEED: u64 = 1234123;

fn benchmark_step(size: usize, iterations: u32) -> f64 {
    let mut grid = Grid::seeded(size, size, SEED);

    let start = Instant::now();
    for _ in 0..iterations {
        grid.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    env_logger::init();
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [64, 100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>12} {:>12} {:>16}", "Size", "ms/gen", "Mcells/sec");
    println!("{:-<42}", "");

    for size in sizes {
        let ms = benchmark_step(size, iterations);
        let cells = (size * size) as f64;
        log::debug!("{size}x{size}: {iterations} generations");

        println!(
            "{:>12} {:>12.3} {:>16.1}",
            format!("{}x{}", size, size),
            ms,
            cells / (ms / 1000.0) / 1_000_000.0
        );
    }
}
