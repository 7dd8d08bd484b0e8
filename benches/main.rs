use std::time::{Duration, Instant};

use pixelqr::{map_safe_area, render, render_minified, Canvas, Layout, ModuleGrid, Version};

const ROUNDS: u32 = 100;

fn time<F: FnMut()>(mut f: F) -> Duration {
    let start = Instant::now();
    for _ in 0..ROUNDS {
        f();
    }
    start.elapsed() / ROUNDS
}

fn main() {
    println!("🚀 Running PixelQR Benchmark Suite");
    println!("===================================\n");

    let total_start = Instant::now();
    let layout = Layout { module_size: 15, ..Layout::default() };

    println!("{:<10}{:<16}{:<16}{:<16}", "Version", "Safe area", "Render", "Render (min)");
    println!("{}", "-".repeat(58));
    for v in [1, 2, 7, 10, 20, 27, 40] {
        let ver = Version::new(v).unwrap();
        let w = ver.width();
        let grid = ModuleGrid::new(ver, (0..w * w).map(|i| (i * 31 + i / w) % 5 < 2).collect())
            .unwrap();
        let canvas = Canvas::new(grid);

        let mapping = time(|| {
            std::hint::black_box(map_safe_area(ver));
        });
        let full = time(|| {
            let _ = std::hint::black_box(render(canvas.overlay(), &layout));
        });
        let minified = time(|| {
            let _ = std::hint::black_box(render_minified(canvas.overlay(), &layout));
        });

        println!(
            "{:<10}{:<16}{:<16}{:<16}",
            v,
            format!("{mapping:?}"),
            format!("{full:?}"),
            format!("{minified:?}")
        );
    }

    println!("\n✅ All benchmarks completed!");
    println!("Total time elapsed: {:?}", total_start.elapsed());
}
