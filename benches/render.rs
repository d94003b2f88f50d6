use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_wumpus::core::{maps, Grid, Kernel, World};
use tui_wumpus::term::Screen;
use tui_wumpus::types::{Direction, Pos};

fn bench_full_render(c: &mut Criterion) {
    let mut world = World::new(Screen::headless(80, 24));

    c.bench_function("render_default_map", |b| {
        b.iter(|| {
            world.render().unwrap();
        })
    });
}

fn bench_kernel(c: &mut Criterion) {
    let grid = Grid::load(&maps::DEFAULT).unwrap();

    c.bench_function("kernel_all_rooms", |b| {
        b.iter(|| {
            for y in 0..grid.height() as i32 {
                for x in 0..grid.width() as i32 {
                    black_box(Kernel::around(&grid, Pos::new(x, y)));
                }
            }
        })
    });
}

fn bench_selection(c: &mut Criterion) {
    let mut world = World::new(Screen::headless(80, 24));

    c.bench_function("selection_up_down", |b| {
        b.iter(|| {
            world.move_selection(black_box(Direction::Up));
            world.move_selection(black_box(Direction::Down));
        })
    });
}

criterion_group!(benches, bench_full_render, bench_kernel, bench_selection);
criterion_main!(benches);
