//! Performance benchmarks for the page window and post list rendering
//!
//! Tests window computation across collection sizes and render time of the
//! infinite list as it grows.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use postpager::domain::ScrollState;
use postpager::infinite::{InfiniteLoader, ViewportObserver};
use postpager::models::{Page, Post};
use postpager::pagination::page_window;
use postpager::ui::{posts_lines, render_infinite};
use ratatui::{backend::TestBackend, Terminal};

/// Posts with bodies long enough to wrap a few times
fn generate_posts(count: u64) -> Vec<Post> {
    let body = "His mother had always taught him not to ever think of himself as better \
                than others. He'd tried to live by this motto. He never looked down on \
                those who were less fortunate or who had less money than him.";
    (1..=count)
        .map(|id| Post::new(id, format!("Post number {}", id), body))
        .collect()
}

fn bench_page_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_window");

    for total_pages in [1u32, 7, 50, 10_000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_pages", total_pages)),
            total_pages,
            |b, &total_pages| {
                b.iter(|| {
                    for current in [1, total_pages / 2, total_pages] {
                        black_box(page_window(black_box(current.max(1)), total_pages));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_posts_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("posts_lines");

    for count in [5u64, 50, 250].iter() {
        let posts = generate_posts(*count);
        group.throughput(Throughput::Elements(*count));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_posts", count)),
            &posts,
            |b, posts| {
                b.iter(|| black_box(posts_lines(black_box(posts), 80)));
            },
        );
    }

    group.finish();
}

/// Full frame of the infinite list, the view that grows without bound
fn bench_render_infinite(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_infinite");

    for count in [10u32, 100, 250].iter() {
        let posts = generate_posts(*count as u64);
        let loader = InfiniteLoader::new(*count, Page::new(posts, 251, *count, 0));
        let observer = ViewportObserver::new();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();

        group.bench_function(BenchmarkId::from_parameter(format!("{}_posts", count)), |b| {
            b.iter(|| {
                let mut scroll = ScrollState::new();
                terminal
                    .draw(|f| render_infinite(f, f.area(), &loader, &mut scroll, &observer, 0))
                    .unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_page_window, bench_posts_lines, bench_render_infinite);
criterion_main!(benches);
