use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sortvis::array::{Layout, ListGenerator};
use sortvis::bench::{BarChart, Frame, Renderer};
use sortvis::sort::run_to_completion;
use sortvis::{Algorithm, Direction, SortDriver};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn random_values(count: usize) -> Vec<i32> {
    ListGenerator::new(count, 0, 100, Some(0xC0FFEE))
        .generate()
        .values()
        .to_vec()
}

fn benchmark_full_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_sort");

    for count in [100usize, 1000] {
        let input = random_values(count);
        for algorithm in Algorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(format!("{algorithm:?}"), count),
                &input,
                |b, input| {
                    b.iter(|| {
                        let mut values = input.clone();
                        let mut driver = SortDriver::new(algorithm, values.len());
                        run_to_completion(&mut driver, black_box(&mut values), Direction::Ascending)
                    });
                },
            );
        }
    }

    group.finish();
}

fn benchmark_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");

    let array = ListGenerator::new(100, 0, 100, Some(1)).generate();
    let layout = Layout::compute(&array, BUFFER_WIDTH, BUFFER_HEIGHT);
    let mut renderer = Renderer::new(BUFFER_WIDTH, BUFFER_HEIGHT);

    group.bench_function("bar_chart_100", |b| {
        b.iter(|| {
            let frame = Frame {
                values: array.values(),
                min_val: array.min_val(),
                max_val: array.max_val(),
                layout: &layout,
                highlights: &[],
                algorithm: Algorithm::Bubble,
                direction: Direction::Ascending,
            };
            BarChart::draw(&mut renderer, black_box(&frame));
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_full_sort, benchmark_frame);
criterion_main!(benches);
