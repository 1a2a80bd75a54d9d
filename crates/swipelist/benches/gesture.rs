use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use swipelist::{Side, SwipeAction, SwipeConfig};
use swipelist_testing::{FakeList, GestureRobot};

const ROW_COUNT: usize = 64;
const CONCURRENT_SAMPLES: &[usize] = &[1, 4, 8];

fn bench_reveal_swipe(c: &mut Criterion) {
    c.bench_function("reveal_swipe_open_and_close", |b| {
        b.iter(|| {
            let mut robot = GestureRobot::with_rows(ROW_COUNT);
            robot.swipe(black_box(3), -300.0);
            robot.settle();
            robot.swipe(3, 300.0);
            robot.settle();
            black_box(robot.controller().row_state(3));
        });
    });
}

fn bench_programmatic_open(c: &mut Criterion) {
    c.bench_function("open_animate_visible_rows", |b| {
        b.iter(|| {
            let mut robot = GestureRobot::with_rows(ROW_COUNT);
            let last = robot.list().visible_count();
            for row in 0..last {
                let side = if row % 2 == 0 { Side::Left } else { Side::Right };
                let _ = robot.controller_mut().open_animate(row, side);
            }
            robot.settle();
            robot.controller_mut().close_opened_items();
            robot.settle();
            black_box(robot.events().len());
        });
    });
}

fn bench_concurrent_dismiss(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_dismiss");
    for &count in CONCURRENT_SAMPLES {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let config = SwipeConfig::default().with_action_left(SwipeAction::Dismiss);
                let mut robot = GestureRobot::with_config(FakeList::new(ROW_COUNT), config);
                for row in 0..count {
                    robot.fling(row, -200.0);
                }
                robot.settle();
                black_box(robot.outcomes());
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_reveal_swipe,
    bench_programmatic_open,
    bench_concurrent_dismiss
);
criterion_main!(benches);
