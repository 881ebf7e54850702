use criterion::{
    criterion_group,
    criterion_main,
    Criterion,
};
use spsc_fifo::{
    make_slots,
    SpscFifo,
};
use std::collections::VecDeque;

criterion_group!(bench_fifo, bench_push_pop);
criterion_main!(bench_fifo);

fn bench_push_pop(c: &mut Criterion) {
    let mut g = c.benchmark_group("spsc_fifo::push_pop");
    let rounds = 10_000usize;
    g.bench_function("SpscFifo", |bencher| {
        let mut slots = make_slots::<usize, 64>();
        let mut fifo = SpscFifo::new(&mut slots);
        bencher.iter(|| {
            for i in 0..rounds {
                fifo.try_push(i).ok();
                assert_eq!(fifo.try_pop(), Some(i));
            }
        })
    });
    g.bench_function("VecDeque (reference)", |bencher| {
        let mut deque = VecDeque::with_capacity(64);
        bencher.iter(|| {
            for i in 0..rounds {
                deque.push_back(i);
                assert_eq!(deque.pop_front(), Some(i));
            }
        })
    });
}
