use criterion::{black_box, criterion_group, criterion_main, Criterion};
use echobus::{Broker, Emitter, Handler, WildcardHandler};
use std::cell::Cell;
use std::rc::Rc;

fn benchmark_emit_dispatch(c: &mut Criterion) {
    for handler_count in [1usize, 8, 64] {
        let emitter = Emitter::<u64>::new();
        let sink = Rc::new(Cell::new(0u64));

        for _ in 0..handler_count {
            let sink = sink.clone();
            emitter.on(
                "tick",
                Handler::new(move |event| sink.set(sink.get().wrapping_add(*event))),
            );
        }

        c.bench_function(&format!("emit_{handler_count}_handlers"), |b| {
            b.iter(|| emitter.emit(black_box("tick"), black_box(1)))
        });
    }
}

fn benchmark_emit_with_wildcard(c: &mut Criterion) {
    let emitter = Emitter::<u64>::new();
    let sink = Rc::new(Cell::new(0u64));

    let typed_sink = sink.clone();
    emitter.on(
        "tick",
        Handler::new(move |event| typed_sink.set(typed_sink.get().wrapping_add(*event))),
    );
    let wildcard_sink = sink.clone();
    emitter.on_any(WildcardHandler::new(move |_, event| {
        wildcard_sink.set(wildcard_sink.get().wrapping_add(*event))
    }));

    c.bench_function("emit_typed_plus_wildcard", |b| {
        b.iter(|| emitter.emit(black_box("tick"), black_box(1)))
    });
}

fn benchmark_replayed_subscribe(c: &mut Criterion) {
    let emitter = Emitter::<u64>::new();
    emitter.emit("tick", 42);

    c.bench_function("subscribe_with_replay", |b| {
        b.iter(|| {
            let sink = Rc::new(Cell::new(0u64));
            let handler_sink = sink.clone();
            let handler = Handler::new(move |event: &u64| handler_sink.set(*event));
            emitter.on("tick", handler.clone());
            emitter.off("tick", &handler).expect("handler just registered");
            black_box(sink.get())
        })
    });
}

fn benchmark_channel_lookup(c: &mut Criterion) {
    let broker = Broker::<u64>::new();
    let _ = broker.channel("hot");

    c.bench_function("broker_channel_lookup", |b| {
        b.iter(|| black_box(broker.channel(black_box("hot"))))
    });
}

criterion_group!(
    benches,
    benchmark_emit_dispatch,
    benchmark_emit_with_wildcard,
    benchmark_replayed_subscribe,
    benchmark_channel_lookup
);
criterion_main!(benches);
