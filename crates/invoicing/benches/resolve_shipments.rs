use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use shiplink_core::{ModelRef, RecordId};
use shiplink_invoicing::{InvoiceLine, line_shipments};
use shiplink_stock::{ShipmentIn, ShipmentInReturn, StockMove};

/// A line whose move cache alternates between the two shipment types, with
/// every shipment referenced twice so deduplication has work to do.
fn line_with_moves(n: i64) -> InvoiceLine {
    let stock_moves = (0..n)
        .map(|i| {
            let shipment_id = RecordId::new(i / 4);
            let shipment = if i % 2 == 0 {
                ModelRef::to::<ShipmentIn>(shipment_id)
            } else {
                ModelRef::to::<ShipmentInReturn>(shipment_id)
            };
            StockMove {
                id: RecordId::new(i),
                shipment: Some(shipment),
                quantity: 1,
            }
        })
        .collect();

    InvoiceLine {
        id: RecordId::new(1),
        invoice: RecordId::new(10),
        origin: None,
        stock_moves,
    }
}

fn bench_line_shipments(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_shipments");
    for n in [100i64, 1_000, 10_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let line = line_with_moves(n);
            b.iter(|| line_shipments::<ShipmentIn>(black_box(&line)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_line_shipments);
criterion_main!(benches);
