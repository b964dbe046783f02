//! Benchmarks for pdftext extraction performance.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use pdftext::Pdf;

/// Build a synthetic PDF with the given number of text pages.
fn create_test_pdf(page_count: usize) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for i in 0..page_count {
        let text = format!("Page {} - benchmark test content for pdftext.", i + 1);
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content stream"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("serialize benchmark PDF");
    buf
}

fn bench_load(c: &mut Criterion) {
    let bytes = create_test_pdf(10);
    c.bench_function("load_10_pages", |b| {
        b.iter(|| Pdf::new(black_box(&bytes)).unwrap())
    });
}

fn bench_single_page(c: &mut Criterion) {
    let bytes = create_test_pdf(10);
    let pdf = Pdf::new(&bytes).unwrap();
    c.bench_function("get_text_one_page", |b| {
        b.iter(|| pdf.get_text(black_box(0)).unwrap())
    });
}

fn bench_read_all(c: &mut Criterion) {
    let bytes = create_test_pdf(10);
    let pdf = Pdf::new(&bytes).unwrap();
    c.bench_function("read_all_10_pages", |b| b.iter(|| pdf.read_all().unwrap()));
}

criterion_group!(benches, bench_load, bench_single_page, bench_read_all);
criterion_main!(benches);
