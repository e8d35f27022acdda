use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use contact_book::prelude::{Contact, ContactManager, ContactUpdate, MemoryStorage};

// Manager prepopulated with `n` contacts; every fifth one is a favorite.
// MemoryStorage keeps the measurements on CPU work rather than disk I/O.
fn make_manager_with_n(n: usize) -> ContactManager {
    let contacts = (0..n)
        .map(|i| {
            Contact::new(
                format!("User{i}"),
                format!("0888{i:07}"),
                format!("user{i}@yahoo.com"),
            )
            .with_group(if i % 2 == 0 { "Friends" } else { "Work" }.to_string())
            .with_favorite(i % 5 == 0)
        })
        .collect();

    ContactManager::new(Box::new(MemoryStorage::with_contacts(contacts))).expect("manager")
}

fn bench_add(c: &mut Criterion) {
    c.bench_function("adding one contact to 50k", |b| {
        b.iter_batched(
            || make_manager_with_n(50_000),
            |mut manager| {
                manager.add_contact(Contact::new(
                    "Zoe".to_string(),
                    "08885499529".to_string(),
                    "zoe@gmail.com".to_string(),
                ));
                black_box(manager.len());
            },
            BatchSize::LargeInput,
        );
    });
}

fn bench_list(c: &mut Criterion) {
    let manager = make_manager_with_n(50_000);

    c.bench_function("listing 50k contacts (favorites first)", |b| {
        b.iter(|| black_box(manager.contact_list().len()));
    });
}

fn bench_search(c: &mut Criterion) {
    let manager = make_manager_with_n(50_000);

    c.bench_function("searching 50k contacts by name", |b| {
        b.iter(|| black_box(manager.search_contacts(black_box("user4999")).len()));
    });

    c.bench_function("searching 50k contacts by email domain", |b| {
        b.iter(|| black_box(manager.search_contacts(black_box("YAHOO.COM")).len()));
    });
}

fn bench_update(c: &mut Criterion) {
    c.bench_function("updating one of 50k contacts", |b| {
        b.iter_batched(
            || make_manager_with_n(50_000),
            |mut manager| {
                let update = ContactUpdate::from_input("08000000000", "", "", Some(true));
                black_box(manager.update_contact("User25000", update));
            },
            BatchSize::LargeInput,
        );
    });
}

fn bench_save(c: &mut Criterion) {
    c.bench_function("saving 50k contacts to memory", |b| {
        b.iter_batched(
            || make_manager_with_n(50_000),
            |mut manager| manager.save().expect("save"),
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    bench_add,
    bench_list,
    bench_search,
    bench_update,
    bench_save
);
criterion_main!(benches);
