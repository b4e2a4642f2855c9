//! Walks a byte array through growth, bulk append, trimming and removal,
//! printing capacity and length after every step.
//!
//! Run with `RUST_LOG=dynarr=trace` to also see each reallocation.

use dynarr::{ArrayError, DynamicArray};

fn report(d: &DynamicArray<u8>) {
    println!("capacity = {:3} length = {:3}", d.capacity(), d.length());
}

fn show(d: &DynamicArray<u8>) {
    let text: Vec<String> = d.as_slice().iter().map(|&c| (c as char).to_string()).collect();
    println!("[ {} ]", text.join(" "));
}

fn main() -> Result<(), ArrayError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let buffer = b"text_to_append_blablablasfasgfasgasgasgascasdas123";
    let mut d = DynamicArray::new_default()?;
    report(&d);

    for c in b'a'..=b'q' {
        d.push_back(c)?;
        println!(
            "capacity = {:3} length = {:3} value = {:>3}",
            d.capacity(),
            d.length(),
            *d.last()? as char
        );
    }

    println!(">> Appending buffer now: {}", String::from_utf8_lossy(buffer));
    d.append(buffer)?;
    report(&d);
    println!("{}", String::from_utf8_lossy(d.as_slice()));

    println!(">> Pushing another character");
    d.push_back(b'f')?;
    report(&d);

    println!(">> Trimming array");
    d.trim()?;
    show(&d);
    report(&d);

    println!(">> Starting removal now");
    d.remove_n_and_trim(0, 21)?;
    report(&d);
    show(&d);

    println!(">> Removing single character with trim");
    d.remove_and_trim(10)?;
    show(&d);
    report(&d);

    println!(">> Popping from array");
    d.pop_back()?;
    show(&d);
    report(&d);

    println!(">> Dequeueing from array");
    d.dequeue()?;
    show(&d);
    report(&d);

    Ok(())
}
