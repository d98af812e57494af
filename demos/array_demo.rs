//! Walks through `FixedArray` with a small sensor table.
//!
//! Run with `cargo run --example array_demo`.

use std::fmt;

use fixed_collections::FixedArray;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Sensor {
    id: u32,
    value: f32,
}

impl Sensor {
    fn new(id: u32, value: f32) -> Self {
        Self { id, value }
    }
}

impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sensor(id={}, value={})", self.id, self.value)
    }
}

fn print_all(sensors: &[Sensor]) {
    for sensor in sensors {
        println!("{sensor}");
    }
}

fn main() {
    let mut sensors: FixedArray<Sensor, 10> = FixedArray::new();

    println!("Capacity: {}", sensors.capacity());
    println!("Len: {}", sensors.len());
    println!("Empty: {}", sensors.is_empty());

    println!("\nAdding elements...");
    sensors.push(Sensor::new(1, 25.5));
    sensors.push(Sensor::new(2, 30.2));
    sensors.push(Sensor::new(3, 15.7));
    println!("Len after adding: {}", sensors.len());

    println!("\nAccessing elements:");
    if let (Some(first), Some(last)) = (sensors.first(), sensors.last()) {
        println!("First: {first}");
        println!("Last: {last}");
    }
    println!("At index 1: {}", sensors[1]);
    match sensors.at(7) {
        Ok(sensor) => println!("At index 7: {sensor}"),
        Err(violation) => println!("At index 7: {violation}"),
    }

    println!("\nIterating:");
    print_all(&sensors);

    println!("\nIterating with indices:");
    for (i, sensor) in sensors.iter().enumerate() {
        println!("[{i}] id={}, value={}", sensor.id, sensor.value);
    }

    println!("\nModifying first element...");
    sensors[0].value = 26.7;
    println!("Modified: {}", sensors[0]);

    println!("\nInserting at position 1...");
    sensors.insert(1, Sensor::new(4, 22.3));
    print_all(&sensors);

    println!("\nRemoving last element...");
    if let Some(removed) = sensors.pop() {
        println!("Removed {removed}");
    }
    print_all(&sensors);

    println!("\nFilling to capacity...");
    sensors.resize_default(sensors.capacity());
    println!("Len: {}, full: {}", sensors.len(), sensors.is_full());
    if let Err(rejected) = sensors.try_push(Sensor::new(99, 0.0)) {
        println!("Refused {}: {}", rejected.value(), rejected.violation());
    }

    println!("\nClearing...");
    sensors.clear();
    println!("Len after clearing: {}", sensors.len());
    println!("Empty: {}", sensors.is_empty());
}
