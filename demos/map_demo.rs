//! Walks through `FixedSortedMap` with a small device registry.
//!
//! Run with `cargo run --example map_demo`.

use std::fmt;

use fixed_collections::FixedSortedMap;

#[derive(Debug, Clone, Default, PartialEq)]
struct DeviceInfo {
    name: String,
    temperature: f32,
}

impl DeviceInfo {
    fn new(name: &str, temperature: f32) -> Self {
        Self {
            name: name.to_string(),
            temperature,
        }
    }
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DeviceInfo(name={}, temperature={}°C)",
            self.name, self.temperature
        )
    }
}

type Registry = FixedSortedMap<u32, DeviceInfo, 8>;

fn print_all(devices: &Registry) {
    for (id, info) in devices {
        println!("Device ID: {id}, Info: {info}");
    }
}

fn main() {
    let mut devices = Registry::new();

    println!("Capacity: {}", devices.capacity());
    println!("Len: {}", devices.len());
    println!("Empty: {}", devices.is_empty());

    println!("\nAdding elements (out of order)...");
    devices.insert(3, DeviceInfo::new("Pressure Sensor", 15.7));
    devices.insert(1, DeviceInfo::new("Temperature Sensor", 25.5));
    devices.insert(2, DeviceInfo::new("Humidity Sensor", 30.2));
    println!("Len after adding: {}", devices.len());

    println!("\nIndexing:");
    println!("Device 1: {}", devices[&1]);
    println!("Device 2: {}", devices[&2]);

    println!("\nChecked access:");
    match devices.at(&3) {
        Ok(info) => println!("Device 3: {info}"),
        Err(violation) => println!("Device 3: {violation}"),
    }
    match devices.at(&9) {
        Ok(info) => println!("Device 9: {info}"),
        Err(violation) => println!("Device 9: {violation}"),
    }

    println!("\nIterating (sorted by ID):");
    print_all(&devices);

    println!("\nIterating names in reverse:");
    for (id, info) in devices.iter().rev() {
        println!("Device ID: {id}, Name: {}", info.name);
    }

    println!("\nModifying device 1...");
    if let Some(info) = devices.get_mut(&1) {
        info.temperature = 26.7;
    }
    println!("Modified device 1: {}", devices[&1]);

    let key = 4;
    println!(
        "\nKey {key} present: {}",
        if devices.contains_key(&key) { "yes" } else { "no" }
    );

    println!("\nAdding device {key} through get_or_insert_default...");
    match devices.get_or_insert_default(key) {
        Ok(slot) => *slot = DeviceInfo::new("Motion Sensor", 22.3),
        Err(rejected) => println!("Refused key {}: {}", rejected.value(), rejected.violation()),
    }
    print_all(&devices);

    println!("\nRange 2..=3:");
    for (id, info) in devices.range(2..=3) {
        println!("Device ID: {id}, Name: {}", info.name);
    }

    println!("\nRemoving key 2...");
    devices.erase(&2);
    print_all(&devices);

    println!("\nClearing...");
    devices.clear();
    println!("Len after clearing: {}", devices.len());
    println!("Empty: {}", devices.is_empty());
}
