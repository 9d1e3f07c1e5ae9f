//! Decode a replay and print a summary.
//!
//! With a path argument the file is decoded; without one a synthetic
//! reference replay is used. Set `RUST_LOG=boostpad_replay=debug` to see
//! decoder tracing.

use boostpad_bench::reference_profile;
use boostpad_core::PropertyMap;
use boostpad_replay::{decode, FileSource};
use tracing_subscriber::EnvFilter;

fn print_properties(props: &PropertyMap, indent: usize) {
    for prop in props.iter() {
        match prop.groups() {
            Some(groups) => {
                println!("{:indent$}{} [{}]: {} groups", "", prop.name, prop.tag, groups.len());
                for (i, group) in groups.iter().enumerate() {
                    println!("{:indent$}  #{i}", "", indent = indent);
                    print_properties(group, indent + 4);
                }
            }
            None => println!("{:indent$}{} [{}] = {}", "", prop.name, prop.tag, prop.value),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let result = match std::env::args().nth(1) {
        Some(path) => {
            println!("=== {path} ===\n");
            decode(&FileSource::open(path))
        }
        None => {
            println!("=== synthetic reference replay ===\n");
            decode(&reference_profile(42))
        }
    };

    let doc = match result {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("decode failed: {e}");
            std::process::exit(1);
        }
    };

    let h = &doc.header;
    println!("class:    {}", h.class_name);
    println!(
        "versions: engine={} licensee={} net={}",
        h.engine_version,
        h.licensee_version,
        h.net_version.map_or_else(|| "-".to_string(), |v| v.to_string())
    );
    println!();

    println!("properties:");
    print_properties(&doc.properties, 2);
    println!();

    println!("levels:        {:?}", doc.levels);
    println!("keyframes:     {}", doc.keyframes.len());
    println!("network data:  {} bytes", doc.network_data.len());
    println!("debug entries: {}", doc.debug_entries.len());
    println!("tickmarks:     {}", doc.tickmarks.len());
    println!("packages:      {}", doc.packages.len());
    println!("objects:       {}", doc.objects.len());
    println!("names:         {}", doc.names.len());
}
