//! Resolving search box input
//!
//! This example demonstrates:
//! - Resolving every supported coordinate notation against the Swiss extent
//! - Restricting results to a smaller map view
//! - Running without the LV95 reprojection fallback
//!
//! Pass your own queries as arguments: `cargo run --example resolve_query -- "47.3 8.5"`

use coordsearch::{CoordinateResolver, Extent, ResolverConfigBuilder, TokenAnalyser};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    coordsearch::init_logging(tracing::Level::INFO)?;

    let resolver = CoordinateResolver::new();
    let switzerland = Extent::new(420_000.0, 30_000.0, 900_000.0, 350_000.0)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let queries: Vec<&str> = if args.is_empty() {
        vec![
            "32TLT 12 34",
            "46° 57' 3.9\" N 7° 26' 19.1\" E",
            "47.3 8.5",
            "600 000 200 000",
            "2'600'000 1'200'000",
            "Bahnhofstrasse limit: 5",
        ]
    } else {
        args.iter().map(String::as_str).collect()
    };

    println!("Resolving against {switzerland:?}:");
    for query in &queries {
        print_resolution(query, resolver.resolve_blocking(switzerland, query));
    }

    // A small view around Zurich only accepts coordinates inside it
    let zurich = Extent::new(670_000.0, 230_000.0, 700_000.0, 260_000.0)?;
    println!("\nResolving against the Zurich view:");
    for query in ["683000 248000", "600000 200000"] {
        print_resolution(query, resolver.resolve_blocking(zurich, query));
    }

    // Offline resolvers never try the LV95 reading
    let offline = CoordinateResolver::builder()
        .config(ResolverConfigBuilder::offline().build())
        .build();
    println!("\nOffline resolver:");
    print_resolution(
        "2600000 1200000",
        offline.resolve_blocking(switzerland, "2600000 1200000"),
    );

    // Text that is not a coordinate goes on to the text search with its tokens split off
    let analysed = TokenAnalyser::default().analyse("Bahnhofstrasse limit: 5");
    println!(
        "\nText search for '{}' with parameters {:?}",
        analysed.query, analysed.parameters
    );

    Ok(())
}

fn print_resolution(query: &str, position: Option<[f64; 2]>) {
    match position {
        Some([x, y]) => println!("  {query:<36} -> LV03 {x:.3}, {y:.3}"),
        None => println!("  {query:<36} -> not a coordinate here"),
    }
}
