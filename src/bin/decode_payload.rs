// Decode GS1 payloads given on the command line and print the parsed
// fields and authentication record as JSON.
use gs1_scan::{build_authentication_record, convert_dynamic_path_to_gs1};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let payloads: Vec<String> = std::env::args().skip(1).collect();
    if payloads.is_empty() {
        eprintln!("Usage: decode_payload <payload> [<payload> ...]");
        eprintln!("Write <GS> for the FNC1 separator, e.g. '0100012345678905<GS>10ABC123'");
        std::process::exit(1);
    }

    for payload in &payloads {
        // Shells cannot type the FNC1 character, accept a readable stand-in.
        let payload = payload.replace("<GS>", "\u{1d}");

        println!("payload: {}", payload.replace('\u{1d}', "<GS>"));

        let record = build_authentication_record(&payload);
        println!(
            "{}",
            serde_json::to_string_pretty(&record).expect("record serializes")
        );

        if payload.starts_with("http") {
            let conversion = convert_dynamic_path_to_gs1(&payload);
            println!(
                "canonical: {}",
                serde_json::to_string_pretty(&conversion).expect("conversion serializes")
            );
        }

        println!();
    }
}
