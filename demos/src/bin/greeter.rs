use argot::{Parser, Value, opt};
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    init_tracing();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let ctx = Parser::new("greeter")
        .describe("A friendly greeter.")
        .arg(opt("-n, --name").describe("Who to greet.").default("World"))
        .parse(&argv);

    let name = ctx.get("name").and_then(Value::as_str).unwrap_or("World");
    println!("Hello, {name}!");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
