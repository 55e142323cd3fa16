use argot::{Accepts, Parser, Value, cmd, opt, pos};
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    init_tracing();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let parser = Parser::new("server")
        .describe("A server cli.")
        .command(
            cmd("serve")
                .help_label("serve [port]")
                .describe("Start a server on the specified port.")
                .handler(|scope| {
                    scope.arg(
                        pos("port")
                            .describe("The port to listen on.")
                            .accepts(Accepts::Number)
                            .default(3000),
                    )
                }),
        )
        .arg(
            opt("-v, --verbose")
                .describe("Use verbose logging.")
                .accepts(Accepts::Bool)
                .default(false),
        );

    let ctx = parser.parse(&argv);
    match ctx.command() {
        Some("serve") => {
            let port = ctx.get("port").and_then(Value::as_i64).unwrap_or(3000);
            println!("Serving on port {port}.");
        }
        _ => match serde_json::to_string_pretty(ctx.values()) {
            Ok(dump) => println!("{dump}"),
            Err(err) => eprintln!("failed to render values: {err}"),
        },
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
