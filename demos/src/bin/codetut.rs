use argot::{Accepts, Colors, Parser, Value, opt, pos};
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt};

fn red(text: &str) -> String {
    text.red().to_string()
}

fn on_cyan(text: &str) -> String {
    text.on_cyan().to_string()
}

fn italic(text: &str) -> String {
    text.italic().to_string()
}

fn main() {
    init_tracing();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let ctx = Parser::new("codetut")
        .describe("A program for generating interactive coding tutorials.")
        .suffix(" [files...]")
        .colors(
            Colors::default()
                .error(red)
                .header(on_cyan)
                .description(italic),
        )
        .arg(
            pos("files")
                .describe("The input files.")
                .required(true)
                .multiple(true),
        )
        .arg(
            opt("-t, --template")
                .describe("The template to use")
                .accepts(Accepts::one_of(["scrollycoding"]))
                .default("scrollycoding"),
        )
        .parse(&argv);

    let files = ctx.get("files").map(Value::to_string).unwrap_or_default();
    let template = ctx
        .get("template")
        .and_then(Value::as_str)
        .unwrap_or("scrollycoding");
    println!("Compiling {files} with template {template}");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
