use nfa_compiler::{compile_str, layout, Canvas, Converter, LayoutConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

const USAGE: &str = "nfa PATTERN [--dot] [--seed N] [--width W] [--height H]";

#[derive(Default)]
struct Args {
    pattern: Option<String>,
    dot: bool,
    seed: Option<u64>,
    canvas: Canvas,
}

fn parse_flag_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, String> {
    value
        .and_then(|value| value.parse().ok())
        .ok_or_else(|| format!("invalid value for {}\n{}", flag, USAGE))
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    let mut argv = std::env::args().skip(1);

    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--dot" | "-d" => args.dot = true,
            "--seed" => args.seed = Some(parse_flag_value("--seed", argv.next())?),
            "--width" => args.canvas.width = parse_flag_value("--width", argv.next())?,
            "--height" => args.canvas.height = parse_flag_value("--height", argv.next())?,
            _ if args.pattern.is_none() => args.pattern = Some(arg),
            _ => return Err(USAGE.to_string()),
        }
    }

    Ok(args)
}

fn main() -> Result<(), String> {
    env_logger::init();

    let args = parse_args()?;
    // an absent pattern is the empty expression.
    let pattern = args.pattern.unwrap_or_default();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if args.dot {
        let mut automaton = compile_str(&pattern).map_err(|e| e.to_string())?;
        layout(
            automaton.states_mut(),
            args.canvas,
            &LayoutConfig::default(),
            &mut rng,
        );

        print!("{}", automaton.to_dot());
    } else {
        let mut converter = Converter::with_rng(args.canvas, rng);
        let snapshot = converter.convert(&pattern).map_err(|e| e.to_string())?;
        let json = serde_json::to_string_pretty(&*snapshot).map_err(|e| e.to_string())?;

        println!("{}", json);
    }

    Ok(())
}
