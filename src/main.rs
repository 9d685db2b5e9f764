use chrono::NaiveDateTime;
use std::process;

use stayfee::billing::pricing;
use stayfee::cli::Cli;
use stayfee::config::{ConfigLoader, RateConfig};
use stayfee::{Bill, FeeEngine};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse_args();

    if cli.list_packs {
        for pack in pricing::catalog() {
            println!(
                "{}: {}s / {} yen (excl. tax)",
                pack.kind, pack.duration_seconds, pack.fee_excl
            );
        }
        return Ok(());
    }

    let rates = match &cli.rates {
        Some(path) => ConfigLoader::load_from_path(path)?,
        None => RateConfig::default(),
    };
    let engine = FeeEngine::new(rates);

    if cli.demo {
        run_demo(&engine)?;
        return Ok(());
    }

    let (enter_raw, leave_raw, pack_name) = match (&cli.enter, &cli.leave, &cli.pack) {
        (Some(enter), Some(leave), Some(pack)) => (enter, leave, pack),
        _ => {
            eprintln!("Error: --enter, --leave and --pack are required (or use --demo / --list-packs)");
            process::exit(1);
        }
    };

    let enter = parse_datetime_arg("--enter", enter_raw);
    let leave = parse_datetime_arg("--leave", leave_raw);

    let pack = match pricing::find_pack(pack_name) {
        Some(pack) => pack,
        None => {
            eprintln!(
                "Error: unknown pack '{}'; see --list-packs for choices",
                pack_name
            );
            process::exit(1);
        }
    };

    match engine.calculate(enter, leave, &pack) {
        Ok(bill) => print_bill(&bill, cli.json)?,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }

    Ok(())
}

fn parse_datetime_arg(flag: &str, value: &str) -> NaiveDateTime {
    match NaiveDateTime::parse_from_str(value, DATETIME_FORMAT) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!(
                "Error: invalid {} '{}': {} (expected \"{}\")",
                flag, value, e, DATETIME_FORMAT
            );
            process::exit(1);
        }
    }
}

fn print_bill(bill: &Bill, as_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(bill)?);
    } else {
        println!("{}", bill);
    }
    Ok(())
}

/// Replay the reference scenarios: extension quantization and night-window
/// boundaries first, then the rejected intervals.
fn run_demo(engine: &FeeEngine) -> Result<(), Box<dyn std::error::Error>> {
    let cases = [
        (
            "1h pack, exact fit",
            "2025-11-02 10:00:00",
            "2025-11-02 11:00:00",
            "1h",
            "ext 0 / night 0",
        ),
        (
            "1h pack, 1s overage in daytime",
            "2025-11-02 10:00:00",
            "2025-11-02 11:00:01",
            "1h",
            "ext 1 / night 0",
        ),
        (
            "1h pack, crosses 22:00 by 1s",
            "2025-11-02 21:00:00",
            "2025-11-02 22:00:01",
            "1h",
            "ext 1 / night 1",
        ),
        (
            "1h pack, extension starts at 05:00",
            "2025-11-02 04:00:00",
            "2025-11-02 05:00:01",
            "1h",
            "ext 1 / night 0",
        ),
        (
            "1h pack, extension crosses midnight",
            "2025-11-02 23:00:00",
            "2025-11-03 00:10:00",
            "1h",
            "ext 1 / night 1",
        ),
        (
            "3h pack, exact fit in the evening",
            "2025-11-02 18:00:00",
            "2025-11-02 21:00:00",
            "3h",
            "ext 0 / night 0",
        ),
        (
            "3h pack, 15 minutes past midnight",
            "2025-11-02 20:50:00",
            "2025-11-03 00:05:00",
            "3h",
            "ext 2 / night 2",
        ),
        (
            "3h pack, stay spanning two nights",
            "2025-11-02 22:55:00",
            "2025-11-04 00:05:00",
            "3h",
            "ext 133 / night 32",
        ),
    ];

    for (label, enter, leave, pack_name, note) in cases {
        let pack = pricing::find_pack(pack_name).ok_or("demo pack missing from catalog")?;
        let bill = engine.calculate(
            NaiveDateTime::parse_from_str(enter, DATETIME_FORMAT)?,
            NaiveDateTime::parse_from_str(leave, DATETIME_FORMAT)?,
            &pack,
        )?;

        println!("============================");
        println!("case : {}", label);
        println!("enter: {}", enter);
        println!("leave: {}", leave);
        println!("note : {}", note);
        println!("----------------------------");
        println!("{}", bill);
    }

    let error_cases = [
        (
            "exit before entry",
            "2025-11-02 10:00:00",
            "2025-11-02 09:59:59",
        ),
        (
            "exit equals entry",
            "2025-11-02 10:00:00",
            "2025-11-02 10:00:00",
        ),
    ];

    for (label, enter, leave) in error_cases {
        let pack = pricing::find_pack("1h").ok_or("demo pack missing from catalog")?;
        let result = engine.calculate(
            NaiveDateTime::parse_from_str(enter, DATETIME_FORMAT)?,
            NaiveDateTime::parse_from_str(leave, DATETIME_FORMAT)?,
            &pack,
        );

        println!("============================");
        println!("case : {}", label);
        println!("enter: {}", enter);
        println!("leave: {}", leave);
        println!("----------------------------");
        match result {
            Ok(_) => println!("unexpected: no error raised"),
            Err(e) => println!("error: {}", e),
        }
    }

    Ok(())
}
