//! # Caddis Host Daemon
//!
//! Main entry point for the Caddis demo runtime.

use caddisd::{HostRuntime, HostRuntimeConfig};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    let config = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_usage(&args[0]);
        process::exit(1);
    });

    let mut runtime = HostRuntime::new(config).unwrap_or_else(|e| {
        eprintln!("Failed to create runtime: {}", e);
        process::exit(1);
    });

    if let Err(e) = runtime.run() {
        eprintln!("Runtime error: {}", e);
        process::exit(1);
    }

    print!("{}", runtime.event_report());
}

fn parse_args(args: &[String]) -> Result<HostRuntimeConfig, String> {
    let mut config = HostRuntimeConfig::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --config".to_string());
                }
                config.config_path = Some(PathBuf::from(&args[i]));
            }
            "--script" | "-s" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --script".to_string());
                }
                let script_path = &args[i];
                let script_text = fs::read_to_string(script_path)
                    .map_err(|e| format!("Failed to read script file: {}", e))?;
                config.script = Some(script_text);
            }
            "--max-steps" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --max-steps".to_string());
                }
                config.max_steps = args[i]
                    .parse()
                    .map_err(|_| format!("Invalid max-steps value: {}", args[i]))?;
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other => {
                return Err(format!("Unknown option: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --config <FILE>      Shell config file (versioned JSON)");
    eprintln!("  -s, --script <FILE>      Session script file");
    eprintln!("  --max-steps <N>          Maximum script steps to run (0 = unlimited)");
    eprintln!("  -h, --help               Show this help message");
    eprintln!();
    eprintln!("Session script commands:");
    eprintln!("  back                     Press the hardware back button");
    eprintln!("  nav <URL>                Page raises a link navigation");
    eprintln!("  nav-legacy <URL>         Page raises a legacy string navigation");
    eprintln!("  handler on|off           Page installs or removes its back handler");
    eprintln!("  bridge <OPERATION>       Page invokes a bridge operation");
    eprintln!("  wait <DURATION>          Advance logical time (e.g. 500ms, 2s)");
    eprintln!("  destroy                  Platform tears the shell down");
}
