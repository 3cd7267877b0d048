//! Light and color monitoring node simulator.
//!
//! Runs the node's sampling loop against synthetic scenes and a scripted
//! button session, printing each frame: the OLED as text, the console
//! mirror, the matrix color, the buzzer and the recent events.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]

use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use lumicolor::script::parse_script;
use lumicolor::{Frame, SceneTrack, Script, Simulation, ascii};

#[derive(Parser, Debug)]
#[command(name = "lumicolor-sim", about = "Simulate the light and color monitoring node", version)]
struct Cli {
    /// Sampling cycles to run
    #[arg(long, default_value_t = 300)]
    frames: u32,

    /// Simulated milliseconds between cycles
    #[arg(long, default_value_t = 100)]
    interval_ms: u32,

    /// Pace the run in wall-clock time instead of as fast as possible
    #[arg(long)]
    realtime: bool,

    /// Button edges as `<ms>:<a|b|j>,...` (default: a walk through every screen)
    #[arg(long)]
    script: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let script = match cli.script.as_deref() {
        Some(text) => match parse_script(text) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("--script: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => Script::default_session(),
    };

    let mut sim = Simulation::new(SceneTrack::default(), script).with_interval(cli.interval_ms);
    let frame_time = Duration::from_millis(u64::from(sim.interval_ms()));

    for _ in 0..cli.frames {
        let frame_start = Instant::now();

        let frame = sim.step();
        print_frame(&sim, &frame);

        if cli.realtime {
            let elapsed = frame_start.elapsed();
            if elapsed < frame_time {
                thread::sleep(frame_time - elapsed);
            }
        }
    }

    let unplayed = sim.script().remaining();
    if unplayed > 0 {
        eprintln!("{unplayed} button edge(s) not reached by t={} ms", sim.now_ms());
    }

    ExitCode::SUCCESS
}

fn print_frame(
    sim: &Simulation,
    frame: &Frame,
) {
    let decision = &frame.decision;
    let output = decision.output;

    println!("==== t={} ms | cena: {} ====", frame.at_ms, frame.scene);
    print!("{}", ascii::render(sim.display()));

    println!("{}", frame.screen.console_banner());
    for line in &frame.lines {
        println!("{line}");
    }
    println!("{}", frame.screen.console_footer());

    println!(
        "matriz: ({}, {}, {}){}",
        output.r,
        output.g,
        output.b,
        if output.is_off() { " apagada" } else { "" }
    );
    println!("buzzer: {}", if frame.buzzer_on() { "ON" } else { "off" });

    for event in sim.events().iter() {
        println!("  {event}");
    }
    println!();
}
