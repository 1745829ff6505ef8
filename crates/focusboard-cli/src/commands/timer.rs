use std::io::Write;
use std::rc::Rc;
use std::time::Duration;

use clap::Subcommand;
use focusboard_core::clock::format_countdown;
use focusboard_core::host::persist_hook;
use focusboard_core::storage::{load_or_default, SETTINGS_KEY};
use focusboard_core::timer::CustomBounds;
use focusboard_core::{
    AudioRenderer, Config, Database, Event, Preset, Ticker, TimerEngine, TimerSettings, Tone,
    Watched,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use super::open_store;

#[derive(Subcommand)]
pub enum TimerAction {
    /// Print the timer state as JSON
    Status,
    /// List the available presets
    Presets,
    /// Switch to a preset (short, medium, long)
    Preset {
        /// Preset name or ratio, e.g. `short` or `25/5`
        name: Preset,
    },
    /// Use custom durations (work 5-120 min, break 1-30 min)
    Custom {
        /// Work minutes
        #[arg(long = "work")]
        work_min: u64,
        /// Break minutes
        #[arg(long = "break")]
        break_min: u64,
    },
    /// Run the timer in the foreground.
    ///
    /// Reads commands from stdin: `p` start/pause, `r` reset, `s` sound on/off, `q` quit.
    Run {
        /// Start paused instead of counting down immediately
        #[arg(long)]
        paused: bool,
        /// Stop after this many clock ticks
        #[arg(long)]
        ticks: Option<u64>,
        /// Disable alert tones for this session
        #[arg(long)]
        mute: bool,
    },
}

/// Rings the terminal bell for each alert tone.
struct TerminalBell;

impl AudioRenderer for TerminalBell {
    fn play(&self, tone: &Tone) {
        debug!(
            frequency_hz = tone.frequency_hz,
            duration_secs = tone.duration_secs,
            volume = tone.volume,
            "alert tone"
        );
        let mut err = std::io::stderr();
        let _ = err.write_all(b"\x07");
        let _ = err.flush();
    }
}

fn load_timer(db: &Rc<Database>, config: &Config) -> Watched<TimerEngine> {
    let settings: TimerSettings = load_or_default(&**db, SETTINGS_KEY);
    let mut engine = TimerEngine::new(settings);
    engine.set_sound_enabled(config.timer.sound_enabled);

    let mut timer = Watched::new(engine);
    timer.subscribe(persist_hook(db.clone(), SETTINGS_KEY, |e: &TimerEngine| {
        *e.settings()
    }));
    timer
}

fn print_event(event: &Event) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string(event)?);
    Ok(())
}

pub fn run(action: TimerAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let db = open_store(config)?;
    let mut timer = load_timer(&db, config);

    match action {
        TimerAction::Status => {
            println!("{}", serde_json::to_string_pretty(&timer.get().snapshot())?);
        }
        TimerAction::Presets => {
            let current = timer.get().settings().preset;
            for preset in Preset::all() {
                let marker = if preset == current { "*" } else { " " };
                match preset.durations() {
                    Some((work, brk)) => println!(
                        "{marker} {:<18} work {} / break {}",
                        preset.label(),
                        format_countdown(work),
                        format_countdown(brk)
                    ),
                    None => println!("{marker} {}", preset.label()),
                }
            }
        }
        TimerAction::Preset { name } => {
            if name == Preset::Custom {
                return Err("use `timer custom --work <min> --break <min>` for custom durations".into());
            }
            let event = timer.update(|e| e.apply_settings(TimerSettings::from_preset(name)))?;
            print_event(&event)?;
        }
        TimerAction::Custom { work_min, break_min } => {
            let settings = CustomBounds::default().settings_from_minutes(work_min, break_min)?;
            let event = timer.update(|e| e.apply_settings(settings))?;
            print_event(&event)?;
        }
        TimerAction::Run {
            paused,
            ticks,
            mute,
        } => {
            if mute {
                timer.update(|e| e.set_sound_enabled(false));
            }
            let period = Duration::from_millis(config.timer.tick_interval_ms.max(1));
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            let result = runtime.block_on(run_loop(&mut timer, period, !paused, ticks));
            // A pending stdin read would block a normal shutdown.
            runtime.shutdown_background();
            result?;
        }
    }
    Ok(())
}

/// Host loop: clock ticks, stdin commands and Ctrl-C, handled one at a time
/// in arrival order.
async fn run_loop(
    timer: &mut Watched<TimerEngine>,
    period: Duration,
    autostart: bool,
    max_ticks: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let renderer = TerminalBell;
    let (ticker, mut clock) = Ticker::spawn(period);
    let mut stdin = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let mut delivered: u64 = 0;

    info!(period_ms = period.as_millis() as u64, "timer session started");
    if autostart {
        if let Some(event) = timer.update(|e| e.start()) {
            print_event(&event)?;
        }
    }

    loop {
        if max_ticks.is_some_and(|max| delivered >= max) {
            break;
        }

        tokio::select! {
            tick = clock.recv() => {
                if tick.is_none() {
                    break;
                }
                delivered += 1;
                if let Some(event) = timer.update(|e| e.tick()) {
                    if let Some(tone) = event.tone() {
                        renderer.play(tone);
                    }
                    print_event(&event)?;
                }
                let engine = timer.get();
                eprint!(
                    "\r{} {:<5}{}",
                    format_countdown(engine.remaining_secs()),
                    engine.mode().label(),
                    if engine.is_running() { "" } else { " (paused)" }
                );
            }
            line = stdin.next_line(), if stdin_open => {
                match line? {
                    Some(command) => {
                        let event = match command.trim() {
                            "p" | "" => timer.update(|e| e.toggle()),
                            "r" => timer.update(|e| e.reset()),
                            "s" => {
                                timer.update(|e| e.set_sound_enabled(!e.sound_enabled()));
                                Some(timer.get().snapshot_event())
                            }
                            "q" => break,
                            other => {
                                eprintln!("unknown command '{other}' (p, r, s, q)");
                                None
                            }
                        };
                        if let Some(event) = event {
                            print_event(&event)?;
                        }
                    }
                    None => stdin_open = false,
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    ticker.cancel();
    eprintln!();
    print_event(&timer.get().snapshot_event())?;
    info!(ticks = delivered, "timer session ended");
    Ok(())
}
