use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use cry_monitor::analysis::{Analyzer, ClassificationResult};
use cry_monitor::config::AppConfig;
use cry_monitor::error::log_feature_error;
use rand::Rng;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(
    name = "cry_cli",
    about = "Deterministic analysis harness for the cry monitor core"
)]
struct Cli {
    /// Override path to the JSON analysis config
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify a mono WAV file window by window and emit a JSON report
    Classify {
        /// Input WAV file
        #[arg(long)]
        input: PathBuf,
        /// Write the JSON report here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Generate one synthetic test tone window and classify it
    Synth {
        /// Tone frequency in Hz
        #[arg(long)]
        freq: f32,
        /// Tone amplitude (linear, nominal [0, 1])
        #[arg(long, default_value_t = 0.3)]
        amplitude: f32,
        /// Uniform noise amplitude mixed into the tone
        #[arg(long, default_value_t = 0.1)]
        noise: f32,
    },
}

fn main() -> ExitCode {
    // Reports go to stdout; keep diagnostics on stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli
        .config
        .as_ref()
        .map(AppConfig::load_from_file)
        .unwrap_or_else(AppConfig::load);

    match cli.command {
        Commands::Classify { input, output } => run_classify(&config, &input, output),
        Commands::Synth {
            freq,
            amplitude,
            noise,
        } => run_synth(&config, freq, amplitude, noise),
    }
}

fn run_classify(config: &AppConfig, input: &PathBuf, output: Option<PathBuf>) -> Result<ExitCode> {
    let (samples, wav_sample_rate) = read_wav_mono(input)?;

    // The WAV's own rate wins over the configured default: feature frequencies
    // are meaningless against the wrong rate
    let mut analysis = config.analysis.clone();
    analysis.sample_rate = wav_sample_rate;
    let analyzer = Analyzer::new(&analysis);

    let window_len = analyzer.window_len();
    if window_len == 0 {
        bail!("configured analysis window is empty");
    }

    let mut events = Vec::new();
    for (index, window) in samples.chunks_exact(window_len).enumerate() {
        let start_ms = (index * window_len) as f64 / wav_sample_rate as f64 * 1000.0;
        match analyzer.analyze(window) {
            Ok(result) => events.push(WindowReport::from_result(index, start_ms, &result)),
            Err(err) => {
                // Failed extraction is an empty cycle, not a crash
                log_feature_error(&err, "cry_cli classify");
                events.push(WindowReport {
                    index,
                    start_ms,
                    matched: None,
                    display_name: None,
                    message: err.message(),
                });
            }
        }
    }

    let report = ClassifyReportPayload {
        input: input.display().to_string(),
        sample_rate: wav_sample_rate,
        window_count: events.len(),
        events,
    };
    emit_report(&report, output)?;

    Ok(ExitCode::from(0))
}

fn run_synth(config: &AppConfig, freq: f32, amplitude: f32, noise: f32) -> Result<ExitCode> {
    let analyzer = Analyzer::new(&config.analysis);
    let sample_rate = analyzer.sample_rate() as f32;

    let mut rng = rand::thread_rng();
    let window: Vec<f32> = (0..analyzer.window_len())
        .map(|i| {
            let t = i as f32 / sample_rate;
            let tone = amplitude * (2.0 * std::f32::consts::PI * freq * t).sin();
            tone + noise * rng.gen_range(-1.0..1.0)
        })
        .collect();

    let result = analyzer
        .analyze(&window)
        .context("analyzing synthetic window")?;

    let report = SynthReportPayload {
        frequency_hz: freq,
        amplitude,
        noise,
        display_name: result.display_name(),
        result,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(ExitCode::from(0))
}

/// Decode a WAV file to mono f32 samples, averaging channels when needed
fn read_wav_mono(path: &PathBuf) -> Result<(Vec<f32>, u32)> {
    let mut reader = hound::WavReader::open(path)
        .with_context(|| format!("opening WAV file {}", path.display()))?;
    let spec = reader.spec();

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<std::result::Result<_, _>>()
            .context("decoding float samples")?,
        hound::SampleFormat::Int => {
            let scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<std::result::Result<_, _>>()
                .context("decoding integer samples")?
        }
    };

    let channels = spec.channels as usize;
    if channels == 0 {
        bail!("WAV file reports zero channels");
    }
    let samples = if channels == 1 {
        interleaved
    } else {
        interleaved
            .chunks_exact(channels)
            .map(|frame| frame.iter().sum::<f32>() / channels as f32)
            .collect()
    };

    Ok((samples, spec.sample_rate))
}

fn emit_report(report: &ClassifyReportPayload, output_path: Option<PathBuf>) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;

    if let Some(path) = output_path {
        fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
    } else {
        println!("{json}");
    }

    Ok(())
}

#[derive(Serialize)]
struct ClassifyReportPayload {
    input: String,
    sample_rate: u32,
    window_count: usize,
    events: Vec<WindowReport>,
}

#[derive(Serialize)]
struct WindowReport {
    index: usize,
    start_ms: f64,
    matched: Option<cry_monitor::taxonomy::CryKind>,
    display_name: Option<&'static str>,
    message: String,
}

impl WindowReport {
    fn from_result(index: usize, start_ms: f64, result: &ClassificationResult) -> Self {
        Self {
            index,
            start_ms,
            matched: result.matched,
            display_name: result.display_name(),
            message: result.message.clone(),
        }
    }
}

#[derive(Serialize)]
struct SynthReportPayload {
    frequency_hz: f32,
    amplitude: f32,
    noise: f32,
    display_name: Option<&'static str>,
    result: ClassificationResult,
}
